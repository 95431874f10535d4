use crate::{
    entities::{passport, Collection, Passport},
    errors::ServiceError,
    events::{Event, EventSender},
    passport::{build_passport, ProductData},
    services::styles::StyleService,
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Service that mints and serves digital product passports.
///
/// Minting snapshots the style's descriptive data, derives the passport
/// identity (fresh id, id digest, QR payload) through the identity builder,
/// and persists the result exactly once. Passports are immutable and are
/// looked up by exact primary key only.
#[derive(Clone)]
pub struct PassportService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
    styles: StyleService,
    /// Public host the QR payload URLs point at
    base_url: String,
    /// Prefix for derived product codes, e.g. "ATL" -> "ATL-1a2b3c4d"
    code_prefix: String,
}

#[derive(Debug, Clone, Default)]
pub struct MintPassportInput {
    pub certificates: Vec<String>,
    pub additional_info: Option<String>,
}

impl PassportService {
    pub fn new(
        db: Arc<DatabaseConnection>,
        event_sender: Arc<EventSender>,
        styles: StyleService,
        base_url: String,
        code_prefix: String,
    ) -> Self {
        Self {
            db,
            event_sender,
            styles,
            base_url,
            code_prefix,
        }
    }

    /// Mint a passport for a style.
    ///
    /// The style must exist; that is checked here, before the identity
    /// builder runs. Minting again for the same style produces a fresh,
    /// unlinked passport and repoints the style at it.
    #[instrument(skip(self))]
    pub async fn mint_for_style(
        &self,
        style_id: Uuid,
        input: MintPassportInput,
    ) -> Result<passport::Model, ServiceError> {
        let style = self.styles.get_style(style_id).await?;

        let collection_name = Collection::find_by_id(style.collection_id)
            .one(&*self.db)
            .await?
            .map(|c| c.name)
            .unwrap_or_default();

        let style_key = style.id.to_string();
        let product = ProductData {
            code: format!("{}-{}", self.code_prefix, &style_key[..8]),
            name: style.name.clone(),
            collection: collection_name,
            materials: style.material_names(),
            production_location: style.production_location.clone(),
            carbon_footprint: style.carbon_footprint,
            certificates: input.certificates,
            supplier: style.supplier.clone(),
            additional_info: input.additional_info.clone().unwrap_or_default(),
        };

        let minted = build_passport(product, &self.base_url)?;

        let model = passport::ActiveModel {
            id: Set(minted.id),
            style_id: Set(style.id),
            product_code: Set(minted.product.code.clone()),
            name: Set(minted.product.name.clone()),
            collection_name: Set(minted.product.collection.clone()),
            materials: Set(serde_json::to_value(&minted.product.materials)?),
            production_location: Set(minted.product.production_location.clone()),
            carbon_footprint: Set(minted.product.carbon_footprint),
            certificates: Set(serde_json::to_value(&minted.product.certificates)?),
            supplier: Set(minted.product.supplier.clone()),
            blockchain_hash: Set(minted.blockchain_hash.clone()),
            qr_url: Set(minted.qr_url.clone()),
            qr_code: Set(minted.qr_code.clone()),
            additional_info: Set(input.additional_info),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;

        self.styles
            .mark_passport_issued(style.id, created.id)
            .await?;

        self.event_sender
            .send_or_log(Event::PassportIssued {
                passport_id: created.id,
                style_id: style.id,
            })
            .await;

        info!("Issued passport {} for style {}", created.id, style.id);
        Ok(created)
    }

    /// Get a passport by its exact ID
    #[instrument(skip(self))]
    pub async fn get_passport(&self, passport_id: Uuid) -> Result<passport::Model, ServiceError> {
        Passport::find_by_id(passport_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Passport {} not found", passport_id)))
    }

    /// List passports, newest first
    #[instrument(skip(self))]
    pub async fn list_passports(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<passport::Model>, u64), ServiceError> {
        let total = Passport::find().count(&*self.db).await?;

        let passports = Passport::find()
            .order_by_desc(passport::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((passports, total))
    }
}
