use crate::{
    carbon,
    entities::{style, style::StyleStatus, Collection, Style},
    errors::ServiceError,
    events::{Event, EventSender},
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Transport mode assumed for new styles. The estimator accepts it but the
/// current formula does not weight it.
const DEFAULT_TRANSPORT_MODE: &str = "sea";

/// Service for managing garment styles
#[derive(Clone)]
pub struct StyleService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

#[derive(Debug, Clone)]
pub struct CreateStyleInput {
    pub name: String,
    pub collection_id: Uuid,
    pub category: String,
    pub materials: Vec<String>,
    pub target_price: Option<Decimal>,
    pub production_location: String,
    pub supplier: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStyleInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub materials: Option<Vec<String>>,
    pub target_price: Option<Decimal>,
    pub production_location: Option<String>,
    pub supplier: Option<String>,
}

impl StyleService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Create a new style. The carbon footprint is estimated here, once, from
    /// the submitted materials and production location.
    #[instrument(skip(self))]
    pub async fn create_style(
        &self,
        input: CreateStyleInput,
    ) -> Result<style::Model, ServiceError> {
        // The collection must exist before a style can join it
        Collection::find_by_id(input.collection_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Collection {} not found", input.collection_id))
            })?;

        let materials: Vec<String> = input
            .materials
            .iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        let carbon_footprint = carbon::estimate_carbon_footprint(
            &materials,
            &input.production_location,
            DEFAULT_TRANSPORT_MODE,
        );

        let style_id = Uuid::new_v4();

        let model = style::ActiveModel {
            id: Set(style_id),
            name: Set(input.name),
            collection_id: Set(input.collection_id),
            category: Set(input.category),
            materials: Set(serde_json::to_value(&materials)?),
            target_price: Set(input.target_price),
            production_location: Set(input.production_location),
            supplier: Set(input.supplier),
            carbon_footprint: Set(carbon_footprint),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::StyleCreated {
                style_id,
                collection_id: created.collection_id,
                carbon_footprint,
            })
            .await;

        info!(
            "Created style {} with carbon footprint {} kg CO2e",
            style_id, carbon_footprint
        );
        Ok(created)
    }

    /// Get a style by ID
    #[instrument(skip(self))]
    pub async fn get_style(&self, style_id: Uuid) -> Result<style::Model, ServiceError> {
        Style::find_by_id(style_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Style {} not found", style_id)))
    }

    /// List styles, optionally scoped to a collection
    #[instrument(skip(self))]
    pub async fn list_styles(
        &self,
        collection_id: Option<Uuid>,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<style::Model>, u64), ServiceError> {
        let mut query = Style::find();

        if let Some(collection_id) = collection_id {
            query = query.filter(style::Column::CollectionId.eq(collection_id));
        }

        let total = query.clone().count(&*self.db).await?;

        let styles = query
            .order_by_desc(style::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((styles, total))
    }

    /// Update a style's descriptive fields.
    ///
    /// The stored carbon footprint is NOT recomputed, even when materials or
    /// the production location change: the footprint is fixed at creation
    /// time. Downstream passports snapshot whatever value was stored.
    #[instrument(skip(self))]
    pub async fn update_style(
        &self,
        style_id: Uuid,
        input: UpdateStyleInput,
    ) -> Result<style::Model, ServiceError> {
        let existing = self.get_style(style_id).await?;
        let mut active: style::ActiveModel = existing.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(materials) = input.materials {
            let materials: Vec<String> = materials
                .iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect();
            active.materials = Set(serde_json::to_value(&materials)?);
        }
        if let Some(target_price) = input.target_price {
            active.target_price = Set(Some(target_price));
        }
        if let Some(production_location) = input.production_location {
            active.production_location = Set(production_location);
        }
        if let Some(supplier) = input.supplier {
            active.supplier = Set(supplier);
        }

        let updated = active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::StyleUpdated(style_id))
            .await;

        info!("Updated style: {}", style_id);
        Ok(updated)
    }

    /// Attach a generated product image to a style
    #[instrument(skip(self))]
    pub async fn attach_image(
        &self,
        style_id: Uuid,
        image_url: String,
    ) -> Result<style::Model, ServiceError> {
        let existing = self.get_style(style_id).await?;
        let mut active: style::ActiveModel = existing.into();
        active.image_url = Set(Some(image_url.clone()));

        let updated = active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::StyleImageAttached {
                style_id,
                image_url,
            })
            .await;

        Ok(updated)
    }

    /// Link an issued passport to its style and flip the lifecycle status
    #[instrument(skip(self))]
    pub async fn mark_passport_issued(
        &self,
        style_id: Uuid,
        passport_id: Uuid,
    ) -> Result<style::Model, ServiceError> {
        let existing = self.get_style(style_id).await?;
        let mut active: style::ActiveModel = existing.into();
        active.passport_id = Set(Some(passport_id));
        active.status = Set(StyleStatus::PassportIssued.to_string());

        let updated = active.update(&*self.db).await?;
        Ok(updated)
    }
}
