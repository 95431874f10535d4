use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StyleStatus {
    /// Freshly created, still in the design phase
    Design,
    /// A digital passport has been issued for this style
    PassportIssued,
}

/// Individual garment design belonging to a collection
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "styles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Style name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub collection_id: Uuid,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Category must be between 1 and 100 characters"
    ))]
    pub category: String,

    /// Material names as a JSON array of strings. Free text; factors fall
    /// back to a neutral multiplier for anything not in the lookup table.
    #[sea_orm(column_type = "Json")]
    pub materials: Json,

    pub target_price: Option<Decimal>,

    pub production_location: String,

    pub supplier: String,

    /// Heuristic kg CO2e estimate, fixed at creation time. Style edits do
    /// not recompute it.
    pub carbon_footprint: f64,

    pub status: String,

    pub image_url: Option<String>,

    /// Set once a passport has been minted for this style.
    pub passport_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// Materials decoded from the JSON column; malformed rows decode empty.
    pub fn material_names(&self) -> Vec<String> {
        serde_json::from_value(self.materials.clone()).unwrap_or_default()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collection::Entity",
        from = "Column::CollectionId",
        to = "super::collection::Column::Id"
    )]
    Collection,
    #[sea_orm(has_many = "super::passport::Entity")]
    Passports,
}

impl Related<super::collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collection.def()
    }
}

impl Related<super::passport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passports.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            if let ActiveValue::NotSet = active_model.status {
                active_model.status = Set(StyleStatus::Design.to_string());
            }
            if let ActiveValue::NotSet = active_model.created_at {
                active_model.created_at = Set(Utc::now());
            }
        }

        active_model.updated_at = Set(Some(Utc::now()));

        Ok(active_model)
    }
}
