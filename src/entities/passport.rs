use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Digital product passport: a denormalized snapshot of a style at minting
/// time plus its derived identity (hash, QR payload). Created once, never
/// mutated, looked up by exact primary key only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "passports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub style_id: Uuid,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Product code must be between 1 and 50 characters"
    ))]
    pub product_code: String,

    pub name: String,

    pub collection_name: String,

    #[sea_orm(column_type = "Json")]
    pub materials: Json,

    pub production_location: String,

    pub carbon_footprint: f64,

    #[sea_orm(column_type = "Json")]
    pub certificates: Json,

    pub supplier: String,

    /// Hex SHA-256 of the passport id string. A display hash, not a ledger
    /// transaction id.
    pub blockchain_hash: String,

    /// Public URL encoded into the QR code.
    pub qr_url: String,

    /// Base64 PNG data URI of the rendered QR code.
    #[sea_orm(column_type = "Text")]
    pub qr_code: String,

    pub additional_info: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::style::Entity",
        from = "Column::StyleId",
        to = "super::style::Column::Id"
    )]
    Style,
}

impl Related<super::style::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Style.def()
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
            if let ActiveValue::NotSet = active_model.created_at {
                active_model.created_at = Set(Utc::now());
            }
        }

        Ok(active_model)
    }
}
