use crate::{
    entities::{supplier, Supplier},
    errors::ServiceError,
    events::{Event, EventSender},
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Service for managing supplier records
#[derive(Clone)]
pub struct SupplierService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

#[derive(Debug, Clone)]
pub struct CreateSupplierInput {
    pub name: String,
    pub location: Option<String>,
    pub contact_info: Option<serde_json::Value>,
    pub sustainability_score: Option<f64>,
    pub certificates: Option<Vec<String>>,
}

impl SupplierService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Create a new supplier
    #[instrument(skip(self))]
    pub async fn create_supplier(
        &self,
        input: CreateSupplierInput,
    ) -> Result<supplier::Model, ServiceError> {
        let supplier_id = Uuid::new_v4();

        let certificates = input
            .certificates
            .map(|certs| serde_json::to_value(&certs))
            .transpose()?;

        let model = supplier::ActiveModel {
            id: Set(supplier_id),
            name: Set(input.name),
            location: Set(input.location),
            contact_info: Set(input.contact_info),
            sustainability_score: Set(input.sustainability_score),
            certificates: Set(certificates),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::SupplierCreated(supplier_id))
            .await;

        info!("Created supplier: {}", supplier_id);
        Ok(created)
    }

    /// Get a supplier by ID
    #[instrument(skip(self))]
    pub async fn get_supplier(&self, supplier_id: Uuid) -> Result<supplier::Model, ServiceError> {
        Supplier::find_by_id(supplier_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Supplier {} not found", supplier_id)))
    }

    /// List suppliers
    #[instrument(skip(self))]
    pub async fn list_suppliers(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<supplier::Model>, u64), ServiceError> {
        let total = Supplier::find().count(&*self.db).await?;

        let suppliers = Supplier::find()
            .order_by_asc(supplier::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((suppliers, total))
    }
}
