use crate::{
    entities::{collection, style, Collection, Style},
    errors::ServiceError,
    events::{Event, EventSender},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Service for managing seasonal collections
#[derive(Clone)]
pub struct CollectionService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

#[derive(Debug, Clone)]
pub struct CreateCollectionInput {
    pub name: String,
    pub season: String,
    pub year: i32,
    pub description: Option<String>,
}

impl CollectionService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    /// Create a new collection
    #[instrument(skip(self))]
    pub async fn create_collection(
        &self,
        input: CreateCollectionInput,
    ) -> Result<collection::Model, ServiceError> {
        let collection_id = Uuid::new_v4();

        let model = collection::ActiveModel {
            id: Set(collection_id),
            name: Set(input.name),
            season: Set(input.season),
            year: Set(input.year),
            description: Set(input.description),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::CollectionCreated(collection_id))
            .await;

        info!("Created collection: {}", collection_id);
        Ok(created)
    }

    /// Get a collection by ID
    #[instrument(skip(self))]
    pub async fn get_collection(
        &self,
        collection_id: Uuid,
    ) -> Result<collection::Model, ServiceError> {
        Collection::find_by_id(collection_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Collection {} not found", collection_id))
            })
    }

    /// Get a collection together with its styles
    #[instrument(skip(self))]
    pub async fn get_collection_with_styles(
        &self,
        collection_id: Uuid,
    ) -> Result<(collection::Model, Vec<style::Model>), ServiceError> {
        let collection = self.get_collection(collection_id).await?;

        let styles = Style::find()
            .filter(style::Column::CollectionId.eq(collection_id))
            .order_by_desc(style::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok((collection, styles))
    }

    /// List collections, newest first
    #[instrument(skip(self))]
    pub async fn list_collections(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<collection::Model>, u64), ServiceError> {
        let total = Collection::find().count(&*self.db).await?;

        let collections = Collection::find()
            .order_by_desc(collection::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok((collections, total))
    }
}
