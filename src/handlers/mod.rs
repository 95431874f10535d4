pub mod collections;
pub mod common;
pub mod passports;
pub mod styles;
pub mod suppliers;
pub mod sustainability;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::ServiceError;
use crate::events::EventSender;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub collections: Arc<crate::services::collections::CollectionService>,
    pub styles: Arc<crate::services::styles::StyleService>,
    pub passports: Arc<crate::services::passports::PassportService>,
    pub suppliers: Arc<crate::services::suppliers::SupplierService>,
    pub sustainability: Arc<crate::services::sustainability::SustainabilityService>,
    pub imaging: Arc<crate::services::imaging::ImagingService>,
}

impl AppServices {
    /// Build the service container shared by all HTTP handlers.
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
        cfg: &AppConfig,
    ) -> Result<Self, ServiceError> {
        let collections = Arc::new(crate::services::collections::CollectionService::new(
            db_pool.clone(),
            event_sender.clone(),
        ));
        let styles_service =
            crate::services::styles::StyleService::new(db_pool.clone(), event_sender.clone());
        let passports = Arc::new(crate::services::passports::PassportService::new(
            db_pool.clone(),
            event_sender.clone(),
            styles_service.clone(),
            cfg.passport_base_url.clone(),
            cfg.product_code_prefix.clone(),
        ));
        let suppliers = Arc::new(crate::services::suppliers::SupplierService::new(
            db_pool.clone(),
            event_sender,
        ));
        let sustainability = Arc::new(crate::services::sustainability::SustainabilityService::new(
            db_pool,
        ));
        let imaging = Arc::new(crate::services::imaging::ImagingService::new(cfg)?);

        Ok(Self {
            collections,
            styles: Arc::new(styles_service),
            passports,
            suppliers,
            sustainability,
            imaging,
        })
    }
}
