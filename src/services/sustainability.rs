use crate::{
    entities::{style, Collection, Passport, Style, Supplier},
    errors::ServiceError,
};
use sea_orm::{
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Number of styles highlighted on the sustainability dashboard
const LOW_CARBON_HIGHLIGHT_COUNT: u64 = 5;

/// Read-only aggregates over stored carbon footprints
#[derive(Clone)]
pub struct SustainabilityService {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, Serialize)]
pub struct SustainabilitySummary {
    pub total_carbon: f64,
    pub average_carbon: f64,
    pub total_styles: u64,
    pub lowest_carbon_styles: Vec<style::Model>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub collections: u64,
    pub styles: u64,
    pub suppliers: u64,
    pub passports: u64,
    pub total_carbon: f64,
}

impl SustainabilityService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Sustainability dashboard: totals, averages, and the styles with the
    /// smallest footprints.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<SustainabilitySummary, ServiceError> {
        let footprints = self.style_footprints().await?;

        let total_styles = footprints.len() as u64;
        let total_carbon: f64 = footprints.iter().sum();
        let average_carbon = if total_styles == 0 {
            0.0
        } else {
            total_carbon / total_styles as f64
        };

        let lowest_carbon_styles = Style::find()
            .order_by_asc(style::Column::CarbonFootprint)
            .limit(LOW_CARBON_HIGHLIGHT_COUNT)
            .all(&*self.db)
            .await?;

        Ok(SustainabilitySummary {
            total_carbon: round_to_cents(total_carbon),
            average_carbon: round_to_cents(average_carbon),
            total_styles,
            lowest_carbon_styles,
        })
    }

    /// Entity counts plus the accumulated carbon total
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, ServiceError> {
        let collections = Collection::find().count(&*self.db).await?;
        let styles = Style::find().count(&*self.db).await?;
        let suppliers = Supplier::find().count(&*self.db).await?;
        let passports = Passport::find().count(&*self.db).await?;

        let total_carbon: f64 = self.style_footprints().await?.iter().sum();

        Ok(DashboardStats {
            collections,
            styles,
            suppliers,
            passports,
            total_carbon: round_to_cents(total_carbon),
        })
    }

    async fn style_footprints(&self) -> Result<Vec<f64>, ServiceError> {
        Style::find()
            .select_only()
            .column(style::Column::CarbonFootprint)
            .into_tuple::<f64>()
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
