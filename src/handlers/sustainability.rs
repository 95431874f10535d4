use crate::handlers::common::{map_service_error, success_response};
use crate::{errors::ApiError, AppState};
use axum::{extract::State, response::IntoResponse, routing::get, Router};

/// Creates the router for sustainability reporting endpoints
pub fn sustainability_routes() -> Router<AppState> {
    Router::new()
        .route("/sustainability", get(sustainability_summary))
        .route("/stats", get(dashboard_stats))
}

/// Sustainability dashboard: total/average carbon and lowest-footprint styles
#[utoipa::path(
    get,
    path = "/api/v1/sustainability",
    responses((status = 200, description = "Sustainability summary")),
    tag = "Sustainability"
)]
pub async fn sustainability_summary(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .services
        .sustainability
        .summary()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(summary))
}

/// Dashboard statistics: entity counts plus accumulated carbon
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses((status = 200, description = "Dashboard statistics")),
    tag = "Sustainability"
)]
pub async fn dashboard_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state
        .services
        .sustainability
        .stats()
        .await
        .map_err(map_service_error)?;

    Ok(success_response(stats))
}
