use crate::handlers::common::{
    created_response, map_service_error, success_response, PaginatedResponse, PaginationParams,
};
use crate::{errors::ApiError, services::passports::MintPassportInput, AppState};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

/// Router for passport management endpoints under /api/v1
pub fn passports_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_passports))
        .route("/:id", get(get_passport))
}

/// Router for the passport mint endpoint, nested under /api/v1/styles
pub fn mint_routes() -> Router<AppState> {
    Router::new().route("/:id/passport", post(mint_passport))
}

/// Router for the public passport view the QR payload URL resolves to
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/passport/:id", get(view_passport))
}

#[derive(Debug, Deserialize, Default, ToSchema)]
pub struct MintPassportRequest {
    #[serde(default)]
    pub certificates: Vec<String>,
    pub additional_info: Option<String>,
}

/// Mint a digital passport for a style
#[utoipa::path(
    post,
    path = "/api/v1/styles/{id}/passport",
    request_body = MintPassportRequest,
    params(("id" = Uuid, Path, description = "Style id")),
    responses(
        (status = 201, description = "Passport issued"),
        (status = 404, description = "Style not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Passports"
)]
pub async fn mint_passport(
    State(state): State<AppState>,
    Path(style_id): Path<Uuid>,
    payload: Option<Json<MintPassportRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.unwrap_or_default();

    let certificates: Vec<String> = payload
        .certificates
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    let passport = state
        .services
        .passports
        .mint_for_style(
            style_id,
            MintPassportInput {
                certificates,
                additional_info: payload.additional_info,
            },
        )
        .await
        .map_err(map_service_error)?;

    info!("Passport {} issued for style {}", passport.id, style_id);

    Ok(created_response(passport))
}

/// List passports with pagination
#[utoipa::path(
    get,
    path = "/api/v1/passports",
    params(PaginationParams),
    responses((status = 200, description = "Passports listed")),
    tag = "Passports"
)]
pub async fn list_passports(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (passports, total) = state
        .services
        .passports
        .list_passports(pagination.per_page, pagination.offset())
        .await
        .map_err(map_service_error)?;

    Ok(success_response(PaginatedResponse::new(
        passports,
        pagination.page,
        pagination.per_page,
        total,
    )))
}

/// Get a passport by its exact ID
#[utoipa::path(
    get,
    path = "/api/v1/passports/{id}",
    params(("id" = Uuid, Path, description = "Passport id")),
    responses(
        (status = 200, description = "Passport found"),
        (status = 404, description = "Passport not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Passports"
)]
pub async fn get_passport(
    State(state): State<AppState>,
    Path(passport_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let passport = state
        .services
        .passports
        .get_passport(passport_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(passport))
}

/// Public passport view; this is the URL encoded in the QR code
#[utoipa::path(
    get,
    path = "/passport/{id}",
    params(("id" = Uuid, Path, description = "Passport id")),
    responses(
        (status = 200, description = "Passport found"),
        (status = 404, description = "Passport not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Passports"
)]
pub async fn view_passport(
    State(state): State<AppState>,
    Path(passport_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let passport = state
        .services
        .passports
        .get_passport(passport_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(passport))
}
