use crate::handlers::common::{
    created_response, map_service_error, success_response, validate_input, PaginatedResponse,
};
use crate::{
    errors::ApiError,
    events::Event,
    services::styles::{CreateStyleInput, UpdateStyleInput},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Creates the router for style endpoints
pub fn styles_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_style))
        .route("/", get(list_styles))
        .route("/:id", get(get_style))
        .route("/:id", put(update_style))
        .route("/:id/image", post(generate_style_image))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStyleRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be blank"))]
    pub name: String,

    pub collection_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Category must not be blank"))]
    pub category: String,

    /// Free-text material names; unknown materials carry a neutral carbon factor
    #[validate(length(min = 1, message = "At least one material is required"))]
    pub materials: Vec<String>,

    pub target_price: Option<Decimal>,

    #[validate(length(min = 1, max = 255, message = "Production location must not be blank"))]
    pub production_location: String,

    #[validate(length(min = 1, max = 255, message = "Supplier must not be blank"))]
    pub supplier: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStyleRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub materials: Option<Vec<String>>,
    pub target_price: Option<Decimal>,
    pub production_location: Option<String>,
    pub supplier: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListStylesQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub collection_id: Option<Uuid>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

impl ListStylesQuery {
    fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.per_page
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StyleImageResponse {
    pub style_id: Uuid,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Create a new style; the carbon footprint is computed and stored here
#[utoipa::path(
    post,
    path = "/api/v1/styles",
    request_body = CreateStyleRequest,
    responses(
        (status = 201, description = "Style created"),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Collection not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Styles"
)]
pub async fn create_style(
    State(state): State<AppState>,
    Json(payload): Json<CreateStyleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let style = state
        .services
        .styles
        .create_style(CreateStyleInput {
            name: payload.name.trim().to_string(),
            collection_id: payload.collection_id,
            category: payload.category.trim().to_string(),
            materials: payload.materials,
            target_price: payload.target_price,
            production_location: payload.production_location.trim().to_string(),
            supplier: payload.supplier.trim().to_string(),
        })
        .await
        .map_err(map_service_error)?;

    info!("Style created: {}", style.id);

    Ok(created_response(style))
}

/// List styles, optionally filtered by collection
#[utoipa::path(
    get,
    path = "/api/v1/styles",
    responses((status = 200, description = "Styles listed")),
    tag = "Styles"
)]
pub async fn list_styles(
    State(state): State<AppState>,
    Query(query): Query<ListStylesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (styles, total) = state
        .services
        .styles
        .list_styles(query.collection_id, query.per_page, query.offset())
        .await
        .map_err(map_service_error)?;

    Ok(success_response(PaginatedResponse::new(
        styles,
        query.page,
        query.per_page,
        total,
    )))
}

/// Get a style by ID
#[utoipa::path(
    get,
    path = "/api/v1/styles/{id}",
    params(("id" = Uuid, Path, description = "Style id")),
    responses(
        (status = 200, description = "Style found"),
        (status = 404, description = "Style not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Styles"
)]
pub async fn get_style(
    State(state): State<AppState>,
    Path(style_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let style = state
        .services
        .styles
        .get_style(style_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(style))
}

/// Update a style's descriptive fields. The stored carbon footprint is not
/// recomputed.
#[utoipa::path(
    put,
    path = "/api/v1/styles/{id}",
    request_body = UpdateStyleRequest,
    params(("id" = Uuid, Path, description = "Style id")),
    responses(
        (status = 200, description = "Style updated"),
        (status = 404, description = "Style not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Styles"
)]
pub async fn update_style(
    State(state): State<AppState>,
    Path(style_id): Path<Uuid>,
    Json(payload): Json<UpdateStyleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let style = state
        .services
        .styles
        .update_style(
            style_id,
            UpdateStyleInput {
                name: payload.name,
                category: payload.category,
                materials: payload.materials,
                target_price: payload.target_price,
                production_location: payload.production_location,
                supplier: payload.supplier,
            },
        )
        .await
        .map_err(map_service_error)?;

    info!("Style updated: {}", style_id);

    Ok(success_response(style))
}

/// Request an AI-generated product image for a style.
///
/// Image generation is best-effort: when the external service fails the
/// style is left without an image and the response says so, rather than the
/// request failing.
#[utoipa::path(
    post,
    path = "/api/v1/styles/{id}/image",
    params(("id" = Uuid, Path, description = "Style id")),
    responses(
        (status = 200, description = "Image attached, or generation degraded"),
        (status = 400, description = "Image generation not configured", body = crate::errors::ErrorResponse),
        (status = 404, description = "Style not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Styles"
)]
pub async fn generate_style_image(
    State(state): State<AppState>,
    Path(style_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let style = state
        .services
        .styles
        .get_style(style_id)
        .await
        .map_err(map_service_error)?;

    if !state.services.imaging.is_configured() {
        return Err(ApiError::BadRequest(
            "Image generation is not configured".to_string(),
        ));
    }

    match state.services.imaging.generate_style_image(&style).await {
        Ok(image_url) => {
            let updated = state
                .services
                .styles
                .attach_image(style_id, image_url)
                .await
                .map_err(map_service_error)?;

            Ok(success_response(StyleImageResponse {
                style_id,
                image_url: updated.image_url,
                message: None,
            }))
        }
        Err(err) => {
            warn!("Image generation degraded for style {}: {}", style_id, err);
            state
                .event_sender
                .send_or_log(Event::ImageGenerationFailed {
                    style_id,
                    reason: err.to_string(),
                })
                .await;

            Ok(success_response(StyleImageResponse {
                style_id,
                image_url: None,
                message: Some("Image generation unavailable; style left without an image".to_string()),
            }))
        }
    }
}
