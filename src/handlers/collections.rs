use crate::handlers::common::{
    created_response, map_service_error, success_response, validate_input, PaginatedResponse,
    PaginationParams,
};
use crate::{
    errors::ApiError, services::collections::CreateCollectionInput, AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Creates the router for collection endpoints
pub fn collections_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_collection))
        .route("/", get(list_collections))
        .route("/:id", get(get_collection))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Season must not be blank"))]
    pub season: String,

    #[validate(range(min = 1990, max = 2100, message = "Year is out of range"))]
    pub year: i32,

    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CollectionWithStyles {
    #[serde(flatten)]
    pub collection: crate::entities::collection::Model,
    pub styles: Vec<crate::entities::style::Model>,
}

/// Create a new collection
#[utoipa::path(
    post,
    path = "/api/v1/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created"),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    tag = "Collections"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let collection = state
        .services
        .collections
        .create_collection(CreateCollectionInput {
            name: payload.name.trim().to_string(),
            season: payload.season.trim().to_string(),
            year: payload.year,
            description: payload.description,
        })
        .await
        .map_err(map_service_error)?;

    info!("Collection created: {}", collection.id);

    Ok(created_response(collection))
}

/// List collections with pagination
#[utoipa::path(
    get,
    path = "/api/v1/collections",
    params(PaginationParams),
    responses((status = 200, description = "Collections listed")),
    tag = "Collections"
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (collections, total) = state
        .services
        .collections
        .list_collections(pagination.per_page, pagination.offset())
        .await
        .map_err(map_service_error)?;

    Ok(success_response(PaginatedResponse::new(
        collections,
        pagination.page,
        pagination.per_page,
        total,
    )))
}

/// Get a collection and its styles
#[utoipa::path(
    get,
    path = "/api/v1/collections/{id}",
    params(("id" = Uuid, Path, description = "Collection id")),
    responses(
        (status = 200, description = "Collection found"),
        (status = 404, description = "Collection not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Collections"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(collection_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let (collection, styles) = state
        .services
        .collections
        .get_collection_with_styles(collection_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(CollectionWithStyles {
        collection,
        styles,
    }))
}
