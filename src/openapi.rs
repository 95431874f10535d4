use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atelier DPP API",
        version = "1.0.0",
        description = r#"
# Atelier Digital Product Passport API

Record-keeping API for fashion collections: seasonal collections, garment
styles with heuristic carbon-footprint scoring, and QR-backed digital
product passports.

## Features

- **Collections**: Seasonal groupings of garment styles
- **Styles**: Garment designs with materials, pricing, and a carbon footprint
  estimated at creation time
- **Digital Passports**: Per-style passport records with a generated
  identifier, identifier digest, and QR-encoded public URL
- **Sustainability**: Carbon totals, averages, and lowest-footprint styles

## Error Handling

Errors use a consistent response format with appropriate HTTP status codes:

```json
{
  "error": "Not Found",
  "message": "Style with ID ... not found",
  "timestamp": "2026-01-01T00:00:00Z"
}
```

## Pagination

List endpoints accept `page` and `per_page` query parameters.
        "#,
        contact(
            name = "Atelier Platform Team",
            email = "platform@atelier-dpp.dev"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Collections", description = "Collection management endpoints"),
        (name = "Styles", description = "Style management and carbon scoring endpoints"),
        (name = "Passports", description = "Digital product passport endpoints"),
        (name = "Suppliers", description = "Supplier record endpoints"),
        (name = "Sustainability", description = "Carbon reporting endpoints")
    ),
    paths(
        // Collections
        crate::handlers::collections::create_collection,
        crate::handlers::collections::list_collections,
        crate::handlers::collections::get_collection,

        // Styles
        crate::handlers::styles::create_style,
        crate::handlers::styles::list_styles,
        crate::handlers::styles::get_style,
        crate::handlers::styles::update_style,
        crate::handlers::styles::generate_style_image,

        // Passports
        crate::handlers::passports::mint_passport,
        crate::handlers::passports::list_passports,
        crate::handlers::passports::get_passport,
        crate::handlers::passports::view_passport,

        // Suppliers
        crate::handlers::suppliers::create_supplier,
        crate::handlers::suppliers::list_suppliers,
        crate::handlers::suppliers::get_supplier,

        // Sustainability
        crate::handlers::sustainability::sustainability_summary,
        crate::handlers::sustainability::dashboard_stats,
    ),
    components(
        schemas(
            // Request types
            crate::handlers::collections::CreateCollectionRequest,
            crate::handlers::styles::CreateStyleRequest,
            crate::handlers::styles::UpdateStyleRequest,
            crate::handlers::passports::MintPassportRequest,
            crate::handlers::suppliers::CreateSupplierRequest,

            // Response types
            crate::handlers::styles::StyleImageResponse,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_contains_core_paths() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string(&openapi).unwrap();
        assert!(json.contains("Atelier DPP API"));
        assert!(json.contains("/api/v1/styles"));
        assert!(json.contains("/passport/{id}"));
    }
}
