mod common;

use axum::http::Method;
use serde_json::json;

use common::{response_json, TestApp};

#[tokio::test]
async fn collection_and_style_lifecycle() {
    let app = TestApp::new().await;

    // Create a collection
    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": "Spring/Summer 2026",
                "season": "SS",
                "year": 2026,
                "description": "Lightweight naturals"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    let collection_id = body["data"]["id"].as_str().expect("collection id").to_string();

    // Create a style in the collection; cotton made in turkey scores
    // 2.5 * 1.2 * 1.0 = 3.0 kg CO2e
    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": "Poplin Shirt",
                "collection_id": collection_id,
                "category": "shirt",
                "materials": ["cotton"],
                "target_price": "49.90",
                "production_location": "turkey",
                "supplier": "Aegean Textiles"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    let style = &body["data"];
    assert_eq!(style["carbon_footprint"], 3.0);
    assert_eq!(style["status"], "design");
    let style_id = style["id"].as_str().expect("style id").to_string();

    // The collection detail view includes the style
    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/collections/{}", collection_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    let styles = body["data"]["styles"].as_array().expect("styles array");
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0]["id"], style_id.as_str());

    // Styles list filtered by collection
    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/styles?collection_id={}", collection_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
}

#[tokio::test]
async fn style_creation_requires_existing_collection() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": "Orphan Style",
                "collection_id": "00000000-0000-0000-0000-000000000000",
                "category": "shirt",
                "materials": ["cotton"],
                "production_location": "turkey",
                "supplier": "Aegean Textiles"
            })),
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unknown_materials_and_locations_fall_back_to_neutral_factors() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": "Experimental",
                "season": "FW",
                "year": 2026,
                "description": null
            })),
        )
        .await;
    let collection_id = response_json(response).await["data"]["id"]
        .as_str()
        .expect("collection id")
        .to_string();

    // Unknown fabric and country both contribute factor 1.0: 2.5 * 1.0 * 1.0
    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": "Mystery Jacket",
                "collection_id": collection_id,
                "category": "jacket",
                "materials": ["vantablack_weave"],
                "production_location": "atlantis",
                "supplier": "Unknown Mills"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    assert_eq!(body["data"]["carbon_footprint"], 2.5);
}

#[tokio::test]
async fn duplicate_materials_accumulate() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": "Denim Drop",
                "season": "SS",
                "year": 2026,
                "description": null
            })),
        )
        .await;
    let collection_id = response_json(response).await["data"]["id"]
        .as_str()
        .expect("collection id")
        .to_string();

    // Two cotton layers count twice: 2.5 * (1.2 + 1.2) * 1.0 = 6.0
    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": "Double Cotton Jacket",
                "collection_id": collection_id,
                "category": "jacket",
                "materials": ["cotton", "cotton"],
                "production_location": "turkey",
                "supplier": "Aegean Textiles"
            })),
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["carbon_footprint"], 6.0);
}

#[tokio::test]
async fn editing_a_style_does_not_recompute_its_footprint() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": "Knitwear",
                "season": "FW",
                "year": 2026,
                "description": null
            })),
        )
        .await;
    let collection_id = response_json(response).await["data"]["id"]
        .as_str()
        .expect("collection id")
        .to_string();

    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": "Wool Sweater",
                "collection_id": collection_id,
                "category": "knitwear",
                "materials": ["wool"],
                "production_location": "china",
                "supplier": "Northern Knits"
            })),
        )
        .await;
    let body = response_json(response).await;
    let style_id = body["data"]["id"].as_str().expect("style id").to_string();
    // 2.5 * 3.8 * 2.2
    assert_eq!(body["data"]["carbon_footprint"], 20.9);

    // Swap to linen made locally; the stored footprint must stay fixed
    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/styles/{}", style_id),
            Some(json!({
                "materials": ["linen"],
                "production_location": "turkey"
            })),
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["materials"], json!(["linen"]));
    assert_eq!(body["data"]["production_location"], "turkey");
    assert_eq!(body["data"]["carbon_footprint"], 20.9);
}

#[tokio::test]
async fn style_validation_rejects_empty_material_list() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": "Validation",
                "season": "SS",
                "year": 2026,
                "description": null
            })),
        )
        .await;
    let collection_id = response_json(response).await["data"]["id"]
        .as_str()
        .expect("collection id")
        .to_string();

    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": "No Materials",
                "collection_id": collection_id,
                "category": "shirt",
                "materials": [],
                "production_location": "turkey",
                "supplier": "Aegean Textiles"
            })),
        )
        .await;
    assert_eq!(response.status(), 400);
}
