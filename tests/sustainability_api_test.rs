mod common;

use axum::http::Method;
use serde_json::json;

use common::{response_json, TestApp};

async fn seed_collection(app: &TestApp, name: &str) -> String {
    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": name,
                "season": "SS",
                "year": 2026,
                "description": null
            })),
        )
        .await;
    response_json(response).await["data"]["id"]
        .as_str()
        .expect("collection id")
        .to_string()
}

async fn seed_style(app: &TestApp, collection_id: &str, name: &str, materials: serde_json::Value) {
    let response = app
        .request(
            Method::POST,
            "/api/v1/styles",
            Some(json!({
                "name": name,
                "collection_id": collection_id,
                "category": "shirt",
                "materials": materials,
                "production_location": "turkey",
                "supplier": "Aegean Textiles"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn sustainability_summary_aggregates_footprints() {
    let app = TestApp::new().await;
    let collection_id = seed_collection(&app, "Summer Naturals").await;

    // cotton/turkey = 3.0, linen/turkey = 2.25, wool/turkey = 9.5
    seed_style(&app, &collection_id, "Cotton Shirt", json!(["cotton"])).await;
    seed_style(&app, &collection_id, "Linen Shirt", json!(["linen"])).await;
    seed_style(&app, &collection_id, "Wool Overshirt", json!(["wool"])).await;

    let response = app.request(Method::GET, "/api/v1/sustainability", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    let summary = &body["data"];

    assert_eq!(summary["total_styles"], 3);
    assert_eq!(summary["total_carbon"], 14.75);
    // 14.75 / 3 rounded to two decimals
    assert_eq!(summary["average_carbon"], 4.92);

    // Lowest-footprint styles come first
    let lowest = summary["lowest_carbon_styles"].as_array().expect("array");
    assert_eq!(lowest[0]["name"], "Linen Shirt");
    assert_eq!(lowest[1]["name"], "Cotton Shirt");
    assert_eq!(lowest[2]["name"], "Wool Overshirt");
}

#[tokio::test]
async fn dashboard_stats_count_entities() {
    let app = TestApp::new().await;
    let collection_id = seed_collection(&app, "Counted").await;
    seed_style(&app, &collection_id, "Cotton Shirt", json!(["cotton"])).await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/suppliers",
            Some(json!({
                "name": "Aegean Textiles",
                "location": "Izmir",
                "sustainability_score": 82.5
            })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let response = app.request(Method::GET, "/api/v1/stats", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    let stats = &body["data"];

    assert_eq!(stats["collections"], 1);
    assert_eq!(stats["styles"], 1);
    assert_eq!(stats["suppliers"], 1);
    assert_eq!(stats["passports"], 0);
    assert_eq!(stats["total_carbon"], 3.0);
}

#[tokio::test]
async fn empty_database_yields_zero_aggregates() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/sustainability", None).await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["total_styles"], 0);
    assert_eq!(body["data"]["total_carbon"], 0.0);
    assert_eq!(body["data"]["average_carbon"], 0.0);
}
