mod common;

use axum::http::Method;
use serde_json::json;

use common::{response_json, TestApp};

async fn seed_style(app: &TestApp) -> (String, String) {
    let response = app
        .request(
            Method::POST,
            "/api/v1/collections",
            Some(json!({
                "name": "Spring/Summer 2026",
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
                "name": "Linen Summer Shirt",
                "collection_id": collection_id,
                "category": "shirt",
                "materials": ["linen", "cotton"],
                "production_location": "turkey",
                "supplier": "Aegean Textiles"
            })),
        )
        .await;
    let style_id = response_json(response).await["data"]["id"]
        .as_str()
        .expect("style id")
        .to_string();

    (collection_id, style_id)
}

#[tokio::test]
async fn passport_mint_flow() {
    let app = TestApp::new().await;
    let (_collection_id, style_id) = seed_style(&app).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/styles/{}/passport", style_id),
            Some(json!({
                "certificates": ["GOTS", " OEKO-TEX "],
                "additional_info": "Limited run"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    let passport = &body["data"];

    let passport_id = passport["id"].as_str().expect("passport id").to_string();

    // Identity fields
    assert_eq!(passport["style_id"], style_id.as_str());
    assert_eq!(
        passport["qr_url"],
        format!("https://dpp.example.com/passport/{}", passport_id)
    );
    assert_eq!(passport["blockchain_hash"].as_str().unwrap().len(), 64);
    assert!(passport["qr_code"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert_eq!(
        passport["product_code"],
        format!("ATL-{}", &style_id[..8])
    );

    // Denormalized snapshot round-trips the style fields
    assert_eq!(passport["name"], "Linen Summer Shirt");
    assert_eq!(passport["collection_name"], "Spring/Summer 2026");
    assert_eq!(passport["materials"], json!(["linen", "cotton"]));
    assert_eq!(passport["production_location"], "turkey");
    assert_eq!(passport["supplier"], "Aegean Textiles");
    assert_eq!(passport["certificates"], json!(["GOTS", "OEKO-TEX"]));
    assert_eq!(passport["additional_info"], "Limited run");

    // The style flips to passport_issued and links the passport
    let response = app
        .request(Method::GET, &format!("/api/v1/styles/{}", style_id), None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "passport_issued");
    assert_eq!(body["data"]["passport_id"], passport_id.as_str());

    // Exact-id retrieval through the versioned API
    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/passports/{}", passport_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);

    // The public passport view the QR payload points at
    let response = app
        .request(Method::GET, &format!("/passport/{}", passport_id), None)
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["id"], passport_id.as_str());
}

#[tokio::test]
async fn minting_twice_produces_distinct_passports() {
    let app = TestApp::new().await;
    let (_collection_id, style_id) = seed_style(&app).await;

    let first = response_json(
        app.request(
            Method::POST,
            &format!("/api/v1/styles/{}/passport", style_id),
            Some(json!({})),
        )
        .await,
    )
    .await;
    let second = response_json(
        app.request(
            Method::POST,
            &format!("/api/v1/styles/{}/passport", style_id),
            Some(json!({})),
        )
        .await,
    )
    .await;

    // Fresh random identity per mint, even for identical product data
    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_ne!(
        first["data"]["blockchain_hash"],
        second["data"]["blockchain_hash"]
    );

    // The style points at the most recent passport
    let response = app
        .request(Method::GET, &format!("/api/v1/styles/{}", style_id), None)
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["passport_id"], second["data"]["id"]);

    // Both passports remain retrievable by exact id
    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/passports/{}", first["data"]["id"].as_str().unwrap()),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);

    let response = app.request(Method::GET, "/api/v1/passports?per_page=10", None).await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["pagination"]["total"], 2);
}

#[tokio::test]
async fn minting_for_unknown_style_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/styles/00000000-0000-0000-0000-000000000000/passport",
            Some(json!({})),
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unknown_passport_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::GET,
            "/passport/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(response.status(), 404);
}
