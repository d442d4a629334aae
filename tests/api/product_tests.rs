//! Product API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_json, TestApp, CUPCAKES_BUSINESS, VANILLA_CUPCAKE};

#[tokio::test]
async fn create_product_returns_201_with_embedded_business() {
    let app = TestApp::new();

    let response = app.post_json("/products", VANILLA_CUPCAKE).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["product_id"], 0);
    assert_eq!(body["name"], "Vanilla Cupcake");
    assert_eq!(body["business"]["ein"], "12-3456789");
    assert_eq!(body["business"]["name"], "Ashley's Cupcakes");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn embedded_business_is_a_snapshot_not_a_live_reference() {
    let app = TestApp::new();

    // The cupcake scenario: business, then product embedding it.
    let response = app.post_json("/businesses", CUPCAKES_BUSINESS).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.post_json("/products", VANILLA_CUPCAKE).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = body_json(app.get("/products?business_ein=12-3456789").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["product_id"], 0);

    // Renaming the business must not touch the embedded copy.
    let response = app
        .patch_json("/businesses/12-3456789", r#"{"name":"Ashley's Bakery"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let product = body_json(app.get("/products/0").await).await;
    assert_eq!(product["business"]["name"], "Ashley's Cupcakes");
}

#[tokio::test]
async fn product_creation_needs_no_business_store_entry() {
    let app = TestApp::new();

    // No business was created; the embedded copy stands on its own.
    let response = app.post_json("/products", VANILLA_CUPCAKE).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn duplicate_product_id_returns_409() {
    let app = TestApp::new();
    app.post_json("/products", VANILLA_CUPCAKE).await;

    let response = app.post_json("/products", VANILLA_CUPCAKE).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_without_business_is_rejected_by_name() {
    let app = TestApp::new();

    let response = app
        .post_json("/products", r#"{"product_id":0,"name":"Vanilla Cupcake"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["field"], "business");
}

#[tokio::test]
async fn embedded_business_is_validated_under_business_rules() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/products",
            r#"{
                "product_id": 0,
                "name": "Vanilla Cupcake",
                "business": {"ein":"bad-ein","name":"X","email":"x@example.com"}
            }"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["field"], "ein");
}

#[tokio::test]
async fn list_filters_product_and_embedded_fields_conjunctively() {
    let app = TestApp::new();
    app.post_json("/products", VANILLA_CUPCAKE).await;
    app.post_json(
        "/products",
        r#"{
            "product_id": 1,
            "name": "Chocolate Cupcake",
            "business": {
                "ein": "12-3456789",
                "name": "Ashley's Cupcakes",
                "email": "ashleyscupcakes@example.com"
            }
        }"#,
    )
    .await;
    app.post_json(
        "/products",
        r#"{
            "product_id": 2,
            "name": "Sourdough Loaf",
            "business": {
                "ein": "98-7654321",
                "name": "Another Bakery",
                "email": "other@example.com"
            }
        }"#,
    )
    .await;

    let by_business = body_json(app.get("/products?business_ein=12-3456789").await).await;
    assert_eq!(by_business.as_array().unwrap().len(), 2);

    let by_business_name = body_json(app.get("/products?business_name=Another%20Bakery").await).await;
    assert_eq!(by_business_name.as_array().unwrap().len(), 1);
    assert_eq!(by_business_name[0]["product_id"], 2);

    let intersection = body_json(
        app.get("/products?business_ein=12-3456789&name=Chocolate%20Cupcake")
            .await,
    )
    .await;
    assert_eq!(intersection.as_array().unwrap().len(), 1);
    assert_eq!(intersection[0]["product_id"], 1);

    let by_id = body_json(app.get("/products?product_id=0").await).await;
    assert_eq!(by_id.as_array().unwrap().len(), 1);
    assert_eq!(by_id[0]["name"], "Vanilla Cupcake");
}

#[tokio::test]
async fn get_unknown_product_returns_404() {
    let app = TestApp::new();

    let response = app.get("/products/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_product_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/products/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_replaces_business_snapshot_wholesale() {
    let app = TestApp::new();
    app.post_json("/products", VANILLA_CUPCAKE).await;

    let response = app
        .patch_json(
            "/products/0",
            r#"{
                "business": {
                    "ein": "98-7654321",
                    "name": "Another Bakery",
                    "email": "other@example.com"
                }
            }"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["business"]["ein"], "98-7654321");
    assert!(body["business"]["phone"].is_null());
    assert_eq!(body["name"], "Vanilla Cupcake");
}

#[tokio::test]
async fn patch_with_invalid_snapshot_is_rejected_whole() {
    let app = TestApp::new();
    app.post_json("/products", VANILLA_CUPCAKE).await;

    let response = app
        .patch_json(
            "/products/0",
            r#"{"business":{"ein":"98-7654321","name":"X","email":"not-an-email"}}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = body_json(app.get("/products/0").await).await;
    assert_eq!(stored["business"]["ein"], "12-3456789");
}

#[tokio::test]
async fn patch_rekeying_onto_existing_product_id_conflicts() {
    let app = TestApp::new();
    app.post_json("/products", VANILLA_CUPCAKE).await;
    app.post_json(
        "/products",
        r#"{
            "product_id": 1,
            "name": "Chocolate Cupcake",
            "business": {
                "ein": "12-3456789",
                "name": "Ashley's Cupcakes",
                "email": "ashleyscupcakes@example.com"
            }
        }"#,
    )
    .await;

    let response = app.patch_json("/products/0", r#"{"product_id":1}"#).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_product_then_get_returns_404() {
    let app = TestApp::new();
    app.post_json("/products", VANILLA_CUPCAKE).await;

    let response = app.delete("/products/0").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get("/products/0").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_business_does_not_cascade_to_products() {
    let app = TestApp::new();
    app.post_json("/businesses", CUPCAKES_BUSINESS).await;
    app.post_json("/products", VANILLA_CUPCAKE).await;

    let response = app.delete("/businesses/12-3456789").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let product = body_json(app.get("/products/0").await).await;
    assert_eq!(product["business"]["ein"], "12-3456789");
}
