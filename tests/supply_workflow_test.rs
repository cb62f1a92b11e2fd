//! Integration tests for the supply workflow: stores file restock
//! requests, headquarters approves or rejects them, approval credits
//! store inventory, and processed requests admit no second decision.

mod common;

use axum::{body, http::Method, response::Response};
use common::TestApp;
use serde_json::{json, Value};
use uuid::Uuid;

async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

struct Fixture {
    store_id: i64,
    beef: i64,
}

async fn seed_fixture(app: &TestApp) -> Fixture {
    let beef = app.seed_ingredient("Beef Patty", "ea").await;
    let store = app.register_store("GANGNAM", "Gangnam Branch").await;
    Fixture {
        store_id: store.id,
        beef,
    }
}

async fn file_request(app: &TestApp, store_id: i64, ingredient_id: i64, quantity: i32) -> String {
    let payload = json!({
        "store_id": store_id,
        "ingredient_id": ingredient_id,
        "quantity": quantity
    });
    let response = app
        .request(Method::POST, "/api/v1/supply-requests", Some(payload))
        .await;
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "PENDING");
    assert!(body["data"]["processed_at"].is_null());
    body["data"]["id"].as_str().expect("request id").to_string()
}

#[tokio::test]
async fn approval_credits_store_inventory() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;
    assert_eq!(app.stock_of(fx.store_id, fx.beef).await, 100);

    let request_id = file_request(&app, fx.store_id, fx.beef, 50).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/supply-requests/{}/approve", request_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "APPROVED");
    assert!(!body["data"]["processed_at"].is_null());

    assert_eq!(app.stock_of(fx.store_id, fx.beef).await, 150);
}

#[tokio::test]
async fn approving_twice_is_a_conflict_and_credits_once() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;
    let request_id = file_request(&app, fx.store_id, fx.beef, 50).await;

    let uri = format!("/api/v1/supply-requests/{}/approve", request_id);
    let first = app.request(Method::POST, &uri, None).await;
    assert_eq!(first.status(), 200);

    let second = app.request(Method::POST, &uri, None).await;
    assert_eq!(second.status(), 409);

    assert_eq!(app.stock_of(fx.store_id, fx.beef).await, 150);
}

#[tokio::test]
async fn rejection_leaves_inventory_untouched() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;
    let request_id = file_request(&app, fx.store_id, fx.beef, 30).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/supply-requests/{}/reject", request_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "REJECTED");
    assert!(!body["data"]["processed_at"].is_null());

    assert_eq!(app.stock_of(fx.store_id, fx.beef).await, 100);
}

#[tokio::test]
async fn rejecting_an_approved_request_is_a_conflict() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;
    let request_id = file_request(&app, fx.store_id, fx.beef, 30).await;

    app.request(
        Method::POST,
        &format!("/api/v1/supply-requests/{}/approve", request_id),
        None,
    )
    .await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/supply-requests/{}/reject", request_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn approval_without_an_inventory_row_rolls_back() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    // The store registered before this ingredient existed, so it holds
    // no inventory row for it.
    let sauce = app.seed_ingredient("Burger Sauce", "ml").await;
    let request_id = file_request(&app, fx.store_id, sauce, 25).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/supply-requests/{}/approve", request_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 409);

    // The status flip must roll back with the failed credit
    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/supply-requests/{}/status", request_id),
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "PENDING");
    assert!(body["data"]["processed_at"].is_null());
}

#[tokio::test]
async fn zero_quantity_requests_are_rejected() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let payload = json!({
        "store_id": fx.store_id,
        "ingredient_id": fx.beef,
        "quantity": 0
    });
    let response = app
        .request(Method::POST, "/api/v1/supply-requests", Some(payload))
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn requests_for_unknown_store_or_ingredient_are_rejected() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let payload = json!({
        "store_id": 9_999,
        "ingredient_id": fx.beef,
        "quantity": 10
    });
    let response = app
        .request(Method::POST, "/api/v1/supply-requests", Some(payload))
        .await;
    assert_eq!(response.status(), 400);

    let payload = json!({
        "store_id": fx.store_id,
        "ingredient_id": 9_999,
        "quantity": 10
    });
    let response = app
        .request(Method::POST, "/api/v1/supply-requests", Some(payload))
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn deciding_an_unknown_request_is_not_found() {
    let app = TestApp::new().await;
    seed_fixture(&app).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/supply-requests/{}/approve", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status(), 404);

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/supply-requests/{}/status", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn pending_list_names_store_and_ingredient() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let first = file_request(&app, fx.store_id, fx.beef, 10).await;
    let second = file_request(&app, fx.store_id, fx.beef, 20).await;

    // Approve one so only the other remains pending
    app.request(
        Method::POST,
        &format!("/api/v1/supply-requests/{}/approve", first),
        None,
    )
    .await;

    let body = response_json(
        app.request(Method::GET, "/api/v1/supply-requests/pending", None)
            .await,
    )
    .await;
    let pending = body["data"].as_array().expect("pending array");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], second.as_str());
    assert_eq!(pending[0]["store_name"], "Gangnam Branch");
    assert_eq!(pending[0]["ingredient_name"], "Beef Patty");
    assert_eq!(pending[0]["unit"], "ea");
    assert_eq!(pending[0]["quantity"], 20);
}

#[tokio::test]
async fn shipment_history_lists_only_approved_requests() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let approved = file_request(&app, fx.store_id, fx.beef, 40).await;
    let rejected = file_request(&app, fx.store_id, fx.beef, 5).await;
    let _pending = file_request(&app, fx.store_id, fx.beef, 7).await;

    app.request(
        Method::POST,
        &format!("/api/v1/supply-requests/{}/approve", approved),
        None,
    )
    .await;
    app.request(
        Method::POST,
        &format!("/api/v1/supply-requests/{}/reject", rejected),
        None,
    )
    .await;

    let body = response_json(
        app.request(Method::GET, "/api/v1/supply-requests/shipments", None)
            .await,
    )
    .await;
    let shipments = body["data"].as_array().expect("shipment array");
    assert_eq!(shipments.len(), 1);
    assert_eq!(shipments[0]["request_id"], approved.as_str());
    assert_eq!(shipments[0]["store_name"], "Gangnam Branch");
    assert_eq!(shipments[0]["ingredient_name"], "Beef Patty");
    assert_eq!(shipments[0]["quantity"], 40);
}
