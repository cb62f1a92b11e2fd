//! Tests for the order lifecycle after placement: status polling,
//! kitchen queue ordering, idempotent completion, history, and totals.

mod common;

use axum::{body, http::Method, response::Response};
use common::TestApp;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use uuid::Uuid;

async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().expect("decimal string"),
        Value::Number(n) => n.to_string().parse().expect("decimal number"),
        other => panic!("expected a decimal value, got {:?}", other),
    }
}

struct Fixture {
    store_id: i64,
    burger: i64,
    cola: i64,
}

async fn seed_fixture(app: &TestApp) -> Fixture {
    let bun = app.seed_ingredient("Burger Bun", "ea").await;
    let burger = app
        .seed_menu("Classic Burger", dec!(5.90), Some(dec!(8.40)), "Burger")
        .await;
    let cola = app.seed_menu("Cola", dec!(1.90), None, "Drink").await;
    app.seed_recipe_line(burger, bun, 1).await;

    let store = app.register_store("GANGNAM", "Gangnam Branch").await;
    Fixture {
        store_id: store.id,
        burger,
        cola,
    }
}

async fn place(app: &TestApp, store_id: i64, items: Value, total: &str) -> String {
    let payload = json!({
        "store_id": store_id,
        "items": items,
        "total_amount": total
    });
    let response = app.request(Method::POST, "/api/v1/orders", Some(payload)).await;
    assert_eq!(response.status(), 201);
    let body = response_json(response).await;
    body["data"]["order_id"].as_str().expect("order id").to_string()
}

#[tokio::test]
async fn order_moves_from_waiting_to_completed() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let order_id = place(
        &app,
        fx.store_id,
        json!([{ "menu_id": fx.burger, "quantity": 1 }]),
        "5.90",
    )
    .await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/orders/{}/status", order_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "WAITING");

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/orders/{}/complete", order_id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "COMPLETED");

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/orders/{}/status", order_id),
            None,
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["status"], "COMPLETED");
}

#[tokio::test]
async fn completing_twice_is_a_no_op() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let order_id = place(
        &app,
        fx.store_id,
        json!([{ "menu_id": fx.cola, "quantity": 1 }]),
        "1.90",
    )
    .await;

    let uri = format!("/api/v1/orders/{}/complete", order_id);
    let first = app.request(Method::POST, &uri, None).await;
    assert_eq!(first.status(), 200);

    let second = app.request(Method::POST, &uri, None).await;
    assert_eq!(second.status(), 200);
    let body = response_json(second).await;
    assert_eq!(body["data"]["status"], "COMPLETED");
}

#[tokio::test]
async fn completing_an_unknown_order_is_not_found() {
    let app = TestApp::new().await;
    seed_fixture(&app).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/orders/{}/complete", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn kitchen_queue_lists_waiting_orders_oldest_first() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let first = place(
        &app,
        fx.store_id,
        json!([{ "menu_id": fx.burger, "quantity": 2, "is_set": true }]),
        "16.80",
    )
    .await;
    let second = place(
        &app,
        fx.store_id,
        json!([{ "menu_id": fx.cola, "quantity": 1 }]),
        "1.90",
    )
    .await;

    let uri = format!("/api/v1/stores/{}/kitchen/queue", fx.store_id);
    let body = response_json(app.request(Method::GET, &uri, None).await).await;
    let tickets = body["data"].as_array().expect("ticket array");
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["order_id"], first.as_str());
    assert_eq!(tickets[0]["summary"], "Classic Burger(Set) x2");
    assert_eq!(tickets[1]["order_id"], second.as_str());
    assert_eq!(tickets[1]["summary"], "Cola x1");

    // Completed tickets leave the queue
    app.request(
        Method::POST,
        &format!("/api/v1/orders/{}/complete", first),
        None,
    )
    .await;
    let body = response_json(app.request(Method::GET, &uri, None).await).await;
    let tickets = body["data"].as_array().expect("ticket array");
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0]["order_id"], second.as_str());
}

#[tokio::test]
async fn kitchen_queue_for_unknown_store_is_not_found() {
    let app = TestApp::new().await;
    seed_fixture(&app).await;

    let response = app
        .request(Method::GET, "/api/v1/stores/9999/kitchen/queue", None)
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn history_and_total_sales_cover_all_orders() {
    let app = TestApp::new().await;
    let fx = seed_fixture(&app).await;

    let first = place(
        &app,
        fx.store_id,
        json!([{ "menu_id": fx.burger, "quantity": 1 }]),
        "5.90",
    )
    .await;
    let second = place(
        &app,
        fx.store_id,
        json!([{ "menu_id": fx.cola, "quantity": 2 }]),
        "3.80",
    )
    .await;

    app.request(
        Method::POST,
        &format!("/api/v1/orders/{}/complete", first),
        None,
    )
    .await;

    // Newest first, both statuses present
    let uri = format!("/api/v1/stores/{}/orders", fx.store_id);
    let body = response_json(app.request(Method::GET, &uri, None).await).await;
    let entries = body["data"].as_array().expect("history array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["order_id"], second.as_str());
    assert_eq!(entries[0]["status"], "WAITING");
    assert_eq!(entries[1]["order_id"], first.as_str());
    assert_eq!(entries[1]["status"], "COMPLETED");

    // Waiting and completed orders both count toward sales
    let uri = format!("/api/v1/stores/{}/sales/total", fx.store_id);
    let body = response_json(app.request(Method::GET, &uri, None).await).await;
    assert_eq!(decimal(&body["data"]["total_sales"]), dec!(9.70));
}

#[tokio::test]
async fn fetching_an_unknown_order_is_not_found() {
    let app = TestApp::new().await;
    seed_fixture(&app).await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/orders/{}", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status(), 404);
}
