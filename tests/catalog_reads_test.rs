//! Integration tests for the read-side catalog endpoints: the kiosk
//! menu board, per-menu options, the franchise best-seller list, the
//! ingredient catalog, and per-store inventory listings.

mod common;

use axum::{body, http::Method, response::Response};
use common::TestApp;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::{json, Value};

use grillpoint_api::entities::menu_option;

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
        other => panic!("expected decimal value, got {}", other),
    }
}

fn names(items: &Value) -> Vec<&str> {
    items
        .as_array()
        .expect("json array")
        .iter()
        .map(|item| item["name"].as_str().expect("name field"))
        .collect()
}

#[tokio::test]
async fn menu_board_hides_sold_out_and_sorts_by_category_then_name() {
    let app = TestApp::new().await;
    let classic = app
        .seed_menu("Classic Burger", dec!(5.90), Some(dec!(8.40)), "Burger")
        .await;
    app.seed_menu("Bacon Deluxe", dec!(8.40), Some(dec!(10.90)), "Burger")
        .await;
    app.seed_menu("Cola", dec!(1.90), None, "Drink").await;
    let fries = app.seed_menu("French Fries", dec!(2.50), None, "Side").await;
    app.mark_sold_out(fries).await;

    let response = app.request(Method::GET, "/api/v1/menus", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    let menus = body["data"].as_array().expect("menu array");
    assert_eq!(
        names(&body["data"]),
        vec!["Bacon Deluxe", "Classic Burger", "Cola"]
    );

    let classic_row = menus
        .iter()
        .find(|m| m["id"] == classic)
        .expect("classic burger listed");
    assert_eq!(decimal(&classic_row["price"]), dec!(5.90));
    assert_eq!(decimal(&classic_row["set_price"]), dec!(8.40));
    assert_eq!(classic_row["category"], "Burger");

    let cola_row = menus
        .iter()
        .find(|m| m["name"] == "Cola")
        .expect("cola listed");
    assert!(cola_row["set_price"].is_null());
}

#[tokio::test]
async fn menu_options_list_only_active_ones_in_display_order() {
    let app = TestApp::new().await;
    let burger = app
        .seed_menu("Classic Burger", dec!(5.90), Some(dec!(8.40)), "Burger")
        .await;
    app.seed_menu_option(burger, "Extra Patty", dec!(2.00), 2)
        .await;
    app.seed_menu_option(burger, "Extra Cheese", dec!(0.50), 1)
        .await;
    let retired = app
        .seed_menu_option(burger, "Retired Option", dec!(0.30), 0)
        .await;
    menu_option::ActiveModel {
        id: Set(retired),
        is_active: Set(false),
        ..Default::default()
    }
    .update(app.state.db.as_ref())
    .await
    .expect("deactivate option");

    let response = app
        .request(Method::GET, &format!("/api/v1/menus/{}/options", burger), None)
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    assert_eq!(names(&body["data"]), vec!["Extra Cheese", "Extra Patty"]);
    assert_eq!(decimal(&body["data"][0]["price_delta"]), dec!(0.50));
    assert_eq!(body["data"][0]["menu_id"], burger);
}

#[tokio::test]
async fn options_for_an_unknown_menu_are_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/v1/menus/9999/options", None)
        .await;
    assert_eq!(response.status(), 404);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn ingredient_catalog_is_alphabetical() {
    let app = TestApp::new().await;
    app.seed_ingredient("Lettuce", "g").await;
    app.seed_ingredient("Beef Patty", "ea").await;
    app.seed_ingredient("Cola Syrup", "ml").await;

    let response = app.request(Method::GET, "/api/v1/ingredients", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    assert_eq!(
        names(&body["data"]),
        vec!["Beef Patty", "Cola Syrup", "Lettuce"]
    );
    assert_eq!(body["data"][0]["unit"], "ea");
}

#[tokio::test]
async fn top_menus_rank_by_units_sold_across_open_and_completed_orders() {
    let app = TestApp::new().await;
    let burger = app
        .seed_menu("Classic Burger", dec!(5.90), None, "Burger")
        .await;
    let cola = app.seed_menu("Cola", dec!(1.90), None, "Drink").await;
    let fries = app.seed_menu("French Fries", dec!(2.50), None, "Side").await;
    let store = app.register_store("GANGNAM", "Gangnam Branch").await;

    let first = app
        .request(
            Method::POST,
            "/api/v1/orders",
            Some(json!({
                "store_id": store.id,
                "items": [
                    {"menu_id": burger, "quantity": 4, "is_set": false, "option_ids": []},
                    {"menu_id": cola, "quantity": 1, "is_set": false, "option_ids": []}
                ],
                "total_amount": "25.50"
            })),
        )
        .await;
    assert_eq!(first.status(), 201);

    let second = app
        .request(
            Method::POST,
            "/api/v1/orders",
            Some(json!({
                "store_id": store.id,
                "items": [
                    {"menu_id": cola, "quantity": 2, "is_set": false, "option_ids": []}
                ],
                "total_amount": "3.80"
            })),
        )
        .await;
    assert_eq!(second.status(), 201);
    let second_id = response_json(second).await["data"]["order_id"]
        .as_i64()
        .expect("order id");

    // Completed orders still count toward the best-seller board.
    let completed = app
        .request(
            Method::POST,
            &format!("/api/v1/orders/{}/complete", second_id),
            None,
        )
        .await;
    assert_eq!(completed.status(), 200);

    let third = app
        .request(
            Method::POST,
            "/api/v1/orders",
            Some(json!({
                "store_id": store.id,
                "items": [
                    {"menu_id": fries, "quantity": 1, "is_set": false, "option_ids": []}
                ],
                "total_amount": "2.50"
            })),
        )
        .await;
    assert_eq!(third.status(), 201);

    let response = app.request(Method::GET, "/api/v1/menus/top", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    assert_eq!(
        names(&body["data"]),
        vec!["Classic Burger", "Cola", "French Fries"]
    );
    assert_eq!(body["data"][0]["sold_quantity"], 4);
    assert_eq!(body["data"][1]["sold_quantity"], 3);
    assert_eq!(body["data"][2]["sold_quantity"], 1);

    let limited = app
        .request(Method::GET, "/api/v1/menus/top?limit=2", None)
        .await;
    assert_eq!(limited.status(), 200);
    let body = response_json(limited).await;
    assert_eq!(names(&body["data"]), vec!["Classic Burger", "Cola"]);
}

#[tokio::test]
async fn top_menus_are_empty_before_any_order() {
    let app = TestApp::new().await;
    app.seed_menu("Classic Burger", dec!(5.90), None, "Burger")
        .await;

    let response = app.request(Method::GET, "/api/v1/menus/top", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn inventory_listing_flags_rows_at_or_below_threshold() {
    let app = TestApp::new().await;
    let patty = app.seed_ingredient("Beef Patty", "ea").await;
    let bun = app.seed_ingredient("Burger Bun", "ea").await;
    let sauce = app.seed_ingredient("Burger Sauce", "ml").await;
    let store = app.register_store("GANGNAM", "Gangnam Branch").await;

    app.set_stock(store.id, bun, 15).await;
    // Exactly at the threshold still counts as low.
    app.set_stock(store.id, sauce, 20).await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/stores/{}/inventory", store.id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    let rows = body["data"].as_array().expect("inventory array");
    assert_eq!(rows.len(), 3);
    assert_eq!(
        names(&body["data"]),
        vec!["Beef Patty", "Burger Bun", "Burger Sauce"]
    );

    let by_ingredient = |id: i64| {
        rows.iter()
            .find(|row| row["ingredient_id"] == id)
            .expect("inventory row")
    };
    assert_eq!(by_ingredient(patty)["quantity"], 100);
    assert_eq!(by_ingredient(patty)["low"], false);
    assert_eq!(by_ingredient(bun)["quantity"], 15);
    assert_eq!(by_ingredient(bun)["min_threshold"], 20);
    assert_eq!(by_ingredient(bun)["low"], true);
    assert_eq!(by_ingredient(sauce)["low"], true);
}

#[tokio::test]
async fn low_stock_endpoint_returns_only_the_low_subset() {
    let app = TestApp::new().await;
    app.seed_ingredient("Beef Patty", "ea").await;
    let bun = app.seed_ingredient("Burger Bun", "ea").await;
    let store = app.register_store("GANGNAM", "Gangnam Branch").await;

    app.set_stock(store.id, bun, 3).await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/v1/stores/{}/inventory/low-stock", store.id),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;

    assert_eq!(names(&body["data"]), vec!["Burger Bun"]);
    assert_eq!(body["data"][0]["quantity"], 3);
    assert_eq!(body["data"][0]["low"], true);
}

#[tokio::test]
async fn inventory_for_an_unknown_store_is_not_found() {
    let app = TestApp::new().await;

    let listing = app
        .request(Method::GET, "/api/v1/stores/42/inventory", None)
        .await;
    assert_eq!(listing.status(), 404);

    let low = app
        .request(Method::GET, "/api/v1/stores/42/inventory/low-stock", None)
        .await;
    assert_eq!(low.status(), 404);
}

#[tokio::test]
async fn ingredient_catalog_is_empty_when_nothing_is_seeded() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/ingredients", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
}
