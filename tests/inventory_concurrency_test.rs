//! Concurrency tests for stock deduction. Two kiosks hitting the same
//! store must never lose a decrement, and in strict mode the last units
//! must go to exactly one of two racing orders.

mod common;

use common::TestApp;
use rust_decimal_macros::dec;

use grillpoint_api::errors::ServiceError;
use grillpoint_api::services::orders::{OrderItemRequest, PlaceOrderRequest};

fn burger_order(store_id: i64, menu_id: i64) -> PlaceOrderRequest {
    PlaceOrderRequest {
        store_id,
        items: vec![OrderItemRequest {
            menu_id,
            quantity: 1,
            is_set: false,
            option_ids: vec![],
        }],
        total_amount: dec!(5.90),
    }
}

#[tokio::test]
async fn concurrent_orders_never_lose_a_stock_decrement() {
    let app = TestApp::new().await;
    let patty = app.seed_ingredient("Beef Patty", "ea").await;
    let burger = app
        .seed_menu("Classic Burger", dec!(5.90), None, "Burger")
        .await;
    app.seed_recipe_line(burger, patty, 5).await;
    let store = app.register_store("GANGNAM", "Gangnam Branch").await;
    app.set_stock(store.id, patty, 20).await;

    let mut tasks = vec![];
    for _ in 0..2 {
        let svc = app.state.services.orders.clone();
        let request = burger_order(store.id, burger);
        tasks.push(tokio::spawn(async move { svc.place_order(request).await }));
    }

    let mut order_numbers = vec![];
    for task in tasks {
        let placed = task
            .await
            .expect("order task panicked")
            .expect("both concurrent orders should succeed");
        order_numbers.push(placed.order_number);
    }

    // Each order consumed 5 patties; a lost update would leave more.
    assert_eq!(app.stock_of(store.id, patty).await, 10);

    // The per-store sequence must not hand out the same number twice.
    order_numbers.sort();
    assert_eq!(order_numbers, vec!["GANGNAM-000001", "GANGNAM-000002"]);
}

#[tokio::test]
async fn strict_mode_grants_the_last_units_to_exactly_one_order() {
    let app = TestApp::with_config(|cfg| cfg.allow_negative_stock = false).await;
    let patty = app.seed_ingredient("Beef Patty", "ea").await;
    let burger = app
        .seed_menu("Classic Burger", dec!(5.90), None, "Burger")
        .await;
    app.seed_recipe_line(burger, patty, 5).await;
    let store = app.register_store("GANGNAM", "Gangnam Branch").await;
    app.set_stock(store.id, patty, 8).await;

    let mut tasks = vec![];
    for _ in 0..2 {
        let svc = app.state.services.orders.clone();
        let request = burger_order(store.id, burger);
        tasks.push(tokio::spawn(async move { svc.place_order(request).await }));
    }

    let mut successes = 0;
    let mut rejections = 0;
    for task in tasks {
        match task.await.expect("order task panicked") {
            Ok(_) => successes += 1,
            Err(ServiceError::InsufficientStock(_)) => rejections += 1,
            Err(other) => panic!("unexpected failure: {}", other),
        }
    }

    assert_eq!(successes, 1, "exactly one order should win the last units");
    assert_eq!(rejections, 1);
    assert_eq!(app.stock_of(store.id, patty).await, 3);
}
