//! Grillpoint API Library
//!
//! Core functionality for the Grillpoint franchise backend: kiosk
//! ordering, recipe-driven inventory, and headquarters supply workflows.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::ToSchema;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: Arc<events::EventSender>,
    pub services: handlers::AppServices,
}

// Common response wrapper
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            errors: None,
        }
    }

    pub fn validation_errors(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some("Validation failed".to_string()),
            errors: Some(errors),
        }
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

// API v1 routes
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Status and health endpoints
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        // Orders API
        .route("/orders", post(handlers::orders::place_order))
        .route("/orders/:id", get(handlers::orders::get_order))
        .route("/orders/:id/status", get(handlers::orders::get_order_status))
        .route(
            "/orders/:id/complete",
            post(handlers::orders::complete_order),
        )
        // Catalog API
        .route("/menus", get(handlers::catalog::list_menus))
        .route("/menus/top", get(handlers::catalog::top_menus))
        .route(
            "/menus/:id/options",
            get(handlers::catalog::list_menu_options),
        )
        .route("/ingredients", get(handlers::catalog::list_ingredients))
        // Stores API
        .route("/stores", post(handlers::stores::register_store))
        .route("/stores", get(handlers::stores::list_stores))
        .route("/stores/login", post(handlers::stores::login))
        .route("/stores/rankings", get(handlers::stores::store_rankings))
        .route(
            "/stores/:id/inventory",
            get(handlers::inventory::store_inventory),
        )
        .route(
            "/stores/:id/inventory/low-stock",
            get(handlers::inventory::low_stock),
        )
        .route("/stores/:id/orders", get(handlers::orders::order_history))
        .route(
            "/stores/:id/sales/total",
            get(handlers::orders::total_sales),
        )
        .route(
            "/stores/:id/kitchen/queue",
            get(handlers::orders::kitchen_queue),
        )
        // Supply API
        .route(
            "/supply-requests",
            post(handlers::supply::create_supply_request),
        )
        .route(
            "/supply-requests/pending",
            get(handlers::supply::pending_requests),
        )
        .route(
            "/supply-requests/shipments",
            get(handlers::supply::shipment_history),
        )
        .route(
            "/supply-requests/:id/status",
            get(handlers::supply::get_request_status),
        )
        .route(
            "/supply-requests/:id/approve",
            post(handlers::supply::approve_request),
        )
        .route(
            "/supply-requests/:id/reject",
            post(handlers::supply::reject_request),
        )
}

async fn api_status() -> Result<Json<ApiResponse<Value>>, errors::ServiceError> {
    let version = env!("CARGO_PKG_VERSION");
    let status_data = json!({
        "status": "ok",
        "version": version,
        "service": "grillpoint-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
    });

    Ok(Json(ApiResponse::success(status_data)))
}

async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Value>>, errors::ServiceError> {
    // Check database connectivity
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    let health_data = json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    Ok(Json(ApiResponse::success(health_data)))
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn success_response_wraps_data() {
        let response = ApiResponse::success("ok");
        assert!(response.success);
        assert_eq!(response.data, Some("ok"));
        assert!(response.message.is_none());
    }

    #[test]
    fn error_response_carries_message() {
        let response = ApiResponse::<()>::error("oops".into());
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("oops"));
    }

    #[test]
    fn validation_errors_response_lists_failures() {
        let response = ApiResponse::<()>::validation_errors(vec!["missing".into()]);
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Validation failed"));
        assert_eq!(response.errors.as_deref(), Some(&["missing".to_string()][..]));
    }
}
