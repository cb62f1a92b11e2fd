use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::services::orders::{
    KitchenTicketResponse, OrderHistoryEntry, OrderResponse, OrderStatusResponse,
    PlaceOrderRequest, PlacedOrderResponse, TotalSalesResponse,
};
use crate::{errors::ServiceError, ApiResponse, AppState};

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    summary = "Place order",
    description = "Place a new order for a store, verifying the quoted total and deducting ingredient stock",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed successfully", body = ApiResponse<PlacedOrderResponse>),
        (status = 400, description = "Invalid request data", body = crate::errors::ErrorResponse),
        (status = 409, description = "Store is missing an inventory row for a required ingredient", body = crate::errors::ErrorResponse),
        (status = 422, description = "Insufficient stock for a required ingredient", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlacedOrderResponse>>), ServiceError> {
    let placed = state.services.orders.place_order(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(placed))))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    summary = "Get order",
    description = "Get a single order with its line items and selected options",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order retrieved successfully", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderResponse>>, ServiceError> {
    let order = state.services.orders.get_order(id).await?;
    Ok(Json(ApiResponse::success(order)))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}/status",
    summary = "Get order status",
    description = "Get the current preparation status of an order",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order status retrieved successfully", body = ApiResponse<OrderStatusResponse>),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderStatusResponse>>, ServiceError> {
    let status = state.services.orders.get_order_status(id).await?;
    Ok(Json(ApiResponse::success(status)))
}

#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/complete",
    summary = "Complete order",
    description = "Mark a waiting order as completed. Completing an already completed order is a no-op",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order completed", body = ApiResponse<OrderStatusResponse>),
        (status = 404, description = "Order not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn complete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderStatusResponse>>, ServiceError> {
    let status = state.services.orders.complete_order(id).await?;
    Ok(Json(ApiResponse::success(status)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/kitchen/queue",
    summary = "Kitchen queue",
    description = "List waiting orders for a store, oldest first, with a one-line summary per ticket",
    params(("id" = i64, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Kitchen queue retrieved successfully", body = ApiResponse<Vec<KitchenTicketResponse>>),
        (status = 404, description = "Store not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn kitchen_queue(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<KitchenTicketResponse>>>, ServiceError> {
    let tickets = state.services.orders.pending_orders(store_id).await?;
    Ok(Json(ApiResponse::success(tickets)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/orders",
    summary = "Order history",
    description = "List all orders placed at a store, newest first",
    params(("id" = i64, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Order history retrieved successfully", body = ApiResponse<Vec<OrderHistoryEntry>>),
        (status = 404, description = "Store not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn order_history(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<OrderHistoryEntry>>>, ServiceError> {
    let history = state.services.orders.order_history(store_id).await?;
    Ok(Json(ApiResponse::success(history)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/sales/total",
    summary = "Total sales",
    description = "Get the cumulative sales amount for a store across waiting and completed orders",
    params(("id" = i64, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Total sales retrieved successfully", body = ApiResponse<TotalSalesResponse>),
        (status = 404, description = "Store not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn total_sales(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> Result<Json<ApiResponse<TotalSalesResponse>>, ServiceError> {
    let total = state.services.orders.total_sales(store_id).await?;
    Ok(Json(ApiResponse::success(total)))
}
