use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::services::supply::{
    CreateSupplyRequest, PendingSupplyRequestResponse, ShipmentResponse, SupplyRequestResponse,
};
use crate::{errors::ServiceError, ApiResponse, AppState};

#[utoipa::path(
    post,
    path = "/api/v1/supply-requests",
    summary = "Request supply",
    description = "File a restock request for one ingredient at a store. The request starts out pending headquarters review",
    request_body = CreateSupplyRequest,
    responses(
        (status = 201, description = "Supply request filed", body = ApiResponse<SupplyRequestResponse>),
        (status = 400, description = "Invalid request data", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn create_supply_request(
    State(state): State<AppState>,
    Json(request): Json<CreateSupplyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SupplyRequestResponse>>), ServiceError> {
    let created = state.services.supply.request_supply(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

#[utoipa::path(
    get,
    path = "/api/v1/supply-requests/{id}/status",
    summary = "Supply request status",
    description = "Get the review status of a supply request",
    params(("id" = Uuid, Path, description = "Supply request ID")),
    responses(
        (status = 200, description = "Status retrieved successfully", body = ApiResponse<SupplyRequestResponse>),
        (status = 404, description = "Supply request not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn get_request_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SupplyRequestResponse>>, ServiceError> {
    let request = state.services.supply.get_request_status(id).await?;
    Ok(Json(ApiResponse::success(request)))
}

#[utoipa::path(
    get,
    path = "/api/v1/supply-requests/pending",
    summary = "Pending supply requests",
    description = "List supply requests awaiting headquarters review, oldest first",
    responses(
        (status = 200, description = "Pending requests retrieved successfully", body = ApiResponse<Vec<PendingSupplyRequestResponse>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn pending_requests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PendingSupplyRequestResponse>>>, ServiceError> {
    let pending = state.services.supply.pending_requests().await?;
    Ok(Json(ApiResponse::success(pending)))
}

#[utoipa::path(
    post,
    path = "/api/v1/supply-requests/{id}/approve",
    summary = "Approve supply request",
    description = "Approve a pending supply request and credit the requested quantity to the store's inventory",
    params(("id" = Uuid, Path, description = "Supply request ID")),
    responses(
        (status = 200, description = "Request approved and stock credited", body = ApiResponse<SupplyRequestResponse>),
        (status = 404, description = "Supply request not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Request was already processed", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn approve_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SupplyRequestResponse>>, ServiceError> {
    let approved = state.services.supply.approve_request(id).await?;
    Ok(Json(ApiResponse::success(approved)))
}

#[utoipa::path(
    post,
    path = "/api/v1/supply-requests/{id}/reject",
    summary = "Reject supply request",
    description = "Reject a pending supply request without touching store inventory",
    params(("id" = Uuid, Path, description = "Supply request ID")),
    responses(
        (status = 200, description = "Request rejected", body = ApiResponse<SupplyRequestResponse>),
        (status = 404, description = "Supply request not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Request was already processed", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn reject_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SupplyRequestResponse>>, ServiceError> {
    let rejected = state.services.supply.reject_request(id).await?;
    Ok(Json(ApiResponse::success(rejected)))
}

#[utoipa::path(
    get,
    path = "/api/v1/supply-requests/shipments",
    summary = "Shipment history",
    description = "List approved supply requests as outbound shipments, most recently processed first",
    responses(
        (status = 200, description = "Shipments retrieved successfully", body = ApiResponse<Vec<ShipmentResponse>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn shipment_history(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ShipmentResponse>>>, ServiceError> {
    let shipments = state.services.supply.shipment_history().await?;
    Ok(Json(ApiResponse::success(shipments)))
}
