use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::services::inventory::InventoryLevelResponse;
use crate::{errors::ServiceError, ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/inventory",
    summary = "Store inventory",
    description = "List every ingredient level held by a store, alphabetically by ingredient",
    params(("id" = i64, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Inventory retrieved successfully", body = ApiResponse<Vec<InventoryLevelResponse>>),
        (status = 404, description = "Store not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn store_inventory(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<InventoryLevelResponse>>>, ServiceError> {
    let levels = state.services.inventory.store_inventory(store_id).await?;
    Ok(Json(ApiResponse::success(levels)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}/inventory/low-stock",
    summary = "Low stock",
    description = "List the ingredients at or below their reorder threshold for a store",
    params(("id" = i64, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Low-stock levels retrieved successfully", body = ApiResponse<Vec<InventoryLevelResponse>>),
        (status = 404, description = "Store not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn low_stock(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<InventoryLevelResponse>>>, ServiceError> {
    let levels = state.services.inventory.low_stock(store_id).await?;
    Ok(Json(ApiResponse::success(levels)))
}
