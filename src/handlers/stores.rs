use axum::{extract::State, http::StatusCode, response::Json};

use crate::services::stores::{
    RegisterStoreRequest, StoreLoginRequest, StoreRankingEntry, StoreResponse,
};
use crate::{errors::ServiceError, ApiResponse, AppState};

#[utoipa::path(
    post,
    path = "/api/v1/stores",
    summary = "Register store",
    description = "Register a new franchise store and seed its inventory with every known ingredient",
    request_body = RegisterStoreRequest,
    responses(
        (status = 201, description = "Store registered successfully", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Invalid request data", body = crate::errors::ErrorResponse),
        (status = 409, description = "Store code already registered", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn register_store(
    State(state): State<AppState>,
    Json(request): Json<RegisterStoreRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StoreResponse>>), ServiceError> {
    let store = state.services.stores.register_store(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(store))))
}

#[utoipa::path(
    post,
    path = "/api/v1/stores/login",
    summary = "Store login",
    description = "Authenticate a store by its code and registered contact number",
    request_body = StoreLoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Store code and contact number do not match", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<StoreLoginRequest>,
) -> Result<Json<ApiResponse<StoreResponse>>, ServiceError> {
    let store = state.services.stores.login(request).await?;
    Ok(Json(ApiResponse::success(store)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores",
    summary = "List stores",
    description = "List all active stores, alphabetically by name",
    responses(
        (status = 200, description = "Stores retrieved successfully", body = ApiResponse<Vec<StoreResponse>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_stores(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StoreResponse>>>, ServiceError> {
    let stores = state.services.stores.list_stores().await?;
    Ok(Json(ApiResponse::success(stores)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/rankings",
    summary = "Store rankings",
    description = "Rank active stores by cumulative sales, highest first",
    responses(
        (status = 200, description = "Rankings retrieved successfully", body = ApiResponse<Vec<StoreRankingEntry>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn store_rankings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StoreRankingEntry>>>, ServiceError> {
    let rankings = state.services.stores.store_rankings().await?;
    Ok(Json(ApiResponse::success(rankings)))
}
