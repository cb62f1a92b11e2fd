use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::services::catalog::{
    IngredientResponse, MenuOptionResponse, MenuResponse, TopMenuEntry, DEFAULT_TOP_MENUS,
};
use crate::{errors::ServiceError, ApiResponse, AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopMenusQuery {
    #[serde(default = "default_top_limit")]
    pub limit: usize,
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_MENUS
}

#[utoipa::path(
    get,
    path = "/api/v1/menus",
    summary = "List menus",
    description = "List all menu items currently available for ordering, grouped by category",
    responses(
        (status = 200, description = "Menus retrieved successfully", body = ApiResponse<Vec<MenuResponse>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_menus(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MenuResponse>>>, ServiceError> {
    let menus = state.services.catalog.list_menus().await?;
    Ok(Json(ApiResponse::success(menus)))
}

#[utoipa::path(
    get,
    path = "/api/v1/menus/top",
    summary = "Top menus",
    description = "List the best-selling menu items across all stores, by quantity sold",
    params(
        ("limit" = Option<usize>, Query, description = "Number of entries to return (default: 3)"),
    ),
    responses(
        (status = 200, description = "Top menus retrieved successfully", body = ApiResponse<Vec<TopMenuEntry>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn top_menus(
    State(state): State<AppState>,
    Query(query): Query<TopMenusQuery>,
) -> Result<Json<ApiResponse<Vec<TopMenuEntry>>>, ServiceError> {
    let entries = state.services.catalog.top_menus(query.limit).await?;
    Ok(Json(ApiResponse::success(entries)))
}

#[utoipa::path(
    get,
    path = "/api/v1/menus/{id}/options",
    summary = "List menu options",
    description = "List the active options for a menu item, in display order",
    params(("id" = i64, Path, description = "Menu ID")),
    responses(
        (status = 200, description = "Options retrieved successfully", body = ApiResponse<Vec<MenuOptionResponse>>),
        (status = 404, description = "Menu not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_menu_options(
    State(state): State<AppState>,
    Path(menu_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<MenuOptionResponse>>>, ServiceError> {
    let options = state.services.catalog.list_options(menu_id).await?;
    Ok(Json(ApiResponse::success(options)))
}

#[utoipa::path(
    get,
    path = "/api/v1/ingredients",
    summary = "List ingredients",
    description = "List every ingredient known to the franchise, with its stocking unit",
    responses(
        (status = 200, description = "Ingredients retrieved successfully", body = ApiResponse<Vec<IngredientResponse>>),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse),
    )
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<IngredientResponse>>>, ServiceError> {
    let ingredients = state.services.catalog.list_ingredients().await?;
    Ok(Json(ApiResponse::success(ingredients)))
}
