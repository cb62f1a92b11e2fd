use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grillpoint API",
        version = "0.3.0",
        description = r#"
# Grillpoint Franchise API

Order, inventory, and supply management for a burger franchise: kiosk
ordering with per-line options, recipe-driven stock deduction, kitchen
queues, and a headquarters view over supply requests and store rankings.

## Error Handling

Errors use a consistent envelope with appropriate HTTP status codes:

```json
{
  "error": "Unprocessable Entity",
  "message": "Ingredient 3 has 2 units at store 1, order needs 6",
  "timestamp": "2024-03-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Orders", description = "Order placement and lifecycle endpoints"),
        (name = "Catalog", description = "Menu, option, and ingredient endpoints"),
        (name = "Stores", description = "Store registration, login, and ranking endpoints"),
        (name = "Inventory", description = "Per-store ingredient level endpoints"),
        (name = "Supply", description = "Supply request and shipment endpoints"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        // Orders
        crate::handlers::orders::place_order,
        crate::handlers::orders::get_order,
        crate::handlers::orders::get_order_status,
        crate::handlers::orders::complete_order,
        crate::handlers::orders::kitchen_queue,
        crate::handlers::orders::order_history,
        crate::handlers::orders::total_sales,

        // Catalog
        crate::handlers::catalog::list_menus,
        crate::handlers::catalog::top_menus,
        crate::handlers::catalog::list_menu_options,
        crate::handlers::catalog::list_ingredients,

        // Stores
        crate::handlers::stores::register_store,
        crate::handlers::stores::login,
        crate::handlers::stores::list_stores,
        crate::handlers::stores::store_rankings,

        // Inventory
        crate::handlers::inventory::store_inventory,
        crate::handlers::inventory::low_stock,

        // Supply
        crate::handlers::supply::create_supply_request,
        crate::handlers::supply::get_request_status,
        crate::handlers::supply::pending_requests,
        crate::handlers::supply::approve_request,
        crate::handlers::supply::reject_request,
        crate::handlers::supply::shipment_history,
    ),
    components(
        schemas(
            // Common types
            crate::ApiResponse<serde_json::Value>,

            // Order types
            crate::services::orders::PlaceOrderRequest,
            crate::services::orders::OrderItemRequest,
            crate::services::orders::PlacedOrderResponse,
            crate::services::orders::OrderResponse,
            crate::services::orders::OrderLineResponse,
            crate::services::orders::OrderLineOptionResponse,
            crate::services::orders::OrderStatusResponse,
            crate::services::orders::KitchenTicketResponse,
            crate::services::orders::OrderHistoryEntry,
            crate::services::orders::TotalSalesResponse,
            crate::entities::order::OrderStatus,

            // Catalog types
            crate::services::catalog::MenuResponse,
            crate::services::catalog::MenuOptionResponse,
            crate::services::catalog::TopMenuEntry,
            crate::services::catalog::IngredientResponse,

            // Store types
            crate::services::stores::RegisterStoreRequest,
            crate::services::stores::StoreLoginRequest,
            crate::services::stores::StoreResponse,
            crate::services::stores::StoreRankingEntry,

            // Inventory types
            crate::services::inventory::InventoryLevelResponse,

            // Supply types
            crate::services::supply::CreateSupplyRequest,
            crate::services::supply::SupplyRequestResponse,
            crate::services::supply::PendingSupplyRequestResponse,
            crate::services::supply::ShipmentResponse,
            crate::entities::supply_request::SupplyRequestStatus,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_covers_core_paths() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("Grillpoint API"));
        assert!(json.contains("/api/v1/orders"));
        assert!(json.contains("/api/v1/supply-requests/{id}/approve"));
        assert!(json.contains("/api/v1/stores/rankings"));
    }
}
