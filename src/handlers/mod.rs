pub mod catalog;
pub mod inventory;
pub mod orders;
pub mod stores;
pub mod supply;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::events::EventSender;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub orders: Arc<crate::services::orders::OrderService>,
    pub supply: Arc<crate::services::supply::SupplyService>,
    pub stores: Arc<crate::services::stores::StoreService>,
    pub catalog: Arc<crate::services::catalog::CatalogService>,
    pub inventory: Arc<crate::services::inventory::InventoryService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>, config: &AppConfig) -> Self {
        let orders = Arc::new(crate::services::orders::OrderService::new(
            db_pool.clone(),
            Some(event_sender.clone()),
            config.allow_negative_stock,
        ));
        let supply = Arc::new(crate::services::supply::SupplyService::new(
            db_pool.clone(),
            Some(event_sender.clone()),
        ));
        let stores = Arc::new(crate::services::stores::StoreService::new(
            db_pool.clone(),
            Some(event_sender),
            config.seed_inventory_quantity,
            config.seed_inventory_threshold,
        ));
        let catalog = Arc::new(crate::services::catalog::CatalogService::new(
            db_pool.clone(),
        ));
        let inventory = Arc::new(crate::services::inventory::InventoryService::new(db_pool));

        Self {
            orders,
            supply,
            stores,
            catalog,
            inventory,
        }
    }
}
