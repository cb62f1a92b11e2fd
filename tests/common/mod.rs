use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    Router,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use grillpoint_api::{
    config::AppConfig,
    db,
    entities::{ingredient, menu, menu_option, option_recipe_line, recipe_line, store_inventory},
    events::{self, EventSender},
    handlers::AppServices,
    services::stores::{RegisterStoreRequest, StoreResponse},
    AppState,
};

/// Helper harness for spinning up an application state backed by a
/// throwaway SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _db_dir: tempfile::TempDir,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Construct a test application after adjusting the default config,
    /// e.g. to disallow negative stock.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("grillpoint_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 5;
        cfg.db_min_connections = 1;
        adjust(&mut cfg);

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let (event_tx, event_rx) = mpsc::channel(256);
        let event_sender = Arc::new(EventSender::new(event_tx));
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(db_arc.clone(), event_sender.clone(), &cfg);

        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        };

        let router = Router::new()
            .nest("/api/v1", grillpoint_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
            _event_task: event_task,
        }
    }

    /// Send a request against the router, optionally with a JSON body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Insert an ingredient and return its id.
    pub async fn seed_ingredient(&self, name: &str, unit: &str) -> i64 {
        let model = ingredient::ActiveModel {
            name: Set(name.to_string()),
            unit: Set(unit.to_string()),
            ..Default::default()
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed ingredient for tests");
        model.id
    }

    /// Insert a menu and return its id. `set_price: None` means the menu
    /// has no set variant.
    pub async fn seed_menu(
        &self,
        name: &str,
        price: Decimal,
        set_price: Option<Decimal>,
        category: &str,
    ) -> i64 {
        let model = menu::ActiveModel {
            name: Set(name.to_string()),
            price: Set(price),
            set_price: Set(set_price),
            category: Set(category.to_string()),
            description: Set(None),
            is_sold_out: Set(false),
            ..Default::default()
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed menu for tests");
        model.id
    }

    /// Flip a menu's sold-out flag.
    pub async fn mark_sold_out(&self, menu_id: i64) {
        let model = menu::ActiveModel {
            id: Set(menu_id),
            is_sold_out: Set(true),
            ..Default::default()
        };
        model
            .update(self.state.db.as_ref())
            .await
            .expect("mark menu sold out for tests");
    }

    /// Insert a menu option and return its id.
    pub async fn seed_menu_option(
        &self,
        menu_id: i64,
        name: &str,
        price_delta: Decimal,
        sort_order: i32,
    ) -> i64 {
        let model = menu_option::ActiveModel {
            menu_id: Set(menu_id),
            name: Set(name.to_string()),
            price_delta: Set(price_delta),
            is_active: Set(true),
            sort_order: Set(sort_order),
            ..Default::default()
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed menu option for tests");
        model.id
    }

    /// Record how much of an ingredient one unit of a menu consumes.
    pub async fn seed_recipe_line(&self, menu_id: i64, ingredient_id: i64, required_quantity: i32) {
        recipe_line::ActiveModel {
            menu_id: Set(menu_id),
            ingredient_id: Set(ingredient_id),
            required_quantity: Set(required_quantity),
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed recipe line for tests");
    }

    /// Record the extra consumption an option adds per selection.
    pub async fn seed_option_recipe_line(
        &self,
        option_id: i64,
        ingredient_id: i64,
        delta_quantity: i32,
    ) {
        option_recipe_line::ActiveModel {
            option_id: Set(option_id),
            ingredient_id: Set(ingredient_id),
            delta_quantity: Set(delta_quantity),
        }
        .insert(self.state.db.as_ref())
        .await
        .expect("seed option recipe line for tests");
    }

    /// Register a store through the service, seeding its inventory with
    /// every ingredient that exists at call time.
    pub async fn register_store(&self, code: &str, name: &str) -> StoreResponse {
        self.state
            .services
            .stores
            .register_store(RegisterStoreRequest {
                code: code.to_string(),
                name: name.to_string(),
                contact: "010-1234-5678".to_string(),
                address: "1 Test Street".to_string(),
                manager_name: "Test Manager".to_string(),
            })
            .await
            .expect("register store for tests")
    }

    /// Overwrite the stock level of one inventory row.
    pub async fn set_stock(&self, store_id: i64, ingredient_id: i64, quantity: i32) {
        let model = store_inventory::ActiveModel {
            store_id: Set(store_id),
            ingredient_id: Set(ingredient_id),
            quantity: Set(quantity),
            ..Default::default()
        };
        model
            .update(self.state.db.as_ref())
            .await
            .expect("set stock for tests");
    }

    /// Read back the stock level of one inventory row.
    pub async fn stock_of(&self, store_id: i64, ingredient_id: i64) -> i32 {
        store_inventory::Entity::find_by_id((store_id, ingredient_id))
            .one(self.state.db.as_ref())
            .await
            .expect("query stock for tests")
            .map(|row| row.quantity)
            .expect("inventory row should exist")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
    }
}
