use crate::{
    db::{is_transient_db_err, DbPool},
    entities::{
        menu, menu_option, option_recipe_line, order,
        order::OrderStatus,
        order_detail, order_detail_option, recipe_line, sale_record, store, store_inventory,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionError, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{ensure_store_exists, load_menu_names, transient_backoff, TRANSIENT_RETRY_ATTEMPTS};

/// The kiosk only takes card payments.
const PAYMENT_METHOD_CARD: &str = "CARD";

/// Options are recorded once per cart line; the kiosk UI has no
/// per-option quantity control.
const OPTION_QUANTITY_PER_LINE: i32 = 1;

/// Request/Response types for the order service
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    pub store_id: i64,
    #[validate]
    pub items: Vec<OrderItemRequest>,
    /// Total the client displayed at checkout; must match the
    /// server-side recomputation.
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemRequest {
    pub menu_id: i64,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    pub is_set: bool,
    #[serde(default)]
    pub option_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlacedOrderResponse {
    pub order_id: Uuid,
    pub order_number: String,
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLineOptionResponse {
    pub option_id: i64,
    pub name: String,
    pub price_delta: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLineResponse {
    pub menu_id: i64,
    pub menu_name: String,
    pub quantity: i32,
    pub is_set: bool,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub options: Vec<OrderLineOptionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub store_id: i64,
    pub order_number: String,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<OrderLineResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusResponse {
    pub order_id: Uuid,
    pub order_number: String,
    pub status: OrderStatus,
}

/// One row on the kitchen display: the order plus a one-line menu summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KitchenTicketResponse {
    pub order_id: Uuid,
    pub order_number: String,
    /// e.g. "Bulgogi Burger(Set) x2, Cola x1"
    pub summary: String,
    pub total_amount: Decimal,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderHistoryEntry {
    pub order_id: Uuid,
    pub order_number: String,
    pub summary: String,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalSalesResponse {
    pub store_id: i64,
    pub total_sales: Decimal,
}

/// Service for the order lifecycle: placement, status reads, kitchen
/// queue and completion.
#[derive(Clone)]
pub struct OrderService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
    /// When false, a deduction that would take stock below zero fails
    /// the whole order with `InsufficientStock`.
    allow_negative_stock: bool,
}

impl OrderService {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Option<Arc<EventSender>>,
        allow_negative_stock: bool,
    ) -> Self {
        Self {
            db_pool,
            event_sender,
            allow_negative_stock,
        }
    }

    /// Places a kiosk order: validates the cart, recomputes the total,
    /// writes the order rows and deducts ingredient stock, all in one
    /// transaction.
    #[instrument(skip(self, request), fields(store_id = request.store_id, item_count = request.items.len()))]
    pub async fn place_order(
        &self,
        request: PlaceOrderRequest,
    ) -> Result<PlacedOrderResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;
        if request.items.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Order must contain at least one item".to_string(),
            ));
        }

        let mut attempt = 0u32;
        let placed = loop {
            match self.try_place_order(&request).await {
                Err(ServiceError::DatabaseError(err))
                    if attempt < TRANSIENT_RETRY_ATTEMPTS && is_transient_db_err(&err) =>
                {
                    attempt += 1;
                    let delay = transient_backoff(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Transient database conflict while placing order, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                other => break other?,
            }
        };

        info!(
            order_id = %placed.order_id,
            order_number = %placed.order_number,
            total_amount = %placed.total_amount,
            "Order placed successfully"
        );

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::OrderPlaced {
                    order_id: placed.order_id,
                    store_id: request.store_id,
                    order_number: placed.order_number.clone(),
                    total_amount: placed.total_amount,
                })
                .await
            {
                warn!(error = %e, order_id = %placed.order_id, "Failed to send order placed event");
            }
        }

        Ok(placed)
    }

    async fn try_place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlacedOrderResponse, ServiceError> {
        let db = &*self.db_pool;
        let allow_negative_stock = self.allow_negative_stock;
        let request = request.clone();

        db.transaction::<_, PlacedOrderResponse, ServiceError>(move |txn| {
            Box::pin(async move { place_order_in_txn(txn, &request, allow_negative_stock).await })
        })
        .await
        .map_err(|e| match e {
            TransactionError::Connection(err) => ServiceError::DatabaseError(err),
            TransactionError::Transaction(err) => err,
        })
    }

    /// Retrieves an order with its lines and selected options.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn get_order(&self, order_id: Uuid) -> Result<OrderResponse, ServiceError> {
        let db = &*self.db_pool;

        let order = order::Entity::find_by_id(order_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", order_id)))?;

        let details = order_detail::Entity::find()
            .filter(order_detail::Column::OrderId.eq(order_id))
            .all(db)
            .await?;

        let menu_names = load_menu_names(db, details.iter().map(|d| d.menu_id)).await?;

        let detail_ids: Vec<Uuid> = details.iter().map(|d| d.id).collect();
        let selections = if detail_ids.is_empty() {
            Vec::new()
        } else {
            order_detail_option::Entity::find()
                .filter(order_detail_option::Column::OrderDetailId.is_in(detail_ids))
                .all(db)
                .await?
        };

        let option_models: HashMap<i64, menu_option::Model> = if selections.is_empty() {
            HashMap::new()
        } else {
            let option_ids: Vec<i64> = selections.iter().map(|s| s.option_id).collect();
            menu_option::Entity::find()
                .filter(menu_option::Column::Id.is_in(option_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|o| (o.id, o))
                .collect()
        };

        let mut options_by_detail: HashMap<Uuid, Vec<OrderLineOptionResponse>> = HashMap::new();
        for selection in selections {
            if let Some(option) = option_models.get(&selection.option_id) {
                options_by_detail
                    .entry(selection.order_detail_id)
                    .or_default()
                    .push(OrderLineOptionResponse {
                        option_id: option.id,
                        name: option.name.clone(),
                        price_delta: option.price_delta,
                    });
            }
        }

        let lines = details
            .into_iter()
            .map(|d| OrderLineResponse {
                menu_id: d.menu_id,
                menu_name: menu_names
                    .get(&d.menu_id)
                    .cloned()
                    .unwrap_or_else(|| format!("menu {}", d.menu_id)),
                quantity: d.quantity,
                is_set: d.is_set,
                unit_price: d.unit_price,
                subtotal: d.subtotal,
                options: options_by_detail.remove(&d.id).unwrap_or_default(),
            })
            .collect();

        Ok(OrderResponse {
            id: order.id,
            store_id: order.store_id,
            order_number: order.order_number,
            total_amount: order.total_amount,
            status: order.status,
            placed_at: order.placed_at,
            lines,
        })
    }

    /// Lightweight status read for kiosk polling.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn get_order_status(
        &self,
        order_id: Uuid,
    ) -> Result<OrderStatusResponse, ServiceError> {
        let db = &*self.db_pool;

        let order = order::Entity::find_by_id(order_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", order_id)))?;

        Ok(OrderStatusResponse {
            order_id: order.id,
            order_number: order.order_number,
            status: order.status,
        })
    }

    /// Marks a waiting order completed. Completing an order twice is a
    /// no-op; the guard lives in the WHERE clause so two kitchen
    /// terminals cannot both transition it.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn complete_order(&self, order_id: Uuid) -> Result<OrderStatusResponse, ServiceError> {
        let db = &*self.db_pool;

        let result = order::Entity::update_many()
            .col_expr(order::Column::Status, Expr::value(OrderStatus::Completed))
            .filter(order::Column::Id.eq(order_id))
            .filter(order::Column::Status.eq(OrderStatus::Waiting))
            .exec(db)
            .await?;

        let order = order::Entity::find_by_id(order_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", order_id)))?;

        if result.rows_affected == 1 {
            info!(order_id = %order_id, order_number = %order.order_number, "Order completed");

            if let Some(event_sender) = &self.event_sender {
                if let Err(e) = event_sender.send(Event::OrderCompleted(order_id)).await {
                    warn!(error = %e, order_id = %order_id, "Failed to send order completed event");
                }
            }
        } else {
            info!(order_id = %order_id, "Order was already completed");
        }

        Ok(OrderStatusResponse {
            order_id: order.id,
            order_number: order.order_number,
            status: order.status,
        })
    }

    /// Waiting orders for the kitchen display, oldest first.
    #[instrument(skip(self), fields(store_id = store_id))]
    pub async fn pending_orders(
        &self,
        store_id: i64,
    ) -> Result<Vec<KitchenTicketResponse>, ServiceError> {
        let db = &*self.db_pool;
        ensure_store_exists(db, store_id).await?;

        let orders = order::Entity::find()
            .filter(order::Column::StoreId.eq(store_id))
            .filter(order::Column::Status.eq(OrderStatus::Waiting))
            .order_by_asc(order::Column::PlacedAt)
            .all(db)
            .await?;

        let mut summaries = load_order_summaries(db, &orders).await?;

        Ok(orders
            .into_iter()
            .map(|o| KitchenTicketResponse {
                order_id: o.id,
                order_number: o.order_number,
                summary: summaries.remove(&o.id).unwrap_or_default(),
                total_amount: o.total_amount,
                placed_at: o.placed_at,
            })
            .collect())
    }

    /// Full order history for a store, newest first.
    #[instrument(skip(self), fields(store_id = store_id))]
    pub async fn order_history(
        &self,
        store_id: i64,
    ) -> Result<Vec<OrderHistoryEntry>, ServiceError> {
        let db = &*self.db_pool;
        ensure_store_exists(db, store_id).await?;

        let orders = order::Entity::find()
            .filter(order::Column::StoreId.eq(store_id))
            .order_by_desc(order::Column::PlacedAt)
            .all(db)
            .await?;

        let mut summaries = load_order_summaries(db, &orders).await?;

        Ok(orders
            .into_iter()
            .map(|o| OrderHistoryEntry {
                order_id: o.id,
                order_number: o.order_number,
                summary: summaries.remove(&o.id).unwrap_or_default(),
                total_amount: o.total_amount,
                status: o.status,
                placed_at: o.placed_at,
            })
            .collect())
    }

    /// Sum of order totals for a store across waiting and completed
    /// orders.
    #[instrument(skip(self), fields(store_id = store_id))]
    pub async fn total_sales(&self, store_id: i64) -> Result<TotalSalesResponse, ServiceError> {
        let db = &*self.db_pool;
        ensure_store_exists(db, store_id).await?;

        let total: Option<Option<Decimal>> = order::Entity::find()
            .select_only()
            .column_as(order::Column::TotalAmount.sum(), "total_sales")
            .filter(order::Column::StoreId.eq(store_id))
            .filter(order::Column::Status.is_in([OrderStatus::Waiting, OrderStatus::Completed]))
            .into_tuple()
            .one(db)
            .await?;

        Ok(TotalSalesResponse {
            store_id,
            total_sales: total.flatten().unwrap_or(Decimal::ZERO),
        })
    }
}

struct PricedLine<'a> {
    item: &'a OrderItemRequest,
    unit_price: Decimal,
    subtotal: Decimal,
    options: Vec<menu_option::Model>,
}

async fn place_order_in_txn(
    txn: &DatabaseTransaction,
    request: &PlaceOrderRequest,
    allow_negative_stock: bool,
) -> Result<PlacedOrderResponse, ServiceError> {
    let store = store::Entity::find_by_id(request.store_id)
        .one(txn)
        .await?
        .ok_or_else(|| {
            ServiceError::InvalidInput(format!("Store {} does not exist", request.store_id))
        })?;
    if !store.is_active {
        return Err(ServiceError::InvalidInput(format!(
            "Store '{}' is not active",
            store.code
        )));
    }

    let mut menu_ids: Vec<i64> = request.items.iter().map(|i| i.menu_id).collect();
    menu_ids.sort_unstable();
    menu_ids.dedup();

    let menus: HashMap<i64, menu::Model> = menu::Entity::find()
        .filter(menu::Column::Id.is_in(menu_ids.clone()))
        .all(txn)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    let mut option_ids: Vec<i64> = request
        .items
        .iter()
        .flat_map(|i| i.option_ids.iter().copied())
        .collect();
    option_ids.sort_unstable();
    option_ids.dedup();

    let options: HashMap<i64, menu_option::Model> = if option_ids.is_empty() {
        HashMap::new()
    } else {
        menu_option::Entity::find()
            .filter(menu_option::Column::Id.is_in(option_ids.clone()))
            .all(txn)
            .await?
            .into_iter()
            .map(|o| (o.id, o))
            .collect()
    };

    // Price every line and recompute the order total before any row is
    // written.
    let mut verified_total = Decimal::ZERO;
    let mut priced_lines: Vec<PricedLine<'_>> = Vec::with_capacity(request.items.len());

    for item in &request.items {
        let menu = menus.get(&item.menu_id).ok_or_else(|| {
            ServiceError::InvalidInput(format!("Menu {} does not exist", item.menu_id))
        })?;
        if menu.is_sold_out {
            return Err(ServiceError::InvalidInput(format!(
                "Menu '{}' is sold out",
                menu.name
            )));
        }

        let base_price = if item.is_set {
            menu.set_price.ok_or_else(|| {
                ServiceError::InvalidInput(format!("Menu '{}' has no set variant", menu.name))
            })?
        } else {
            menu.price
        };

        let mut seen_options: HashSet<i64> = HashSet::with_capacity(item.option_ids.len());
        let mut option_delta_total = Decimal::ZERO;
        let mut line_options = Vec::with_capacity(item.option_ids.len());
        for option_id in &item.option_ids {
            if !seen_options.insert(*option_id) {
                return Err(ServiceError::InvalidInput(format!(
                    "Option {} is selected twice for menu '{}'",
                    option_id, menu.name
                )));
            }
            let option = options.get(option_id).ok_or_else(|| {
                ServiceError::InvalidInput(format!("Option {} does not exist", option_id))
            })?;
            if option.menu_id != item.menu_id {
                return Err(ServiceError::InvalidInput(format!(
                    "Option '{}' does not belong to menu '{}'",
                    option.name, menu.name
                )));
            }
            if !option.is_active {
                return Err(ServiceError::InvalidInput(format!(
                    "Option '{}' is not available",
                    option.name
                )));
            }
            option_delta_total += option.price_delta;
            line_options.push(option.clone());
        }

        let unit_price = base_price + option_delta_total;
        let subtotal = unit_price * Decimal::from(item.quantity);
        verified_total += subtotal;
        priced_lines.push(PricedLine {
            item,
            unit_price,
            subtotal,
            options: line_options,
        });
    }

    if verified_total != request.total_amount {
        return Err(ServiceError::ValidationError(format!(
            "Total amount mismatch: client sent {}, server computed {}",
            request.total_amount, verified_total
        )));
    }

    // Bump the per-store sequence inside the transaction; the row lock
    // serializes concurrent orders on the same store.
    store::Entity::update_many()
        .col_expr(
            store::Column::NextOrderSeq,
            Expr::col(store::Column::NextOrderSeq).add(1),
        )
        .filter(store::Column::Id.eq(store.id))
        .exec(txn)
        .await?;
    let seq = store::Entity::find_by_id(store.id)
        .one(txn)
        .await?
        .map(|s| s.next_order_seq)
        .ok_or_else(|| {
            ServiceError::InternalError("Store row vanished while assigning order number".into())
        })?;

    let order_id = Uuid::new_v4();
    let order_number = format!("{}-{:06}", store.code, seq);
    let placed_at = Utc::now();

    order::ActiveModel {
        id: Set(order_id),
        store_id: Set(store.id),
        order_number: Set(order_number.clone()),
        total_amount: Set(verified_total),
        status: Set(OrderStatus::Waiting),
        placed_at: Set(placed_at),
    }
    .insert(txn)
    .await?;

    // Preload recipe lines for every menu and option in the cart.
    let recipe_map = load_recipe_map(txn, &menu_ids).await?;
    let option_recipe_map = load_option_recipe_map(txn, &option_ids).await?;

    for line in &priced_lines {
        let detail_id = Uuid::new_v4();
        order_detail::ActiveModel {
            id: Set(detail_id),
            order_id: Set(order_id),
            menu_id: Set(line.item.menu_id),
            quantity: Set(line.item.quantity),
            is_set: Set(line.item.is_set),
            unit_price: Set(line.unit_price),
            subtotal: Set(line.subtotal),
        }
        .insert(txn)
        .await?;

        if let Some(ingredients) = recipe_map.get(&line.item.menu_id) {
            for (ingredient_id, required_quantity) in ingredients {
                let delta = required_quantity * line.item.quantity;
                deduct_stock(txn, store.id, *ingredient_id, delta, allow_negative_stock).await?;
            }
        }

        for option in &line.options {
            order_detail_option::ActiveModel {
                order_detail_id: Set(detail_id),
                option_id: Set(option.id),
                option_quantity: Set(OPTION_QUANTITY_PER_LINE),
            }
            .insert(txn)
            .await?;

            if let Some(ingredients) = option_recipe_map.get(&option.id) {
                for (ingredient_id, delta_quantity) in ingredients {
                    let delta = delta_quantity * line.item.quantity * OPTION_QUANTITY_PER_LINE;
                    deduct_stock(txn, store.id, *ingredient_id, delta, allow_negative_stock)
                        .await?;
                }
            }
        }
    }

    sale_record::ActiveModel {
        order_id: Set(order_id),
        payment_method: Set(PAYMENT_METHOD_CARD.to_string()),
        total_price: Set(verified_total),
    }
    .insert(txn)
    .await?;

    Ok(PlacedOrderResponse {
        order_id,
        order_number,
        total_amount: verified_total,
        status: OrderStatus::Waiting,
    })
}

async fn load_recipe_map(
    txn: &DatabaseTransaction,
    menu_ids: &[i64],
) -> Result<HashMap<i64, Vec<(i64, i32)>>, ServiceError> {
    let lines = recipe_line::Entity::find()
        .filter(recipe_line::Column::MenuId.is_in(menu_ids.to_vec()))
        .all(txn)
        .await?;

    let mut map: HashMap<i64, Vec<(i64, i32)>> = HashMap::new();
    for line in lines {
        map.entry(line.menu_id)
            .or_default()
            .push((line.ingredient_id, line.required_quantity));
    }
    Ok(map)
}

async fn load_option_recipe_map(
    txn: &DatabaseTransaction,
    option_ids: &[i64],
) -> Result<HashMap<i64, Vec<(i64, i32)>>, ServiceError> {
    if option_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let lines = option_recipe_line::Entity::find()
        .filter(option_recipe_line::Column::OptionId.is_in(option_ids.to_vec()))
        .all(txn)
        .await?;

    let mut map: HashMap<i64, Vec<(i64, i32)>> = HashMap::new();
    for line in lines {
        map.entry(line.option_id)
            .or_default()
            .push((line.ingredient_id, line.delta_quantity));
    }
    Ok(map)
}

/// Applies a relative stock decrement for one ingredient.
///
/// The decrement is a single conditional UPDATE so concurrent orders
/// cannot lose writes. In strict mode the row must hold at least
/// `delta` units or the update matches nothing.
async fn deduct_stock(
    txn: &DatabaseTransaction,
    store_id: i64,
    ingredient_id: i64,
    delta: i32,
    allow_negative_stock: bool,
) -> Result<(), ServiceError> {
    let mut update = store_inventory::Entity::update_many()
        .col_expr(
            store_inventory::Column::Quantity,
            Expr::col(store_inventory::Column::Quantity).sub(delta),
        )
        .filter(store_inventory::Column::StoreId.eq(store_id))
        .filter(store_inventory::Column::IngredientId.eq(ingredient_id));
    if !allow_negative_stock {
        update = update.filter(store_inventory::Column::Quantity.gte(delta));
    }

    let result = update.exec(txn).await?;
    if result.rows_affected == 1 {
        return Ok(());
    }

    // Zero rows matched: either the inventory row is missing or strict
    // mode found insufficient stock. Probe to tell the two apart.
    let row = store_inventory::Entity::find_by_id((store_id, ingredient_id))
        .one(txn)
        .await?;
    match row {
        Some(row) => Err(ServiceError::InsufficientStock(format!(
            "Ingredient {} has {} units at store {}, order needs {}",
            ingredient_id, row.quantity, store_id, delta
        ))),
        None => Err(ServiceError::Conflict(format!(
            "Store {} has no inventory row for ingredient {}",
            store_id, ingredient_id
        ))),
    }
}

/// Builds the "Bulgogi Burger(Set) x2, Cola x1" display line for each
/// order in one pass.
async fn load_order_summaries<C>(
    db: &C,
    orders: &[order::Model],
) -> Result<HashMap<Uuid, String>, ServiceError>
where
    C: ConnectionTrait,
{
    if orders.is_empty() {
        return Ok(HashMap::new());
    }

    let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let details = order_detail::Entity::find()
        .filter(order_detail::Column::OrderId.is_in(order_ids))
        .all(db)
        .await?;

    let menu_names = load_menu_names(db, details.iter().map(|d| d.menu_id)).await?;

    let mut parts: HashMap<Uuid, Vec<String>> = HashMap::new();
    for detail in details {
        let name = menu_names
            .get(&detail.menu_id)
            .cloned()
            .unwrap_or_else(|| format!("menu {}", detail.menu_id));
        let marker = if detail.is_set { "(Set)" } else { "" };
        parts
            .entry(detail.order_id)
            .or_default()
            .push(format!("{}{} x{}", name, marker, detail.quantity));
    }

    Ok(parts
        .into_iter()
        .map(|(order_id, lines)| (order_id, lines.join(", ")))
        .collect())
}
