use crate::{
    db::{is_transient_db_err, DbPool},
    entities::{
        ingredient, store, store_inventory, supply_request,
        supply_request::SupplyRequestStatus,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionError, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{transient_backoff, TRANSIENT_RETRY_ATTEMPTS};

/// Request/Response types for the supply service
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSupplyRequest {
    pub store_id: i64,
    pub ingredient_id: i64,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupplyRequestResponse {
    pub id: Uuid,
    pub store_id: i64,
    pub ingredient_id: i64,
    pub quantity: i32,
    pub status: SupplyRequestStatus,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<supply_request::Model> for SupplyRequestResponse {
    fn from(model: supply_request::Model) -> Self {
        Self {
            id: model.id,
            store_id: model.store_id,
            ingredient_id: model.ingredient_id,
            quantity: model.quantity,
            status: model.status,
            requested_at: model.requested_at,
            processed_at: model.processed_at,
        }
    }
}

/// A pending request as shown on the warehouse console, with the store
/// and ingredient spelled out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendingSupplyRequestResponse {
    pub id: Uuid,
    pub store_id: i64,
    pub store_name: String,
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub unit: String,
    pub quantity: i32,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShipmentResponse {
    pub request_id: Uuid,
    pub store_name: String,
    pub ingredient_name: String,
    pub unit: String,
    pub quantity: i32,
    pub processed_at: DateTime<Utc>,
}

/// Service for the store-to-warehouse supply workflow.
#[derive(Clone)]
pub struct SupplyService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl SupplyService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Files a replenishment request against the warehouse.
    #[instrument(skip(self, request), fields(store_id = request.store_id, ingredient_id = request.ingredient_id))]
    pub async fn request_supply(
        &self,
        request: CreateSupplyRequest,
    ) -> Result<SupplyRequestResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;

        let store = store::Entity::find_by_id(request.store_id)
            .one(db)
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

        ingredient::Entity::find_by_id(request.ingredient_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::InvalidInput(format!(
                    "Ingredient {} does not exist",
                    request.ingredient_id
                ))
            })?;

        let model = supply_request::ActiveModel {
            id: Set(Uuid::new_v4()),
            store_id: Set(request.store_id),
            ingredient_id: Set(request.ingredient_id),
            quantity: Set(request.quantity),
            status: Set(SupplyRequestStatus::Pending),
            requested_at: Set(Utc::now()),
            processed_at: Set(None),
        }
        .insert(db)
        .await?;

        info!(request_id = %model.id, "Supply request filed");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::SupplyRequested {
                    request_id: model.id,
                    store_id: model.store_id,
                    ingredient_id: model.ingredient_id,
                    quantity: model.quantity,
                })
                .await
            {
                warn!(error = %e, request_id = %model.id, "Failed to send supply requested event");
            }
        }

        Ok(model.into())
    }

    /// Approves a pending request and credits the store's inventory in
    /// the same transaction. Approving a request that is no longer
    /// pending fails with `Conflict` and changes nothing.
    #[instrument(skip(self), fields(request_id = %request_id))]
    pub async fn approve_request(
        &self,
        request_id: Uuid,
    ) -> Result<SupplyRequestResponse, ServiceError> {
        let mut attempt = 0u32;
        let approved = loop {
            match self.try_approve_request(request_id).await {
                Err(ServiceError::DatabaseError(err))
                    if attempt < TRANSIENT_RETRY_ATTEMPTS && is_transient_db_err(&err) =>
                {
                    attempt += 1;
                    let delay = transient_backoff(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Transient database conflict while approving supply request, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                other => break other?,
            }
        };

        info!(
            request_id = %request_id,
            store_id = approved.store_id,
            ingredient_id = approved.ingredient_id,
            quantity = approved.quantity,
            "Supply request approved"
        );

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::SupplyApproved {
                    request_id: approved.id,
                    store_id: approved.store_id,
                    ingredient_id: approved.ingredient_id,
                    quantity: approved.quantity,
                })
                .await
            {
                warn!(error = %e, request_id = %request_id, "Failed to send supply approved event");
            }
        }

        Ok(approved)
    }

    async fn try_approve_request(
        &self,
        request_id: Uuid,
    ) -> Result<SupplyRequestResponse, ServiceError> {
        let db = &*self.db_pool;

        db.transaction::<_, SupplyRequestResponse, ServiceError>(move |txn| {
            Box::pin(async move { approve_request_in_txn(txn, request_id).await })
        })
        .await
        .map_err(|e| match e {
            TransactionError::Connection(err) => ServiceError::DatabaseError(err),
            TransactionError::Transaction(err) => err,
        })
    }

    /// Rejects a pending request. No stock moves.
    #[instrument(skip(self), fields(request_id = %request_id))]
    pub async fn reject_request(
        &self,
        request_id: Uuid,
    ) -> Result<SupplyRequestResponse, ServiceError> {
        let db = &*self.db_pool;
        let now = Utc::now();

        let result = supply_request::Entity::update_many()
            .col_expr(
                supply_request::Column::Status,
                Expr::value(SupplyRequestStatus::Rejected),
            )
            .col_expr(supply_request::Column::ProcessedAt, Expr::value(Some(now)))
            .filter(supply_request::Column::Id.eq(request_id))
            .filter(supply_request::Column::Status.eq(SupplyRequestStatus::Pending))
            .exec(db)
            .await?;

        let model = supply_request::Entity::find_by_id(request_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Supply request {} not found", request_id))
            })?;

        if result.rows_affected == 0 {
            return Err(ServiceError::Conflict(format!(
                "Supply request {} was already {}",
                request_id, model.status
            )));
        }

        info!(request_id = %request_id, "Supply request rejected");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender.send(Event::SupplyRejected(request_id)).await {
                warn!(error = %e, request_id = %request_id, "Failed to send supply rejected event");
            }
        }

        Ok(model.into())
    }

    /// Status poll for the store console.
    #[instrument(skip(self), fields(request_id = %request_id))]
    pub async fn get_request_status(
        &self,
        request_id: Uuid,
    ) -> Result<SupplyRequestResponse, ServiceError> {
        let db = &*self.db_pool;

        let model = supply_request::Entity::find_by_id(request_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Supply request {} not found", request_id))
            })?;

        Ok(model.into())
    }

    /// Pending requests for the warehouse console, oldest first.
    #[instrument(skip(self))]
    pub async fn pending_requests(
        &self,
    ) -> Result<Vec<PendingSupplyRequestResponse>, ServiceError> {
        let db = &*self.db_pool;

        let requests = supply_request::Entity::find()
            .filter(supply_request::Column::Status.eq(SupplyRequestStatus::Pending))
            .order_by_asc(supply_request::Column::RequestedAt)
            .all(db)
            .await?;

        let store_names = load_store_names(db, &requests).await?;
        let ingredients = load_ingredients(db, &requests).await?;

        Ok(requests
            .into_iter()
            .map(|r| {
                let (ingredient_name, unit) = ingredients
                    .get(&r.ingredient_id)
                    .cloned()
                    .unwrap_or_else(|| (format!("ingredient {}", r.ingredient_id), String::new()));
                PendingSupplyRequestResponse {
                    id: r.id,
                    store_id: r.store_id,
                    store_name: store_names
                        .get(&r.store_id)
                        .cloned()
                        .unwrap_or_else(|| format!("store {}", r.store_id)),
                    ingredient_id: r.ingredient_id,
                    ingredient_name,
                    unit,
                    quantity: r.quantity,
                    requested_at: r.requested_at,
                }
            })
            .collect())
    }

    /// Approved requests, most recently processed first.
    #[instrument(skip(self))]
    pub async fn shipment_history(&self) -> Result<Vec<ShipmentResponse>, ServiceError> {
        let db = &*self.db_pool;

        let requests = supply_request::Entity::find()
            .filter(supply_request::Column::Status.eq(SupplyRequestStatus::Approved))
            .order_by_desc(supply_request::Column::ProcessedAt)
            .all(db)
            .await?;

        let store_names = load_store_names(db, &requests).await?;
        let ingredients = load_ingredients(db, &requests).await?;

        Ok(requests
            .into_iter()
            .map(|r| {
                let (ingredient_name, unit) = ingredients
                    .get(&r.ingredient_id)
                    .cloned()
                    .unwrap_or_else(|| (format!("ingredient {}", r.ingredient_id), String::new()));
                ShipmentResponse {
                    request_id: r.id,
                    store_name: store_names
                        .get(&r.store_id)
                        .cloned()
                        .unwrap_or_else(|| format!("store {}", r.store_id)),
                    ingredient_name,
                    unit,
                    quantity: r.quantity,
                    // Approved rows always carry a processing timestamp.
                    processed_at: r.processed_at.unwrap_or(r.requested_at),
                }
            })
            .collect())
    }
}

async fn approve_request_in_txn(
    txn: &DatabaseTransaction,
    request_id: Uuid,
) -> Result<SupplyRequestResponse, ServiceError> {
    let request = supply_request::Entity::find_by_id(request_id)
        .one(txn)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Supply request {} not found", request_id)))?;

    if request.status.is_terminal() {
        return Err(ServiceError::Conflict(format!(
            "Supply request {} was already {}",
            request_id, request.status
        )));
    }

    let now = Utc::now();

    // Guarded transition: only a still-pending row is approved, so a
    // concurrent approve or reject loses cleanly.
    let result = supply_request::Entity::update_many()
        .col_expr(
            supply_request::Column::Status,
            Expr::value(SupplyRequestStatus::Approved),
        )
        .col_expr(supply_request::Column::ProcessedAt, Expr::value(Some(now)))
        .filter(supply_request::Column::Id.eq(request_id))
        .filter(supply_request::Column::Status.eq(SupplyRequestStatus::Pending))
        .exec(txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(ServiceError::Conflict(format!(
            "Supply request {} was processed concurrently",
            request_id
        )));
    }

    // Credit the store's stock. A store registered after this ingredient
    // was introduced may lack the row; approving then must fail so the
    // request stays pending.
    let credit = store_inventory::Entity::update_many()
        .col_expr(
            store_inventory::Column::Quantity,
            Expr::col(store_inventory::Column::Quantity).add(request.quantity),
        )
        .filter(store_inventory::Column::StoreId.eq(request.store_id))
        .filter(store_inventory::Column::IngredientId.eq(request.ingredient_id))
        .exec(txn)
        .await?;
    if credit.rows_affected == 0 {
        return Err(ServiceError::Conflict(format!(
            "Store {} has no inventory row for ingredient {}",
            request.store_id, request.ingredient_id
        )));
    }

    Ok(SupplyRequestResponse {
        id: request.id,
        store_id: request.store_id,
        ingredient_id: request.ingredient_id,
        quantity: request.quantity,
        status: SupplyRequestStatus::Approved,
        requested_at: request.requested_at,
        processed_at: Some(now),
    })
}

async fn load_store_names<C>(
    db: &C,
    requests: &[supply_request::Model],
) -> Result<HashMap<i64, String>, ServiceError>
where
    C: ConnectionTrait,
{
    let mut ids: Vec<i64> = requests.iter().map(|r| r.store_id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(store::Entity::find()
        .filter(store::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect())
}

async fn load_ingredients<C>(
    db: &C,
    requests: &[supply_request::Model],
) -> Result<HashMap<i64, (String, String)>, ServiceError>
where
    C: ConnectionTrait,
{
    let mut ids: Vec<i64> = requests.iter().map(|r| r.ingredient_id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(ingredient::Entity::find()
        .filter(ingredient::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|i| (i.id, (i.name, i.unit)))
        .collect())
}
