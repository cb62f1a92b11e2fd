use crate::{
    db::DbPool,
    entities::{ingredient, order, order::OrderStatus, store, store_inventory},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionError, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request/Response types for the store service
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterStoreRequest {
    /// Short uppercase identifier; becomes the order-number prefix.
    #[validate(length(min = 2, max = 32, message = "Store code must be 2-32 characters"))]
    pub code: String,
    #[validate(length(min = 1, message = "Store name is required"))]
    pub name: String,
    /// Phone number in any format; stored digits-only.
    #[validate(length(min = 9, message = "Contact number is required"))]
    pub contact: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Manager name is required"))]
    pub manager_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StoreLoginRequest {
    #[validate(length(min = 1, message = "Store code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "Contact number is required"))]
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub contact: String,
    pub address: String,
    pub manager_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<store::Model> for StoreResponse {
    fn from(model: store::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            contact: model.contact,
            address: model.address,
            manager_name: model.manager_name,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreRankingEntry {
    pub rank: u32,
    pub store_id: i64,
    pub code: String,
    pub name: String,
    pub total_sales: Decimal,
}

/// Service for franchise store registration and headquarters views.
#[derive(Clone)]
pub struct StoreService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
    seed_inventory_quantity: i32,
    seed_inventory_threshold: i32,
}

impl StoreService {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Option<Arc<EventSender>>,
        seed_inventory_quantity: i32,
        seed_inventory_threshold: i32,
    ) -> Self {
        Self {
            db_pool,
            event_sender,
            seed_inventory_quantity,
            seed_inventory_threshold,
        }
    }

    /// Registers a new franchise store and seeds one inventory row per
    /// known ingredient, all in one transaction.
    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn register_store(
        &self,
        request: RegisterStoreRequest,
    ) -> Result<StoreResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let code = normalize_code(&request.code)?;
        let contact = normalize_contact(&request.contact)?;

        let db = &*self.db_pool;

        if store::Entity::find()
            .filter(store::Column::Code.eq(code.clone()))
            .one(db)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!(
                "Store code '{}' is already registered",
                code
            )));
        }

        let seed_quantity = self.seed_inventory_quantity;
        let seed_threshold = self.seed_inventory_threshold;
        let name = request.name.trim().to_string();
        let address = request.address.trim().to_string();
        let manager_name = request.manager_name.trim().to_string();

        let model = db
            .transaction::<_, store::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    register_store_in_txn(
                        txn,
                        code,
                        name,
                        contact,
                        address,
                        manager_name,
                        seed_quantity,
                        seed_threshold,
                    )
                    .await
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(err) => ServiceError::DatabaseError(err),
                TransactionError::Transaction(err) => err,
            })?;

        info!(store_id = model.id, code = %model.code, "Store registered");

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::StoreRegistered {
                    store_id: model.id,
                    code: model.code.clone(),
                })
                .await
            {
                warn!(error = %e, store_id = model.id, "Failed to send store registered event");
            }
        }

        Ok(model.into())
    }

    /// Store-console login: code plus contact number, digits compared
    /// regardless of formatting. Only active stores can sign in.
    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn login(&self, request: StoreLoginRequest) -> Result<StoreResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let code = request.code.trim().to_ascii_uppercase();
        let contact = digits_of(&request.contact);

        let db = &*self.db_pool;

        let store = store::Entity::find()
            .filter(store::Column::Code.eq(code))
            .filter(store::Column::Contact.eq(contact))
            .filter(store::Column::IsActive.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::InvalidInput(
                    "Store code and contact number do not match".to_string(),
                )
            })?;

        info!(store_id = store.id, "Store login succeeded");

        Ok(store.into())
    }

    /// Active stores, alphabetical.
    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<StoreResponse>, ServiceError> {
        let db = &*self.db_pool;

        let stores = store::Entity::find()
            .filter(store::Column::IsActive.eq(true))
            .order_by_asc(store::Column::Name)
            .all(db)
            .await?;

        Ok(stores.into_iter().map(StoreResponse::from).collect())
    }

    /// Stores ranked by total sales, highest first. Stores with no
    /// orders rank last with a zero total.
    #[instrument(skip(self))]
    pub async fn store_rankings(&self) -> Result<Vec<StoreRankingEntry>, ServiceError> {
        let db = &*self.db_pool;

        let stores = store::Entity::find()
            .filter(store::Column::IsActive.eq(true))
            .all(db)
            .await?;

        let sums: Vec<(i64, Option<Decimal>)> = order::Entity::find()
            .select_only()
            .column(order::Column::StoreId)
            .column_as(order::Column::TotalAmount.sum(), "total_sales")
            .filter(order::Column::Status.is_in([OrderStatus::Waiting, OrderStatus::Completed]))
            .group_by(order::Column::StoreId)
            .into_tuple()
            .all(db)
            .await?;
        let totals: HashMap<i64, Decimal> = sums
            .into_iter()
            .map(|(store_id, total)| (store_id, total.unwrap_or(Decimal::ZERO)))
            .collect();

        let mut entries: Vec<StoreRankingEntry> = stores
            .into_iter()
            .map(|s| StoreRankingEntry {
                rank: 0,
                total_sales: totals.get(&s.id).copied().unwrap_or(Decimal::ZERO),
                store_id: s.id,
                code: s.code,
                name: s.name,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.total_sales
                .cmp(&a.total_sales)
                .then_with(|| a.name.cmp(&b.name))
        });
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.rank = idx as u32 + 1;
        }

        Ok(entries)
    }
}

#[allow(clippy::too_many_arguments)]
async fn register_store_in_txn(
    txn: &DatabaseTransaction,
    code: String,
    name: String,
    contact: String,
    address: String,
    manager_name: String,
    seed_quantity: i32,
    seed_threshold: i32,
) -> Result<store::Model, ServiceError> {
    let model = store::ActiveModel {
        code: Set(code),
        name: Set(name),
        contact: Set(contact),
        address: Set(address),
        manager_name: Set(manager_name),
        is_active: Set(true),
        next_order_seq: Set(0),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // New stores start with a stocked shelf for every known ingredient.
    let ingredients = ingredient::Entity::find().all(txn).await?;
    for ingredient in ingredients {
        store_inventory::ActiveModel {
            store_id: Set(model.id),
            ingredient_id: Set(ingredient.id),
            quantity: Set(seed_quantity),
            min_threshold: Set(seed_threshold),
        }
        .insert(txn)
        .await?;
    }

    Ok(model)
}

/// Uppercases the code and rejects anything that would not survive as
/// an order-number prefix.
fn normalize_code(raw: &str) -> Result<String, ServiceError> {
    let code = raw.trim().to_ascii_uppercase();
    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ServiceError::InvalidInput(
            "Store code may only contain letters, digits and hyphens".to_string(),
        ));
    }
    Ok(code)
}

fn normalize_contact(raw: &str) -> Result<String, ServiceError> {
    let contact = digits_of(raw);
    if contact.len() < 9 {
        return Err(ServiceError::InvalidInput(
            "Contact number must contain at least 9 digits".to_string(),
        ));
    }
    Ok(contact)
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_uppercased_and_charset_checked() {
        assert_eq!(normalize_code("gangnam").unwrap(), "GANGNAM");
        assert_eq!(normalize_code(" br-02 ").unwrap(), "BR-02");
        assert!(normalize_code("bad code").is_err());
        assert!(normalize_code("세종").is_err());
    }

    #[test]
    fn contact_keeps_digits_only() {
        assert_eq!(normalize_contact("010-1234-5678").unwrap(), "01012345678");
        assert_eq!(normalize_contact("(02) 555 0199").unwrap(), "025550199");
        assert!(normalize_contact("123").is_err());
    }
}
