use crate::{
    db::DbPool,
    entities::{ingredient, store_inventory},
    errors::ServiceError,
};
use sea_orm::{sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

use super::ensure_store_exists;

/// One ingredient's stock level at a store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryLevelResponse {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub unit: String,
    pub quantity: i32,
    pub min_threshold: i32,
    /// True when quantity is at or below the reorder threshold.
    pub low: bool,
}

/// Read-side service for per-store ingredient stock.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Full stock listing for a store, alphabetical by ingredient.
    #[instrument(skip(self), fields(store_id = store_id))]
    pub async fn store_inventory(
        &self,
        store_id: i64,
    ) -> Result<Vec<InventoryLevelResponse>, ServiceError> {
        let db = &*self.db_pool;
        ensure_store_exists(db, store_id).await?;

        let rows = store_inventory::Entity::find()
            .filter(store_inventory::Column::StoreId.eq(store_id))
            .all(db)
            .await?;

        compose_levels(db, rows).await
    }

    /// Rows at or below their reorder threshold, for the low-stock
    /// banner on the store console.
    #[instrument(skip(self), fields(store_id = store_id))]
    pub async fn low_stock(
        &self,
        store_id: i64,
    ) -> Result<Vec<InventoryLevelResponse>, ServiceError> {
        let db = &*self.db_pool;
        ensure_store_exists(db, store_id).await?;

        let rows = store_inventory::Entity::find()
            .filter(store_inventory::Column::StoreId.eq(store_id))
            .filter(
                Expr::col(store_inventory::Column::Quantity)
                    .lte(Expr::col(store_inventory::Column::MinThreshold)),
            )
            .all(db)
            .await?;

        compose_levels(db, rows).await
    }
}

async fn compose_levels<C>(
    db: &C,
    rows: Vec<store_inventory::Model>,
) -> Result<Vec<InventoryLevelResponse>, ServiceError>
where
    C: ConnectionTrait,
{
    let mut ids: Vec<i64> = rows.iter().map(|r| r.ingredient_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let ingredients: HashMap<i64, ingredient::Model> = if ids.is_empty() {
        HashMap::new()
    } else {
        ingredient::Entity::find()
            .filter(ingredient::Column::Id.is_in(ids))
            .all(db)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect()
    };

    let mut levels: Vec<InventoryLevelResponse> = rows
        .into_iter()
        .map(|row| {
            let low = row.is_low();
            let (name, unit) = ingredients
                .get(&row.ingredient_id)
                .map(|i| (i.name.clone(), i.unit.clone()))
                .unwrap_or_else(|| (format!("ingredient {}", row.ingredient_id), String::new()));
            InventoryLevelResponse {
                ingredient_id: row.ingredient_id,
                ingredient_name: name,
                unit,
                quantity: row.quantity,
                min_threshold: row.min_threshold,
                low,
            }
        })
        .collect();
    levels.sort_by(|a, b| a.ingredient_name.cmp(&b.ingredient_name));

    Ok(levels)
}
