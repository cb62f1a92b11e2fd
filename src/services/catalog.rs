use crate::{
    db::DbPool,
    entities::{ingredient, menu, menu_option, order, order::OrderStatus, order_detail},
    errors::ServiceError,
};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

use super::load_menu_names;

/// How many entries the top-menus board shows by default.
pub const DEFAULT_TOP_MENUS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    /// Absent when the menu has no set variant.
    pub set_price: Option<Decimal>,
    pub category: String,
    pub description: Option<String>,
}

impl From<menu::Model> for MenuResponse {
    fn from(model: menu::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            set_price: model.set_price,
            category: model.category,
            description: model.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuOptionResponse {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    pub price_delta: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopMenuEntry {
    pub menu_id: i64,
    pub name: String,
    pub sold_quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    pub unit: String,
}

/// Read-side service for the shared menu and ingredient catalog.
#[derive(Clone)]
pub struct CatalogService {
    db_pool: Arc<DbPool>,
}

impl CatalogService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Orderable menus for the kiosk. Sold-out menus are hidden.
    #[instrument(skip(self))]
    pub async fn list_menus(&self) -> Result<Vec<MenuResponse>, ServiceError> {
        let db = &*self.db_pool;

        let menus = menu::Entity::find()
            .filter(menu::Column::IsSoldOut.eq(false))
            .order_by_asc(menu::Column::Category)
            .order_by_asc(menu::Column::Name)
            .all(db)
            .await?;

        Ok(menus.into_iter().map(MenuResponse::from).collect())
    }

    /// Active options for one menu, in display order.
    #[instrument(skip(self), fields(menu_id = menu_id))]
    pub async fn list_options(&self, menu_id: i64) -> Result<Vec<MenuOptionResponse>, ServiceError> {
        let db = &*self.db_pool;

        menu::Entity::find_by_id(menu_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Menu {} not found", menu_id)))?;

        let options = menu_option::Entity::find()
            .filter(menu_option::Column::MenuId.eq(menu_id))
            .filter(menu_option::Column::IsActive.eq(true))
            .order_by_asc(menu_option::Column::SortOrder)
            .order_by_asc(menu_option::Column::Id)
            .all(db)
            .await?;

        Ok(options
            .into_iter()
            .map(|o| MenuOptionResponse {
                id: o.id,
                menu_id: o.menu_id,
                name: o.name,
                price_delta: o.price_delta,
            })
            .collect())
    }

    /// Best sellers across the whole franchise, by units sold.
    #[instrument(skip(self))]
    pub async fn top_menus(&self, limit: usize) -> Result<Vec<TopMenuEntry>, ServiceError> {
        let db = &*self.db_pool;

        let mut sold: Vec<(i64, Option<i64>)> = order_detail::Entity::find()
            .join(JoinType::InnerJoin, order_detail::Relation::Order.def())
            .filter(order::Column::Status.is_in([OrderStatus::Waiting, OrderStatus::Completed]))
            .select_only()
            .column(order_detail::Column::MenuId)
            .column_as(order_detail::Column::Quantity.sum(), "sold_quantity")
            .group_by(order_detail::Column::MenuId)
            .into_tuple()
            .all(db)
            .await?;

        sold.sort_by(|a, b| {
            b.1.unwrap_or(0)
                .cmp(&a.1.unwrap_or(0))
                .then_with(|| a.0.cmp(&b.0))
        });
        sold.truncate(limit);

        let names = load_menu_names(db, sold.iter().map(|(menu_id, _)| *menu_id)).await?;

        Ok(sold
            .into_iter()
            .map(|(menu_id, quantity)| TopMenuEntry {
                menu_id,
                name: names
                    .get(&menu_id)
                    .cloned()
                    .unwrap_or_else(|| format!("menu {}", menu_id)),
                sold_quantity: quantity.unwrap_or(0),
            })
            .collect())
    }

    /// Every ingredient the warehouse stocks, alphabetical.
    #[instrument(skip(self))]
    pub async fn list_ingredients(&self) -> Result<Vec<IngredientResponse>, ServiceError> {
        let db = &*self.db_pool;

        let ingredients = ingredient::Entity::find()
            .order_by_asc(ingredient::Column::Name)
            .all(db)
            .await?;

        Ok(ingredients
            .into_iter()
            .map(|i| IngredientResponse {
                id: i.id,
                name: i.name,
                unit: i.unit,
            })
            .collect())
    }
}
