use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Franchise store entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    /// Contact number, digits only; doubles as the login credential
    pub contact: String,
    pub address: String,
    pub manager_name: String,
    pub is_active: bool,
    /// Per-store order-number sequence, bumped inside the placing transaction
    pub next_order_seq: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::store_inventory::Entity")]
    StoreInventory,
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    #[sea_orm(has_many = "super::supply_request::Entity")]
    SupplyRequests,
}

impl Related<super::store_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreInventory.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::supply_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
