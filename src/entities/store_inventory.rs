use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-store on-hand quantity for one ingredient. The quantity column is the
/// shared mutable counter contended by every concurrent order and every
/// replenishment approval against that store; all mutation goes through
/// relative updates, never read-modify-write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "store_inventory")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: i64,
    pub quantity: i32,
    pub min_threshold: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id"
    )]
    Store,
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient::Column::Id"
    )]
    Ingredient,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A row is low on stock once quantity falls to or below its threshold.
    pub fn is_low(&self) -> bool {
        self.quantity <= self.min_threshold
    }
}
