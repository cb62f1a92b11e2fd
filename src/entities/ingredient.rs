use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient master data, shared across stores
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// Unit of measure ("ea", "g", "ml")
    pub unit: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_line::Entity")]
    RecipeLines,
    #[sea_orm(has_many = "super::option_recipe_line::Entity")]
    OptionRecipeLines,
    #[sea_orm(has_many = "super::store_inventory::Entity")]
    StoreInventory,
    #[sea_orm(has_many = "super::supply_request::Entity")]
    SupplyRequests,
}

impl Related<super::recipe_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeLines.def()
    }
}

impl Related<super::option_recipe_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OptionRecipeLines.def()
    }
}

impl Related<super::store_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreInventory.def()
    }
}

impl Related<super::supply_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
