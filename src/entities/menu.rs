use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu item master data, shared by every store
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    /// Price of the set variant; NULL means the menu has no set variant
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub set_price: Option<Decimal>,
    pub category: String,
    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub is_sold_out: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::menu_option::Entity")]
    MenuOptions,
    #[sea_orm(has_many = "super::recipe_line::Entity")]
    RecipeLines,
    #[sea_orm(has_many = "super::order_detail::Entity")]
    OrderDetails,
}

impl Related<super::menu_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuOptions.def()
    }
}

impl Related<super::recipe_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeLines.def()
    }
}

impl Related<super::order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
