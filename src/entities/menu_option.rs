use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Selectable add-on for a menu item (extra patty, cheese, size-up)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    /// Added to the line's unit price when the option is selected
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price_delta: Decimal,
    pub is_active: bool,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu::Entity",
        from = "Column::MenuId",
        to = "super::menu::Column::Id"
    )]
    Menu,
    #[sea_orm(has_many = "super::option_recipe_line::Entity")]
    OptionRecipeLines,
    #[sea_orm(has_many = "super::order_detail_option::Entity")]
    OrderDetailOptions,
}

impl Related<super::menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Menu.def()
    }
}

impl Related<super::option_recipe_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OptionRecipeLines.def()
    }
}

impl Related<super::order_detail_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetailOptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
