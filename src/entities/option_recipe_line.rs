use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Extra ingredient consumption added when an option is selected
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "option_recipe_lines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub option_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: i64,
    pub delta_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_option::Entity",
        from = "Column::OptionId",
        to = "super::menu_option::Column::Id"
    )]
    MenuOption,
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient::Column::Id"
    )]
    Ingredient,
}

impl Related<super::menu_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuOption.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
