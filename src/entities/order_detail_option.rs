use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Option selected on one order line. Option quantity is fixed at 1 per
/// selection in this design.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_detail_options")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_detail_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub option_id: i64,
    pub option_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_detail::Entity",
        from = "Column::OrderDetailId",
        to = "super::order_detail::Column::Id"
    )]
    OrderDetail,
    #[sea_orm(
        belongs_to = "super::menu_option::Entity",
        from = "Column::OptionId",
        to = "super::menu_option::Column::Id"
    )]
    MenuOption,
}

impl Related<super::order_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDetail.def()
    }
}

impl Related<super::menu_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
