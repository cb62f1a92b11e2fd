pub mod ingredient;
pub mod menu;
pub mod menu_option;
pub mod option_recipe_line;
pub mod order;
pub mod order_detail;
pub mod order_detail_option;
pub mod recipe_line;
pub mod sale_record;
pub mod store;
pub mod store_inventory;
pub mod supply_request;
