//! Seed data script - populates the database with realistic demo data
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 14 ingredients with stocking units
//! - 9 menu items (burgers with set variants, sides, drinks, dessert)
//! - Per-menu options and their extra ingredient consumption
//! - Recipes wiring every menu to its ingredients
//! - One demo store with seeded inventory

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use grillpoint_api::entities::{ingredient, menu, menu_option, option_recipe_line, recipe_line};
use grillpoint_api::migrator::Migrator;
use grillpoint_api::services::stores::{RegisterStoreRequest, StoreService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Grillpoint API Seed Data ===");

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://grillpoint.db?mode=rwc".to_string());

    let mut options = ConnectOptions::new(database_url.clone());
    options
        .max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10));

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(options).await?;

    info!("Ensuring schema is up to date...");
    Migrator::up(&db, None).await?;

    info!("Creating ingredients...");
    let ingredients = create_ingredients(&db).await?;
    info!("  Created {} ingredients", ingredients.len());

    info!("Creating menus...");
    let menus = create_menus(&db).await?;
    info!("  Created {} menus", menus.len());

    info!("Creating menu options...");
    let option_count = create_options(&db, &menus, &ingredients).await?;
    info!("  Created {} options", option_count);

    info!("Creating recipes...");
    let recipe_count = create_recipes(&db, &menus, &ingredients).await?;
    info!("  Created {} recipe lines", recipe_count);

    info!("Registering demo store...");
    let store_service = StoreService::new(Arc::new(db), None, 100, 20);
    let store = store_service
        .register_store(RegisterStoreRequest {
            code: "DOWNTOWN".to_string(),
            name: "Grillpoint Downtown".to_string(),
            contact: "02-555-0101".to_string(),
            address: "11 Market Street".to_string(),
            manager_name: "Jordan Reyes".to_string(),
        })
        .await?;
    info!("  Registered store {} ({})", store.name, store.code);

    info!("=== Seed Data Complete ===");
    info!("");
    info!("Try these API calls:");
    info!("  curl http://localhost:8080/api/v1/menus");
    info!("  curl http://localhost:8080/api/v1/stores");
    info!("  curl http://localhost:8080/api/v1/stores/{}/inventory", store.id);
    info!("");
    info!("Or explore interactively at: http://localhost:8080/swagger-ui");

    Ok(())
}

async fn create_ingredients(db: &DatabaseConnection) -> anyhow::Result<HashMap<String, i64>> {
    let ingredients_data = vec![
        ("Burger Bun", "ea"),
        ("Beef Patty", "ea"),
        ("Chicken Patty", "ea"),
        ("Cheddar Slice", "ea"),
        ("Bacon Strip", "ea"),
        ("Lettuce", "g"),
        ("Tomato Slice", "ea"),
        ("Onion", "g"),
        ("Burger Sauce", "ml"),
        ("Fries", "g"),
        ("Mozzarella Stick", "ea"),
        ("Cola Syrup", "ml"),
        ("Lemonade Concentrate", "ml"),
        ("Ice Cream Mix", "ml"),
    ];

    let mut ids = HashMap::new();
    for (name, unit) in ingredients_data {
        let model = ingredient::ActiveModel {
            name: Set(name.to_string()),
            unit: Set(unit.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(model.name.clone(), model.id);
    }

    Ok(ids)
}

async fn create_menus(db: &DatabaseConnection) -> anyhow::Result<HashMap<String, i64>> {
    let menus_data: Vec<(&str, Decimal, Option<Decimal>, &str, &str)> = vec![
        (
            "Classic Burger",
            dec!(5.90),
            Some(dec!(8.40)),
            "Burger",
            "Flame-grilled beef patty with cheddar, lettuce, tomato, and house sauce.",
        ),
        (
            "Double Cheeseburger",
            dec!(7.90),
            Some(dec!(10.40)),
            "Burger",
            "Two beef patties, double cheddar, grilled onion.",
        ),
        (
            "Crispy Chicken Burger",
            dec!(6.40),
            Some(dec!(8.90)),
            "Burger",
            "Buttermilk-fried chicken patty with lettuce and house sauce.",
        ),
        (
            "Bacon Deluxe",
            dec!(8.40),
            Some(dec!(10.90)),
            "Burger",
            "Beef patty stacked with crispy bacon, cheddar, and tomato.",
        ),
        ("French Fries", dec!(2.50), None, "Side", "Skin-on fries, salted."),
        (
            "Mozzarella Sticks",
            dec!(3.90),
            None,
            "Side",
            "Four breaded mozzarella sticks with dip.",
        ),
        ("Cola", dec!(1.90), None, "Drink", "Fountain cola over ice."),
        ("Lemonade", dec!(2.40), None, "Drink", "Still lemonade, freshly mixed."),
        ("Vanilla Sundae", dec!(2.90), None, "Dessert", "Soft-serve vanilla sundae."),
    ];

    let mut ids = HashMap::new();
    for (name, price, set_price, category, description) in menus_data {
        let model = menu::ActiveModel {
            name: Set(name.to_string()),
            price: Set(price),
            set_price: Set(set_price),
            category: Set(category.to_string()),
            description: Set(Some(description.to_string())),
            is_sold_out: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;
        ids.insert(model.name.clone(), model.id);
    }

    Ok(ids)
}

async fn create_options(
    db: &DatabaseConnection,
    menus: &HashMap<String, i64>,
    ingredients: &HashMap<String, i64>,
) -> anyhow::Result<usize> {
    // (menu, option, price delta, sort order, extra consumption)
    let options_data: Vec<(&str, &str, Decimal, i32, Vec<(&str, i32)>)> = vec![
        ("Classic Burger", "Extra Patty", dec!(2.00), 1, vec![("Beef Patty", 1)]),
        ("Classic Burger", "Extra Cheese", dec!(0.50), 2, vec![("Cheddar Slice", 1)]),
        ("Double Cheeseburger", "Extra Cheese", dec!(0.50), 1, vec![("Cheddar Slice", 1)]),
        (
            "Crispy Chicken Burger",
            "Extra Patty",
            dec!(2.20),
            1,
            vec![("Chicken Patty", 1)],
        ),
        ("Bacon Deluxe", "Extra Bacon", dec!(1.00), 1, vec![("Bacon Strip", 2)]),
        ("Cola", "Size Up", dec!(0.60), 1, vec![("Cola Syrup", 15)]),
        ("Lemonade", "Size Up", dec!(0.60), 1, vec![("Lemonade Concentrate", 20)]),
    ];

    let mut count = 0;
    for (menu_name, option_name, price_delta, sort_order, consumption) in options_data {
        let menu_id = *menus
            .get(menu_name)
            .with_context(|| format!("menu {} missing", menu_name))?;
        let option = menu_option::ActiveModel {
            menu_id: Set(menu_id),
            name: Set(option_name.to_string()),
            price_delta: Set(price_delta),
            is_active: Set(true),
            sort_order: Set(sort_order),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for (ingredient_name, delta_quantity) in consumption {
            let ingredient_id = *ingredients
                .get(ingredient_name)
                .with_context(|| format!("ingredient {} missing", ingredient_name))?;
            option_recipe_line::ActiveModel {
                option_id: Set(option.id),
                ingredient_id: Set(ingredient_id),
                delta_quantity: Set(delta_quantity),
            }
            .insert(db)
            .await?;
        }
        count += 1;
    }

    Ok(count)
}

async fn create_recipes(
    db: &DatabaseConnection,
    menus: &HashMap<String, i64>,
    ingredients: &HashMap<String, i64>,
) -> anyhow::Result<usize> {
    let recipes_data: Vec<(&str, Vec<(&str, i32)>)> = vec![
        (
            "Classic Burger",
            vec![
                ("Burger Bun", 1),
                ("Beef Patty", 1),
                ("Cheddar Slice", 1),
                ("Lettuce", 20),
                ("Tomato Slice", 2),
                ("Onion", 10),
                ("Burger Sauce", 15),
            ],
        ),
        (
            "Double Cheeseburger",
            vec![
                ("Burger Bun", 1),
                ("Beef Patty", 2),
                ("Cheddar Slice", 2),
                ("Lettuce", 20),
                ("Onion", 10),
                ("Burger Sauce", 20),
            ],
        ),
        (
            "Crispy Chicken Burger",
            vec![
                ("Burger Bun", 1),
                ("Chicken Patty", 1),
                ("Lettuce", 20),
                ("Burger Sauce", 15),
            ],
        ),
        (
            "Bacon Deluxe",
            vec![
                ("Burger Bun", 1),
                ("Beef Patty", 1),
                ("Bacon Strip", 2),
                ("Cheddar Slice", 1),
                ("Lettuce", 20),
                ("Tomato Slice", 2),
                ("Burger Sauce", 15),
            ],
        ),
        ("French Fries", vec![("Fries", 120)]),
        ("Mozzarella Sticks", vec![("Mozzarella Stick", 4)]),
        ("Cola", vec![("Cola Syrup", 30)]),
        ("Lemonade", vec![("Lemonade Concentrate", 40)]),
        ("Vanilla Sundae", vec![("Ice Cream Mix", 90)]),
    ];

    let mut count = 0;
    for (menu_name, lines) in recipes_data {
        let menu_id = *menus
            .get(menu_name)
            .with_context(|| format!("menu {} missing", menu_name))?;
        for (ingredient_name, required_quantity) in lines {
            let ingredient_id = *ingredients
                .get(ingredient_name)
                .with_context(|| format!("ingredient {} missing", ingredient_name))?;
            recipe_line::ActiveModel {
                menu_id: Set(menu_id),
                ingredient_id: Set(ingredient_id),
                required_quantity: Set(required_quantity),
            }
            .insert(db)
            .await?;
            count += 1;
        }
    }

    Ok(count)
}
