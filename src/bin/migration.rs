use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use grillpoint_api::migrator::Migrator;

#[derive(Parser)]
#[command(
    name = "migration",
    about = "Manage the grillpoint-api database schema",
    version
)]
struct Cli {
    /// Database connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply all pending migrations
    Up,
    /// Roll back the most recent migrations
    Down {
        /// Number of migrations to roll back
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and re-apply all migrations
    Fresh,
    /// Show the status of each migration
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let database_url = match cli.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL")
            .context("set DATABASE_URL or pass --database-url")?,
    };

    info!("Connecting to database: {}", database_url);

    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true);

    let db = Database::connect(options).await?;

    match cli.command {
        Commands::Up => {
            info!("Applying pending migrations");
            Migrator::up(&db, None).await?;
            info!("Migrations applied successfully");
        }
        Commands::Down { steps } => {
            info!("Rolling back {} migration(s)", steps);
            Migrator::down(&db, Some(steps)).await?;
            info!("Rollback completed successfully");
        }
        Commands::Fresh => {
            info!("Rebuilding schema from scratch");
            Migrator::fresh(&db).await?;
            info!("Schema rebuilt successfully");
        }
        Commands::Status => {
            Migrator::status(&db).await?;
        }
    }

    Ok(())
}
