//! # Sandwich Orders API Main Entry Point
//!
//! Startup is sequenced so the HTTP listener only accepts traffic once the
//! database is connected, migrated, and seeded.

use migration::{Migrator, MigratorTrait};
use sandwich_orders::{
    config::ConfigLoader, db, seeds::seed_demo_data, server::run_server, telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(config_json) = config.as_json() {
        tracing::debug!(config = %config_json, "Effective configuration");
    }

    // Connect, migrate, and seed before serving any traffic.
    let db = db::init_pool(&config).await?;
    db::health_check(&db).await?;
    Migrator::up(&db, None).await?;
    tracing::info!("Database initialized");

    seed_demo_data(&db).await?;

    run_server(config, db).await
}
