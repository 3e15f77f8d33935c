//! Database migrations for the Sandwich Orders API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_04_01_000001_create_sandwiches;
mod m2025_04_01_000002_create_users;
mod m2025_04_01_000003_create_vendors;
mod m2025_04_01_000004_create_vendor_sandwiches;
mod m2025_04_01_000005_create_sandwich_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_04_01_000001_create_sandwiches::Migration),
            Box::new(m2025_04_01_000002_create_users::Migration),
            Box::new(m2025_04_01_000003_create_vendors::Migration),
            Box::new(m2025_04_01_000004_create_vendor_sandwiches::Migration),
            Box::new(m2025_04_01_000005_create_sandwich_orders::Migration),
        ]
    }
}
