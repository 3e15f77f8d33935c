//! Demo data seeding functionality
//!
//! Inserts a fixed set of sample sandwiches, users, and orders into empty
//! tables at startup. Each table is seeded only when its row count is zero,
//! which makes the whole pass idempotent.

use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::repositories::{
    CreateOrderRequest, CreateSandwichRequest, CreateUserRequest, OrderRepository,
    SandwichRepository, UserRepository,
};

/// Seeds sandwiches, users, and orders if their tables are empty.
///
/// The two demo orders reference the first two seeded sandwiches and users
/// by position, so sandwich and user seeding must run first.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    seed_sandwiches(db).await?;
    seed_users(db).await?;
    seed_orders(db).await?;

    log::info!("Demo data seeding completed");
    Ok(())
}

async fn seed_sandwiches(db: &DatabaseConnection) -> Result<()> {
    let repo = SandwichRepository::new(db);

    if repo.count().await? > 0 {
        log::info!("Sandwiches table is not empty, skipping seed");
        return Ok(());
    }

    let sandwiches = [
        ("Turkey Club", "Sourdough"),
        ("Ham and Swiss", "Rye"),
        ("Veggie Delight", "Whole Wheat"),
        ("Roast Beef", "Baguette"),
        ("Chicken Caesar Wrap", "Tortilla"),
    ];

    for (sandwich_name, bread_type) in sandwiches {
        repo.create(CreateSandwichRequest {
            sandwich_name: sandwich_name.to_string(),
            bread_type: bread_type.to_string(),
        })
        .await?;
    }

    log::info!("Seeded {} demo sandwiches", sandwiches.len());
    Ok(())
}

async fn seed_users(db: &DatabaseConnection) -> Result<()> {
    let repo = UserRepository::new(db);

    if repo.count().await? > 0 {
        log::info!("Users table is not empty, skipping seed");
        return Ok(());
    }

    let users = [
        ("John Doe", "john.doe@example.com", "employee"),
        ("Jane Smith", "jane.smith@example.com", "manager"),
    ];

    for (name, email, role) in users {
        repo.create(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        })
        .await?;
    }

    log::info!("Seeded {} demo users", users.len());
    Ok(())
}

async fn seed_orders(db: &DatabaseConnection) -> Result<()> {
    let repo = OrderRepository::new(db);

    if repo.count().await? > 0 {
        log::info!("Orders table is not empty, skipping seed");
        return Ok(());
    }

    // References the first two sandwiches and users inserted above.
    let orders = [(1, 1, "2025-04-01"), (2, 2, "2025-04-02")];

    for (sandwich_id, user_id, order_date) in orders {
        repo.create(CreateOrderRequest {
            sandwich_id,
            user_id,
            order_date: order_date.to_string(),
        })
        .await?;
    }

    log::info!("Seeded {} demo orders", orders.len());
    Ok(())
}
