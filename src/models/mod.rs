//! # Data Models
//!
//! This module contains all the SeaORM entity models used throughout the
//! Sandwich Orders API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod sandwich;
pub mod sandwich_order;
pub mod user;
pub mod vendor;
pub mod vendor_sandwich;

pub use sandwich::Entity as Sandwich;
pub use sandwich_order::Entity as SandwichOrder;
pub use user::Entity as User;
pub use vendor::Entity as Vendor;
pub use vendor_sandwich::Entity as VendorSandwich;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "sandwich-orders".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
