//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean API for data access.

pub mod order;
pub mod sandwich;
pub mod user;
pub mod vendor;

pub use order::{CreateOrderRequest, OrderRepository, OrderRow};
pub use sandwich::{CreateSandwichRequest, SandwichRepository};
pub use user::{CreateUserRequest, UserRepository};
pub use vendor::{CreateVendorRequest, VendorRepository};
