//! Database seeding functionality
//!
//! This module provides functionality to seed the database with demo data
//! when the application starts against an empty database.

pub mod demo;

pub use demo::seed_demo_data;
