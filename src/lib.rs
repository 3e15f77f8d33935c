//! # Sandwich Orders API Library
//!
//! This library provides the core functionality for the Sandwich Orders API
//! service, including handlers, models, repositories, seeding, and server
//! configuration.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod telemetry;
pub use migration;
