//! Test utilities for database and router testing.
//!
//! This module provides helpers to set up in-memory SQLite databases with
//! migrations applied, and to drive the application router in-process.

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use migration::{Migrator, MigratorTrait};
use sandwich_orders::server::{AppState, create_app};
use sea_orm::{Database, DatabaseConnection};
use tower::ServiceExt;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the application router over a fresh in-memory database.
#[allow(dead_code)]
pub async fn setup_test_app() -> Result<(Router, DatabaseConnection)> {
    let db = setup_test_db().await?;
    let app = create_app(AppState { db: db.clone() });
    Ok((app, db))
}

/// Sends a GET request to the app and returns the response.
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> Result<Response<Body>> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    Ok(response)
}

/// Sends a POST request with a JSON body to the app and returns the response.
#[allow(dead_code)]
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> Result<Response<Body>> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
        )
        .await?;
    Ok(response)
}

/// Reads a response body into a JSON value.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Asserts the response status and returns the parsed JSON body.
#[allow(dead_code)]
pub async fn expect_json(
    response: Response<Body>,
    expected_status: StatusCode,
) -> Result<serde_json::Value> {
    assert_eq!(response.status(), expected_status);
    body_json(response).await
}
