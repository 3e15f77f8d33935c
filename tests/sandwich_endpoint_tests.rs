//! Integration tests for the /sandwiches endpoints.

use anyhow::Result;
use axum::http::StatusCode;
use sandwich_orders::seeds::seed_demo_data;
use serde_json::json;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{expect_json, get, post_json, setup_test_app};

#[tokio::test]
async fn list_sandwiches_returns_all_rows() -> Result<()> {
    let (app, db) = setup_test_app().await?;
    seed_demo_data(&db).await?;

    let response = get(&app, "/sandwiches").await?;
    let body = expect_json(response, StatusCode::OK).await?;

    let rows = body.as_array().expect("sandwiches body is an array");
    assert_eq!(rows.len(), 5);
    assert!(
        rows.iter()
            .any(|row| row["sandwich_name"] == "Turkey Club" && row["bread_type"] == "Sourdough")
    );
    Ok(())
}

#[tokio::test]
async fn created_sandwich_appears_in_listing_with_fresh_id() -> Result<()> {
    let (app, db) = setup_test_app().await?;
    seed_demo_data(&db).await?;

    let response = post_json(
        &app,
        "/sandwiches",
        json!({"sandwich_name": "Pastrami on Rye", "bread_type": "Rye"}),
    )
    .await?;
    let body = expect_json(response, StatusCode::CREATED).await?;

    let new_id = body["id"].as_i64().expect("id is an integer");
    assert_eq!(new_id, 6);

    let listing = get(&app, "/sandwiches").await?;
    let rows = expect_json(listing, StatusCode::OK).await?;
    let created = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["id"].as_i64() == Some(new_id))
        .expect("created sandwich present in listing");
    assert_eq!(created["sandwich_name"], "Pastrami on Rye");
    assert_eq!(created["bread_type"], "Rye");
    Ok(())
}

#[tokio::test]
async fn create_sandwich_rejects_missing_bread_type() -> Result<()> {
    let (app, _db) = setup_test_app().await?;

    let response = post_json(&app, "/sandwiches", json!({"sandwich_name": "BLT"})).await?;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await?;

    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["message"], "Missing fields: bread_type");
    Ok(())
}

#[tokio::test]
async fn create_sandwich_rejects_empty_bread_type() -> Result<()> {
    let (app, _db) = setup_test_app().await?;

    let response = post_json(
        &app,
        "/sandwiches",
        json!({"sandwich_name": "BLT", "bread_type": ""}),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
