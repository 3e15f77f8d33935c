//! # Tests for Handlers
//!
//! This module contains unit tests for API handlers. Validation paths are
//! exercised against a default (disconnected) database connection since they
//! reject before any query is issued.

use crate::handlers::orders::{CreateOrderRequestDto, create_order};
use crate::handlers::root;
use crate::handlers::sandwiches::{CreateSandwichRequestDto, create_sandwich};
use crate::handlers::vendors::{CreateVendorRequestDto, create_vendor};
use crate::models::ServiceInfo;
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use sea_orm::DatabaseConnection;
use serde_json::Value;

fn mock_state() -> State<AppState> {
    State(AppState {
        db: DatabaseConnection::default(),
    })
}

#[tokio::test]
async fn test_root_handler_returns_expected_service_info() {
    let Json(service_info) = root().await;

    assert_eq!(service_info.service, "sandwich-orders");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_handler_returns_valid_json() {
    let Json(service_info) = root().await;

    let json_value: Value =
        serde_json::to_value(&service_info).expect("Failed to serialize ServiceInfo");

    assert!(json_value.get("service").is_some());
    assert!(json_value.get("version").is_some());
}

#[test]
fn test_service_info_default() {
    let service_info = ServiceInfo::default();

    assert_eq!(service_info.service, "sandwich-orders");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_create_order_rejects_empty_body_naming_all_fields() {
    let request = CreateOrderRequestDto {
        sandwich_id: None,
        user_id: None,
        order_date: None,
    };

    let result = create_order(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("empty order body must be rejected");
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.message,
        Box::from("Missing fields: sandwich_id, user_id, order_date")
    );
}

#[tokio::test]
async fn test_create_order_treats_zero_ids_as_missing() {
    let request = CreateOrderRequestDto {
        sandwich_id: Some(0),
        user_id: Some(0),
        order_date: Some("2025-04-01".to_string()),
    };

    let result = create_order(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("zero ids must be rejected");
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error.message,
        Box::from("Missing fields: sandwich_id, user_id")
    );
}

#[tokio::test]
async fn test_create_order_names_only_absent_fields() {
    let request = CreateOrderRequestDto {
        sandwich_id: None,
        user_id: None,
        order_date: Some("2025-04-01".to_string()),
    };

    let result = create_order(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("missing ids must be rejected");
    assert_eq!(
        error.message,
        Box::from("Missing fields: sandwich_id, user_id")
    );
}

#[tokio::test]
async fn test_create_sandwich_rejects_empty_bread_type() {
    let request = CreateSandwichRequestDto {
        sandwich_name: Some("Turkey Club".to_string()),
        bread_type: Some(String::new()),
    };

    let result = create_sandwich(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("empty bread_type must be rejected");
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(error.message, Box::from("Missing fields: bread_type"));
}

#[tokio::test]
async fn test_create_sandwich_rejects_missing_name() {
    let request = CreateSandwichRequestDto {
        sandwich_name: None,
        bread_type: Some("Rye".to_string()),
    };

    let result = create_sandwich(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("missing sandwich_name must be rejected");
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(error.message, Box::from("Missing fields: sandwich_name"));
}

#[tokio::test]
async fn test_create_vendor_requires_sandwich_ids_array() {
    let request = CreateVendorRequestDto {
        name: Some("Corner Deli".to_string()),
        sandwich_ids: None,
    };

    let result = create_vendor(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("absent sandwich_ids must be rejected");
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(error.message, Box::from("Missing fields: sandwich_ids"));
}

#[tokio::test]
async fn test_create_vendor_rejects_empty_name() {
    let request = CreateVendorRequestDto {
        name: Some(String::new()),
        sandwich_ids: Some(vec![1]),
    };

    let result = create_vendor(mock_state(), Ok(Json(request))).await;

    let error = result.expect_err("empty name must be rejected");
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(error.message, Box::from("Missing fields: name"));
}
