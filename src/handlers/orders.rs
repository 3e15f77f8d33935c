//! # Orders API Handlers
//!
//! This module contains handlers for listing and creating sandwich orders.

use crate::error::{self, ApiError};
use crate::repositories::{CreateOrderRequest, OrderRepository, OrderRow};
use crate::server::AppState;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequestDto {
    /// Identifier of the ordered sandwich
    #[schema(example = 1)]
    pub sandwich_id: Option<i32>,
    /// Identifier of the ordering user
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    /// Order date as an ISO date string
    #[schema(example = "2025-04-01")]
    pub order_date: Option<String>,
}

/// Response payload for order creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponseDto {
    /// Identifier of the newly created order
    #[schema(example = 3)]
    pub id: i32,
}

/// List all orders joined with their sandwich and user
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "A list of sandwich orders", body = [OrderRow]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderRow>>, ApiError> {
    let repo = OrderRepository::new(&state.db);
    let orders = repo.list_joined().await?;
    Ok(Json(orders))
}

/// Create a new order
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequestDto,
    responses(
        (status = 201, description = "Order created successfully", body = CreateOrderResponseDto),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateOrderResponseDto>), ApiError> {
    let Json(request) = payload?;

    // Zero ids and empty dates count as absent, matching the falsy
    // semantics of the endpoint contract.
    let mut missing = Vec::new();
    if request.sandwich_id.is_none_or(|id| id == 0) {
        missing.push("sandwich_id");
    }
    if request.user_id.is_none_or(|id| id == 0) {
        missing.push("user_id");
    }
    if request
        .order_date
        .as_deref()
        .is_none_or(|date| date.is_empty())
    {
        missing.push("order_date");
    }
    if !missing.is_empty() {
        return Err(error::missing_fields(&missing));
    }

    let repo = OrderRepository::new(&state.db);
    let order = repo
        .create(CreateOrderRequest {
            sandwich_id: request.sandwich_id.unwrap_or_default(),
            user_id: request.user_id.unwrap_or_default(),
            order_date: request.order_date.unwrap_or_default(),
        })
        .await?;

    tracing::info!(order_id = order.id, "Created order");

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponseDto { id: order.id }),
    ))
}
