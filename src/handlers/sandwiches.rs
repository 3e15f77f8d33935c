//! # Sandwiches API Handlers
//!
//! This module contains handlers for listing and creating sandwiches.

use crate::error::{self, ApiError};
use crate::models::sandwich::Model as SandwichModel;
use crate::repositories::{CreateSandwichRequest, SandwichRepository};
use crate::server::AppState;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new sandwich
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSandwichRequestDto {
    /// Name of the sandwich
    #[schema(example = "Turkey Club")]
    pub sandwich_name: Option<String>,
    /// Type of bread
    #[schema(example = "Sourdough")]
    pub bread_type: Option<String>,
}

/// Response payload for sandwich creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSandwichResponseDto {
    /// Identifier of the newly created sandwich
    #[schema(example = 6)]
    pub id: i32,
}

/// List all sandwiches
#[utoipa::path(
    get,
    path = "/sandwiches",
    responses(
        (status = 200, description = "A list of sandwiches", body = [SandwichModel]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "sandwiches"
)]
pub async fn list_sandwiches(
    State(state): State<AppState>,
) -> Result<Json<Vec<SandwichModel>>, ApiError> {
    let repo = SandwichRepository::new(&state.db);
    let sandwiches = repo.list_all().await?;
    Ok(Json(sandwiches))
}

/// Add a new sandwich
#[utoipa::path(
    post,
    path = "/sandwiches",
    request_body = CreateSandwichRequestDto,
    responses(
        (status = 201, description = "Sandwich added successfully", body = CreateSandwichResponseDto),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "sandwiches"
)]
pub async fn create_sandwich(
    State(state): State<AppState>,
    payload: Result<Json<CreateSandwichRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateSandwichResponseDto>), ApiError> {
    let Json(request) = payload?;

    // An empty string counts as absent, matching the falsy semantics of
    // the endpoint contract.
    let mut missing = Vec::new();
    if request
        .sandwich_name
        .as_deref()
        .is_none_or(|name| name.is_empty())
    {
        missing.push("sandwich_name");
    }
    if request
        .bread_type
        .as_deref()
        .is_none_or(|bread| bread.is_empty())
    {
        missing.push("bread_type");
    }
    if !missing.is_empty() {
        return Err(error::missing_fields(&missing));
    }

    let repo = SandwichRepository::new(&state.db);
    let sandwich = repo
        .create(CreateSandwichRequest {
            sandwich_name: request.sandwich_name.unwrap_or_default(),
            bread_type: request.bread_type.unwrap_or_default(),
        })
        .await?;

    tracing::info!(sandwich_id = sandwich.id, "Created sandwich");

    Ok((
        StatusCode::CREATED,
        Json(CreateSandwichResponseDto { id: sandwich.id }),
    ))
}
