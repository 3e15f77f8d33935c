//! # Vendors API Handlers
//!
//! This module contains handlers for listing and creating vendors. Vendor
//! creation also records which sandwiches the vendor offers.

use crate::error::{self, ApiError};
use crate::models::vendor::Model as VendorModel;
use crate::repositories::{CreateVendorRequest, VendorRepository};
use crate::server::AppState;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for creating a new vendor
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVendorRequestDto {
    /// Display name of the vendor
    #[schema(example = "Corner Deli")]
    pub name: Option<String>,
    /// Identifiers of the sandwiches this vendor offers; may be empty
    #[schema(example = json!([1, 2]))]
    pub sandwich_ids: Option<Vec<i32>>,
}

/// Response payload for vendor creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVendorResponseDto {
    /// Identifier of the newly created vendor
    #[schema(example = 1)]
    pub id: i32,
}

/// List all vendors
#[utoipa::path(
    get,
    path = "/vendors",
    responses(
        (status = 200, description = "A list of vendors", body = [VendorModel]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "vendors"
)]
pub async fn list_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorModel>>, ApiError> {
    let repo = VendorRepository::new(&state.db);
    let vendors = repo.list_all().await?;
    Ok(Json(vendors))
}

/// Add a new vendor with its offered sandwiches
#[utoipa::path(
    post,
    path = "/vendors",
    request_body = CreateVendorRequestDto,
    responses(
        (status = 201, description = "Vendor added successfully", body = CreateVendorResponseDto),
        (status = 400, description = "Missing required fields", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "vendors"
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    payload: Result<Json<CreateVendorRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateVendorResponseDto>), ApiError> {
    let Json(request) = payload?;

    // sandwich_ids must be present as an array; an empty array is allowed.
    let mut missing = Vec::new();
    if request.name.as_deref().is_none_or(|name| name.is_empty()) {
        missing.push("name");
    }
    if request.sandwich_ids.is_none() {
        missing.push("sandwich_ids");
    }
    if !missing.is_empty() {
        return Err(error::missing_fields(&missing));
    }

    let repo = VendorRepository::new(&state.db);
    let vendor_id = repo
        .create_with_sandwiches(CreateVendorRequest {
            name: request.name.unwrap_or_default(),
            sandwich_ids: request.sandwich_ids.unwrap_or_default(),
        })
        .await?;

    tracing::info!(vendor_id, "Created vendor");

    Ok((
        StatusCode::CREATED,
        Json(CreateVendorResponseDto { id: vendor_id }),
    ))
}
