//! # Order Repository
//!
//! This module contains the repository implementation for SandwichOrder
//! entities, including the flat joined listing across sandwiches and users.

use crate::error::RepositoryError;
use crate::models::sandwich::Column as SandwichColumn;
use crate::models::sandwich_order::{
    ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as SandwichOrder,
    Model as OrderModel, Relation as OrderRelation,
};
use crate::models::user::Column as UserColumn;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request data for creating a new order
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    /// Foreign key to the ordered sandwich
    pub sandwich_id: i32,
    /// Foreign key to the ordering user
    pub user_id: i32,
    /// Order date as an ISO date string
    pub order_date: String,
}

/// A single order joined with its sandwich and user, as returned by GET /orders
#[derive(Debug, Clone, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct OrderRow {
    /// Identifier of the order
    pub order_id: i32,
    /// Name of the ordered sandwich
    pub sandwich_name: String,
    /// Bread type of the ordered sandwich
    pub bread_type: String,
    /// Name of the ordering user
    pub user_name: String,
    /// Email of the ordering user
    pub user_email: String,
    /// Order date as an ISO date string
    pub order_date: String,
}

/// Repository for SandwichOrder database operations
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Create a new OrderRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new order and return the stored row
    pub async fn create(&self, request: CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let order = OrderActiveModel {
            sandwich_id: Set(request.sandwich_id),
            user_id: Set(request.user_id),
            order_date: Set(request.order_date),
            ..Default::default()
        };

        let result = order
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// List every order joined with its sandwich and user as flat rows.
    ///
    /// Orders referencing a missing sandwich or user are dropped by the
    /// inner join rather than surfaced as an error.
    pub async fn list_joined(&self) -> Result<Vec<OrderRow>, RepositoryError> {
        let rows = SandwichOrder::find()
            .select_only()
            .column_as(OrderColumn::Id, "order_id")
            .column(SandwichColumn::SandwichName)
            .column(SandwichColumn::BreadType)
            .column_as(UserColumn::Name, "user_name")
            .column_as(UserColumn::Email, "user_email")
            .column(OrderColumn::OrderDate)
            .join(JoinType::InnerJoin, OrderRelation::Sandwich.def())
            .join(JoinType::InnerJoin, OrderRelation::User.def())
            .order_by_asc(OrderColumn::Id)
            .into_model::<OrderRow>()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(rows)
    }

    /// Count order rows
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let count = SandwichOrder::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }
}
