//! # Sandwich Repository
//!
//! This module contains the repository implementation for Sandwich entities.

use crate::error::RepositoryError;
use crate::models::sandwich::{
    ActiveModel as SandwichActiveModel, Entity as Sandwich, Model as SandwichModel,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

/// Request data for creating a new sandwich
#[derive(Debug, Clone)]
pub struct CreateSandwichRequest {
    /// Name of the sandwich
    pub sandwich_name: String,
    /// Type of bread
    pub bread_type: String,
}

/// Repository for Sandwich database operations
pub struct SandwichRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SandwichRepository<'a> {
    /// Create a new SandwichRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new sandwich and return the stored row
    pub async fn create(
        &self,
        request: CreateSandwichRequest,
    ) -> Result<SandwichModel, RepositoryError> {
        let sandwich = SandwichActiveModel {
            sandwich_name: Set(request.sandwich_name),
            bread_type: Set(request.bread_type),
            ..Default::default()
        };

        let result = sandwich
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// List all sandwiches, unfiltered
    pub async fn list_all(&self) -> Result<Vec<SandwichModel>, RepositoryError> {
        let sandwiches = Sandwich::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(sandwiches)
    }

    /// Count sandwich rows
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let count = Sandwich::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }
}
