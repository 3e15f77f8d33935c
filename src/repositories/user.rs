//! # User Repository
//!
//! This module contains the repository implementation for User entities.
//! Users are only created through seeding; no endpoint exposes user creation.

use crate::error::RepositoryError;
use crate::models::user::{ActiveModel as UserActiveModel, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

/// Request data for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    /// Display name of the user
    pub name: String,
    /// Email address, unique across the table
    pub email: String,
    /// Role of the user (e.g. "employee", "manager")
    pub role: String,
}

/// Repository for User database operations
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new user and return the stored row
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let user = UserActiveModel {
            name: Set(request.name),
            email: Set(request.email),
            role: Set(request.role),
            ..Default::default()
        };

        let result = user
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// List all users
    pub async fn list_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let users = User::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(users)
    }

    /// Count user rows
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let count = User::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }
}
