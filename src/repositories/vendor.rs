//! # Vendor Repository
//!
//! This module contains the repository implementation for Vendor entities.
//! Vendor creation inserts the vendor row plus one association row per
//! offered sandwich inside a single transaction, so a failure part-way
//! through leaves no partial vendor behind.

use crate::error::RepositoryError;
use crate::models::vendor::{ActiveModel as VendorActiveModel, Entity as Vendor, Model as VendorModel};
use crate::models::vendor_sandwich::{
    ActiveModel as VendorSandwichActiveModel, Entity as VendorSandwich,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionError, TransactionTrait,
};

/// Request data for creating a new vendor
#[derive(Debug, Clone)]
pub struct CreateVendorRequest {
    /// Display name of the vendor
    pub name: String,
    /// Sandwiches this vendor offers; may be empty
    pub sandwich_ids: Vec<i32>,
}

/// Repository for Vendor database operations
pub struct VendorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorRepository<'a> {
    /// Create a new VendorRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a vendor and its sandwich associations atomically.
    ///
    /// All rows are committed or none; returns the new vendor id.
    pub async fn create_with_sandwiches(
        &self,
        request: CreateVendorRequest,
    ) -> Result<i32, RepositoryError> {
        let vendor_id = self
            .db
            .transaction::<_, i32, DbErr>(|txn| {
                Box::pin(async move {
                    let vendor = VendorActiveModel {
                        name: Set(request.name),
                        ..Default::default()
                    };
                    let vendor = vendor.insert(txn).await?;

                    for sandwich_id in request.sandwich_ids {
                        let association = VendorSandwichActiveModel {
                            vendor_id: Set(vendor.id),
                            sandwich_id: Set(sandwich_id),
                        };
                        // Composite primary key; skip the read-back of the
                        // inserted row.
                        VendorSandwich::insert(association)
                            .exec_without_returning(txn)
                            .await?;
                    }

                    Ok(vendor.id)
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(db_err) => RepositoryError::Database(db_err),
                TransactionError::Transaction(db_err) => RepositoryError::Database(db_err),
            })?;

        Ok(vendor_id)
    }

    /// List all vendors
    pub async fn list_all(&self) -> Result<Vec<VendorModel>, RepositoryError> {
        let vendors = Vendor::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(vendors)
    }

    /// List the sandwich ids associated with the given vendor
    pub async fn sandwich_ids_for(&self, vendor_id: i32) -> Result<Vec<i32>, RepositoryError> {
        let associations = VendorSandwich::find()
            .filter(crate::models::vendor_sandwich::Column::VendorId.eq(vendor_id))
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(associations.into_iter().map(|a| a.sandwich_id).collect())
    }
}
