//! Vendor entity model
//!
//! This module contains the SeaORM entity model for the vendors table.
//! Vendors offer a set of sandwiches, linked through the vendor_sandwiches
//! association table.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vendor entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Vendor)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    /// Unique identifier for the vendor (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the vendor
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vendor_sandwich::Entity")]
    VendorSandwich,
}

impl Related<super::vendor_sandwich::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VendorSandwich.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
