//! Vendor-sandwich association entity model
//!
//! Many-to-many join between vendors and sandwiches, one row per
//! (vendor_id, sandwich_id) pair.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vendor-sandwich association row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = VendorSandwich)]
#[sea_orm(table_name = "vendor_sandwiches")]
pub struct Model {
    /// Vendor side of the association (composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub vendor_id: i32,

    /// Sandwich side of the association (composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub sandwich_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::sandwich::Entity",
        from = "Column::SandwichId",
        to = "super::sandwich::Column::Id"
    )]
    Sandwich,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::sandwich::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sandwich.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
