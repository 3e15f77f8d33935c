//! User entity model
//!
//! This module contains the SeaORM entity model for the users table.
//! Users are created through seeding only; no endpoint exposes user creation.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity representing someone who places orders
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = User)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the user
    pub name: String,

    /// Email address, unique across the table
    #[sea_orm(unique)]
    pub email: String,

    /// Role of the user, free-form text (e.g. "employee", "manager")
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sandwich_order::Entity")]
    SandwichOrder,
}

impl Related<super::sandwich_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SandwichOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
