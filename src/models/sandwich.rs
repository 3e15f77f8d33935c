//! Sandwich entity model
//!
//! This module contains the SeaORM entity model for the sandwiches table,
//! the catalog of sandwiches that orders and vendors reference.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sandwich entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = Sandwich)]
#[sea_orm(table_name = "sandwiches")]
pub struct Model {
    /// Unique identifier for the sandwich (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Name of the sandwich
    pub sandwich_name: String,

    /// Type of bread the sandwich is made with
    pub bread_type: String,
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
