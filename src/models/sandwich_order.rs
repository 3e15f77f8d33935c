//! Sandwich order entity model
//!
//! This module contains the SeaORM entity model for the sandwich_orders
//! table. An order associates one sandwich, one user, and an ISO date
//! stored as text.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sandwich order entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = SandwichOrder)]
#[sea_orm(table_name = "sandwich_orders")]
pub struct Model {
    /// Unique identifier for the order (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Foreign key to the ordered sandwich
    pub sandwich_id: i32,

    /// Foreign key to the ordering user
    pub user_id: i32,

    /// Order date as an ISO date string (e.g. "2025-04-01")
    pub order_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sandwich::Entity",
        from = "Column::SandwichId",
        to = "super::sandwich::Column::Id"
    )]
    Sandwich,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::sandwich::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sandwich.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
