//! Migration to create the sandwich_orders table.
//!
//! Orders reference a sandwich and a user by foreign key; the order date is
//! stored as an ISO date string.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SandwichOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SandwichOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SandwichOrders::SandwichId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SandwichOrders::UserId).integer().not_null())
                    .col(ColumnDef::new(SandwichOrders::OrderDate).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sandwich_orders_sandwich_id")
                            .from(SandwichOrders::Table, SandwichOrders::SandwichId)
                            .to(Sandwiches::Table, Sandwiches::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sandwich_orders_user_id")
                            .from(SandwichOrders::Table, SandwichOrders::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SandwichOrders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SandwichOrders {
    Table,
    Id,
    SandwichId,
    UserId,
    OrderDate,
}

#[derive(DeriveIden)]
enum Sandwiches {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
