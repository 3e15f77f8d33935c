//! Migration to create the sandwiches table.
//!
//! Baseline catalog of sandwiches that orders and vendors reference.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sandwiches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sandwiches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sandwiches::SandwichName).text().not_null())
                    .col(ColumnDef::new(Sandwiches::BreadType).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sandwiches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sandwiches {
    Table,
    Id,
    SandwichName,
    BreadType,
}
