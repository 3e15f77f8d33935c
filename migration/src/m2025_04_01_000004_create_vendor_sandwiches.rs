//! Migration to create the vendor_sandwiches join table.
//!
//! Many-to-many association between vendors and sandwiches, one row per
//! (vendor_id, sandwich_id) pair.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorSandwiches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VendorSandwiches::VendorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VendorSandwiches::SandwichId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(VendorSandwiches::VendorId)
                            .col(VendorSandwiches::SandwichId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_sandwiches_vendor_id")
                            .from(VendorSandwiches::Table, VendorSandwiches::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_sandwiches_sandwich_id")
                            .from(VendorSandwiches::Table, VendorSandwiches::SandwichId)
                            .to(Sandwiches::Table, Sandwiches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VendorSandwiches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VendorSandwiches {
    Table,
    VendorId,
    SandwichId,
}

#[derive(DeriveIden)]
enum Vendors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Sandwiches {
    Table,
    Id,
}
