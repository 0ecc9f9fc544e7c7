//! Create `addresses` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_auto(Addresses::AddressId))
                    .col(integer(Addresses::InsuredId).not_null())
                    .col(string_len(Addresses::AddressType, 50).not_null())
                    .col(string_len(Addresses::StreetAddress, 255).not_null())
                    .col(string_len(Addresses::City, 100).not_null())
                    .col(string_len(Addresses::State, 100).not_null())
                    .col(string_len(Addresses::ZipCode, 20).not_null())
                    .col(timestamp_with_time_zone(Addresses::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Addresses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Addresses { Table, AddressId, InsuredId, AddressType, StreetAddress, City, State, ZipCode, CreatedAt }
