//! Create `claims` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claims::Table)
                    .if_not_exists()
                    .col(pk_auto(Claims::ClaimId))
                    .col(integer(Claims::PolicyId).not_null())
                    .col(date(Claims::ClaimDate).not_null())
                    .col(decimal_len(Claims::ClaimAmount, 15, 2).not_null())
                    .col(string_len(Claims::Status, 50).not_null())
                    .col(timestamp_with_time_zone(Claims::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Claims::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Claims { Table, ClaimId, PolicyId, ClaimDate, ClaimAmount, Status, CreatedAt }
