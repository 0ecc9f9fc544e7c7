//! Create `insured` table.
//!
//! Person records; optionally linked to an account via `user_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Insured::Table)
                    .if_not_exists()
                    .col(pk_auto(Insured::InsuredId))
                    .col(integer_null(Insured::UserId).unique_key())
                    .col(string_len(Insured::FirstName, 100).not_null())
                    .col(string_len(Insured::LastName, 100).not_null())
                    .col(date(Insured::DateOfBirth).not_null())
                    .col(string_len(Insured::Gender, 10).not_null())
                    .col(string_len_null(Insured::Occupation, 100))
                    .col(string_len_null(Insured::MaritalStatus, 50))
                    .col(timestamp_with_time_zone(Insured::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Insured::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Insured { Table, InsuredId, UserId, FirstName, LastName, DateOfBirth, Gender, Occupation, MaritalStatus, CreatedAt }
