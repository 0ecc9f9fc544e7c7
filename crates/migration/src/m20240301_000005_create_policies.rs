//! Create `policies` table.
//!
//! Reference columns are plain integers: each table was owned by a separate
//! service and the schema never enforced cross-table integrity.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Policies::Table)
                    .if_not_exists()
                    .col(pk_auto(Policies::PolicyId))
                    .col(string_len(Policies::PolicyName, 255).unique_key().not_null())
                    .col(text_null(Policies::Description))
                    .col(decimal_len(Policies::CoverageAmount, 15, 2).not_null())
                    .col(decimal_len(Policies::PremiumAmount, 15, 2).not_null())
                    .col(timestamp_with_time_zone(Policies::CreatedAt).not_null())
                    .col(integer(Policies::PolicyTypeId).not_null())
                    .col(integer(Policies::InsuredId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Policies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Policies { Table, PolicyId, PolicyName, Description, CoverageAmount, PremiumAmount, CreatedAt, PolicyTypeId, InsuredId }
