//! Create `beneficiaries` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beneficiaries::Table)
                    .if_not_exists()
                    .col(pk_auto(Beneficiaries::BeneficiaryId))
                    .col(integer(Beneficiaries::PolicyId).not_null())
                    .col(string_len(Beneficiaries::BeneficiaryName, 100).not_null())
                    .col(string_len(Beneficiaries::Relationship, 100).not_null())
                    .col(timestamp_with_time_zone(Beneficiaries::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Beneficiaries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Beneficiaries { Table, BeneficiaryId, PolicyId, BeneficiaryName, Relationship, CreatedAt }
