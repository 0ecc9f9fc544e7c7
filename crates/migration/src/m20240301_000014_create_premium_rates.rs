//! Create `premiumrates` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PremiumRates::Table)
                    .if_not_exists()
                    .col(pk_auto(PremiumRates::RateId))
                    .col(integer(PremiumRates::PolicyId).not_null())
                    .col(integer(PremiumRates::CoverageId).not_null())
                    .col(string_len(PremiumRates::AgeRange, 50).not_null())
                    .col(decimal_len(PremiumRates::RateAmount, 15, 2).not_null())
                    .col(timestamp_with_time_zone(PremiumRates::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PremiumRates::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PremiumRates {
    #[sea_orm(iden = "premiumrates")]
    Table,
    RateId,
    PolicyId,
    CoverageId,
    AgeRange,
    RateAmount,
    CreatedAt,
}
