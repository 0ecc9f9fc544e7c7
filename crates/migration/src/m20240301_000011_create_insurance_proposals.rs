//! Create `insuranceproposals` table.
//!
//! Drafted by staff; `policy_id` stays empty until a proposal is accepted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InsuranceProposals::Table)
                    .if_not_exists()
                    .col(pk_auto(InsuranceProposals::ProposalId))
                    .col(integer(InsuranceProposals::EmployeeId).not_null())
                    .col(integer(InsuranceProposals::InsuredId).not_null())
                    .col(integer(InsuranceProposals::PolicyTypeId).not_null())
                    .col(decimal_len(InsuranceProposals::CoverageAmount, 15, 2).not_null())
                    .col(decimal_len(InsuranceProposals::PremiumAmount, 15, 2).not_null())
                    .col(text_null(InsuranceProposals::AdditionalInformation))
                    .col(timestamp_with_time_zone(InsuranceProposals::ProposalDate).not_null())
                    .col(string_len(InsuranceProposals::Status, 50).not_null())
                    .col(integer_null(InsuranceProposals::PolicyId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InsuranceProposals::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InsuranceProposals {
    #[sea_orm(iden = "insuranceproposals")]
    Table,
    ProposalId,
    EmployeeId,
    InsuredId,
    PolicyTypeId,
    CoverageAmount,
    PremiumAmount,
    AdditionalInformation,
    ProposalDate,
    Status,
    PolicyId,
}
