//! Create `insurancerequests` table.
//!
//! Filed by account holders; `policy_id` stays empty until a request is granted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InsuranceRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(InsuranceRequests::RequestId))
                    .col(integer(InsuranceRequests::UserId).not_null())
                    .col(integer(InsuranceRequests::PolicyTypeId).not_null())
                    .col(decimal_len(InsuranceRequests::CoverageAmount, 15, 2).not_null())
                    .col(text_null(InsuranceRequests::AdditionalInformation))
                    .col(timestamp_with_time_zone(InsuranceRequests::RequestDate).not_null())
                    .col(string_len(InsuranceRequests::Status, 50).not_null())
                    .col(integer_null(InsuranceRequests::PolicyId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InsuranceRequests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InsuranceRequests {
    #[sea_orm(iden = "insurancerequests")]
    Table,
    RequestId,
    UserId,
    PolicyTypeId,
    CoverageAmount,
    AdditionalInformation,
    RequestDate,
    Status,
    PolicyId,
}
