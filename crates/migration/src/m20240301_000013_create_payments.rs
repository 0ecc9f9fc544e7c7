//! Create `payments` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::PaymentId))
                    .col(integer(Payments::PolicyId).not_null())
                    .col(date(Payments::PaymentDate).not_null())
                    .col(decimal_len(Payments::Amount, 15, 2).not_null())
                    .col(string_len(Payments::Status, 50).not_null())
                    .col(timestamp_with_time_zone(Payments::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Payments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Payments { Table, PaymentId, PolicyId, PaymentDate, Amount, Status, CreatedAt }
