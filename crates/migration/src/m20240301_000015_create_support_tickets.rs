//! Create `supporttickets` table.
//!
//! `updated_at` is maintained by the update path, not a trigger.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTickets::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTickets::TicketId))
                    .col(integer(SupportTickets::UserId).not_null())
                    .col(string_len(SupportTickets::Subject, 255).not_null())
                    .col(text(SupportTickets::Description).not_null())
                    .col(string_len(SupportTickets::Status, 50).not_null())
                    .col(string_len_null(SupportTickets::Priority, 50))
                    .col(integer(SupportTickets::AssignedTo).not_null())
                    .col(text_null(SupportTickets::Resolution))
                    .col(timestamp_with_time_zone(SupportTickets::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(SupportTickets::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SupportTickets::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SupportTickets {
    #[sea_orm(iden = "supporttickets")]
    Table,
    TicketId,
    UserId,
    Subject,
    Description,
    Status,
    Priority,
    AssignedTo,
    Resolution,
    CreatedAt,
    UpdatedAt,
}
