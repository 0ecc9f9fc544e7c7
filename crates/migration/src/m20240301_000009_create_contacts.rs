//! Create `contacts` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(pk_auto(Contacts::ContactId))
                    .col(integer(Contacts::InsuredId).not_null())
                    .col(string_len(Contacts::ContactName, 100).not_null())
                    .col(string_len(Contacts::Relationship, 100).not_null())
                    .col(string_len(Contacts::PhoneNumber, 20).not_null())
                    .col(timestamp_with_time_zone(Contacts::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contacts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contacts { Table, ContactId, InsuredId, ContactName, Relationship, PhoneNumber, CreatedAt }
