//! Create `documents` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(pk_auto(Documents::DocumentId))
                    .col(integer(Documents::PolicyId).not_null())
                    .col(string_len(Documents::DocumentType, 100).not_null())
                    .col(text(Documents::FilePath).not_null())
                    .col(timestamp_with_time_zone(Documents::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Documents::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Documents { Table, DocumentId, PolicyId, DocumentType, FilePath, CreatedAt }
