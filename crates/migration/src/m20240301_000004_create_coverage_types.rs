//! Create `coveragetypes` lookup table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoverageTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(CoverageTypes::CoverageId))
                    .col(string_len(CoverageTypes::CoverageName, 100).unique_key().not_null())
                    .col(text_null(CoverageTypes::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CoverageTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CoverageTypes {
    #[sea_orm(iden = "coveragetypes")]
    Table,
    CoverageId,
    CoverageName,
    Description,
}
