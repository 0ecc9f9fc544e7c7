//! Create `policytypes` lookup table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PolicyTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(PolicyTypes::TypeId))
                    .col(string_len(PolicyTypes::TypeName, 100).unique_key().not_null())
                    .col(text_null(PolicyTypes::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PolicyTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PolicyTypes {
    #[sea_orm(iden = "policytypes")]
    Table,
    TypeId,
    TypeName,
    Description,
}
