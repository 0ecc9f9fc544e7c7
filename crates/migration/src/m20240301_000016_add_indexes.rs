use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Child tables: index the reference column used by list filters
        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_insured")
                    .table(Addresses::Table)
                    .col(Addresses::InsuredId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beneficiaries_policy")
                    .table(Beneficiaries::Table)
                    .col(Beneficiaries::PolicyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_claims_policy")
                    .table(Claims::Table)
                    .col(Claims::PolicyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_insured")
                    .table(Contacts::Table)
                    .col(Contacts::InsuredId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_documents_policy")
                    .table(Documents::Table)
                    .col(Documents::PolicyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payments_policy")
                    .table(Payments::Table)
                    .col(Payments::PolicyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_premiumrates_policy")
                    .table(PremiumRates::Table)
                    .col(PremiumRates::PolicyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_requests_user")
                    .table(InsuranceRequests::Table)
                    .col(InsuranceRequests::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposals_insured")
                    .table(InsuranceProposals::Table)
                    .col(InsuranceProposals::InsuredId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_user")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_addresses_insured").table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_beneficiaries_policy").table(Beneficiaries::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_claims_policy").table(Claims::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contacts_insured").table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_documents_policy").table(Documents::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_payments_policy").table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_premiumrates_policy").table(PremiumRates::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_requests_user").table(InsuranceRequests::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_proposals_insured").table(InsuranceProposals::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_tickets_user").table(SupportTickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Addresses { Table, InsuredId }

#[derive(DeriveIden)]
enum Beneficiaries { Table, PolicyId }

#[derive(DeriveIden)]
enum Claims { Table, PolicyId }

#[derive(DeriveIden)]
enum Contacts { Table, InsuredId }

#[derive(DeriveIden)]
enum Documents { Table, PolicyId }

#[derive(DeriveIden)]
enum Payments { Table, PolicyId }

#[derive(DeriveIden)]
enum PremiumRates {
    #[sea_orm(iden = "premiumrates")]
    Table,
    PolicyId,
}

#[derive(DeriveIden)]
enum InsuranceRequests {
    #[sea_orm(iden = "insurancerequests")]
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum InsuranceProposals {
    #[sea_orm(iden = "insuranceproposals")]
    Table,
    InsuredId,
}

#[derive(DeriveIden)]
enum SupportTickets {
    #[sea_orm(iden = "supporttickets")]
    Table,
    UserId,
}
