//! Migrator registering table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_users;
mod m20240301_000002_create_insured;
mod m20240301_000003_create_policy_types;
mod m20240301_000004_create_coverage_types;
mod m20240301_000005_create_policies;
mod m20240301_000006_create_addresses;
mod m20240301_000007_create_beneficiaries;
mod m20240301_000008_create_claims;
mod m20240301_000009_create_contacts;
mod m20240301_000010_create_documents;
mod m20240301_000011_create_insurance_proposals;
mod m20240301_000012_create_insurance_requests;
mod m20240301_000013_create_payments;
mod m20240301_000014_create_premium_rates;
mod m20240301_000015_create_support_tickets;
mod m20240301_000016_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_users::Migration),
            Box::new(m20240301_000002_create_insured::Migration),
            Box::new(m20240301_000003_create_policy_types::Migration),
            Box::new(m20240301_000004_create_coverage_types::Migration),
            Box::new(m20240301_000005_create_policies::Migration),
            Box::new(m20240301_000006_create_addresses::Migration),
            Box::new(m20240301_000007_create_beneficiaries::Migration),
            Box::new(m20240301_000008_create_claims::Migration),
            Box::new(m20240301_000009_create_contacts::Migration),
            Box::new(m20240301_000010_create_documents::Migration),
            Box::new(m20240301_000011_create_insurance_proposals::Migration),
            Box::new(m20240301_000012_create_insurance_requests::Migration),
            Box::new(m20240301_000013_create_payments::Migration),
            Box::new(m20240301_000014_create_premium_rates::Migration),
            Box::new(m20240301_000015_create_support_tickets::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000016_add_indexes::Migration),
        ]
    }
}
