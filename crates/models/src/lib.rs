pub mod errors;
pub mod db;

pub mod address;
pub mod beneficiary;
pub mod claim;
pub mod contact;
pub mod coverage_type;
pub mod document;
pub mod insurance_proposal;
pub mod insurance_request;
pub mod insured;
pub mod payment;
pub mod policy;
pub mod policy_type;
pub mod premium_rate;
pub mod support_ticket;
pub mod user;

#[cfg(test)]
mod tests;
