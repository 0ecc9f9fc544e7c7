use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{insured, policy_type};

/// Proposal drafted by staff for an insured person. `policy_id` is filled in
/// once the proposal is accepted and a policy exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insuranceproposals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub proposal_id: i32,
    pub employee_id: i32,
    pub insured_id: i32,
    pub policy_type_id: i32,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub additional_information: Option<String>,
    pub proposal_date: DateTimeWithTimeZone,
    pub status: String,
    pub policy_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Insured,
    PolicyType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Insured => Entity::belongs_to(insured::Entity)
                .from(Column::InsuredId)
                .to(insured::Column::InsuredId)
                .into(),
            Relation::PolicyType => Entity::belongs_to(policy_type::Entity)
                .from(Column::PolicyTypeId)
                .to(policy_type::Column::TypeId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInsuranceProposal {
    pub employee_id: i32,
    pub insured_id: i32,
    pub policy_type_id: i32,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub additional_information: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InsuranceProposalPatch {
    pub employee_id: Option<i32>,
    pub insured_id: Option<i32>,
    pub policy_type_id: Option<i32>,
    pub coverage_amount: Option<Decimal>,
    pub premium_amount: Option<Decimal>,
    pub additional_information: Option<String>,
    pub status: Option<String>,
    pub policy_id: Option<i32>,
}

pub async fn create(db: &DatabaseConnection, input: NewInsuranceProposal) -> Result<Model, ModelError> {
    if input.status.trim().is_empty() {
        return Err(ModelError::Validation("status required".into()));
    }
    let am = ActiveModel {
        employee_id: Set(input.employee_id),
        insured_id: Set(input.insured_id),
        policy_type_id: Set(input.policy_type_id),
        coverage_amount: Set(input.coverage_amount),
        premium_amount: Set(input.premium_amount),
        additional_information: Set(input.additional_information),
        proposal_date: Set(Utc::now().into()),
        status: Set(input.status),
        policy_id: Set(None),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: InsuranceProposalPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.employee_id { am.employee_id = Set(v); }
    if let Some(v) = patch.insured_id { am.insured_id = Set(v); }
    if let Some(v) = patch.policy_type_id { am.policy_type_id = Set(v); }
    if let Some(v) = patch.coverage_amount { am.coverage_amount = Set(v); }
    if let Some(v) = patch.premium_amount { am.premium_amount = Set(v); }
    if let Some(v) = patch.additional_information { am.additional_information = Set(Some(v)); }
    if let Some(v) = patch.status { am.status = Set(v); }
    if let Some(v) = patch.policy_id { am.policy_id = Set(Some(v)); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
