use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{policy_type, user};

/// Coverage request filed by an account holder. `policy_id` is filled in once
/// the request is granted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insurancerequests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub request_id: i32,
    pub user_id: i32,
    pub policy_type_id: i32,
    pub coverage_amount: Decimal,
    pub additional_information: Option<String>,
    pub request_date: DateTimeWithTimeZone,
    pub status: String,
    pub policy_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    PolicyType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::UserId)
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
pub struct NewInsuranceRequest {
    pub user_id: i32,
    pub policy_type_id: i32,
    pub coverage_amount: Decimal,
    pub additional_information: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InsuranceRequestPatch {
    pub user_id: Option<i32>,
    pub policy_type_id: Option<i32>,
    pub coverage_amount: Option<Decimal>,
    pub additional_information: Option<String>,
    pub status: Option<String>,
    pub policy_id: Option<i32>,
}

pub async fn create(db: &DatabaseConnection, input: NewInsuranceRequest) -> Result<Model, ModelError> {
    if input.status.trim().is_empty() {
        return Err(ModelError::Validation("status required".into()));
    }
    let am = ActiveModel {
        user_id: Set(input.user_id),
        policy_type_id: Set(input.policy_type_id),
        coverage_amount: Set(input.coverage_amount),
        additional_information: Set(input.additional_information),
        request_date: Set(Utc::now().into()),
        status: Set(input.status),
        policy_id: Set(None),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: InsuranceRequestPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.user_id { am.user_id = Set(v); }
    if let Some(v) = patch.policy_type_id { am.policy_type_id = Set(v); }
    if let Some(v) = patch.coverage_amount { am.coverage_amount = Set(v); }
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
