use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{coverage_type, policy};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "premiumrates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub rate_id: i32,
    pub policy_id: i32,
    pub coverage_id: i32,
    pub age_range: String,
    pub rate_amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Policy,
    CoverageType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Policy => Entity::belongs_to(policy::Entity)
                .from(Column::PolicyId)
                .to(policy::Column::PolicyId)
                .into(),
            Relation::CoverageType => Entity::belongs_to(coverage_type::Entity)
                .from(Column::CoverageId)
                .to(coverage_type::Column::CoverageId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPremiumRate {
    pub policy_id: i32,
    pub coverage_id: i32,
    pub age_range: String,
    pub rate_amount: Decimal,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PremiumRatePatch {
    pub policy_id: Option<i32>,
    pub coverage_id: Option<i32>,
    pub age_range: Option<String>,
    pub rate_amount: Option<Decimal>,
}

pub async fn create(db: &DatabaseConnection, input: NewPremiumRate) -> Result<Model, ModelError> {
    if input.age_range.trim().is_empty() {
        return Err(ModelError::Validation("age_range required".into()));
    }
    let am = ActiveModel {
        policy_id: Set(input.policy_id),
        coverage_id: Set(input.coverage_id),
        age_range: Set(input.age_range),
        rate_amount: Set(input.rate_amount),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: PremiumRatePatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.policy_id { am.policy_id = Set(v); }
    if let Some(v) = patch.coverage_id { am.coverage_id = Set(v); }
    if let Some(v) = patch.age_range { am.age_range = Set(v); }
    if let Some(v) = patch.rate_amount { am.rate_amount = Set(v); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
