use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, QueryFilter, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{insured, policy_type};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "policies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub policy_id: i32,
    pub policy_name: String,
    pub description: Option<String>,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub policy_type_id: i32,
    pub insured_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PolicyType,
    Insured,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PolicyType => Entity::belongs_to(policy_type::Entity)
                .from(Column::PolicyTypeId)
                .to(policy_type::Column::TypeId)
                .into(),
            Relation::Insured => Entity::belongs_to(insured::Entity)
                .from(Column::InsuredId)
                .to(insured::Column::InsuredId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPolicy {
    pub policy_name: String,
    pub description: Option<String>,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub policy_type_id: i32,
    pub insured_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PolicyPatch {
    pub policy_name: Option<String>,
    pub description: Option<String>,
    pub coverage_amount: Option<Decimal>,
    pub premium_amount: Option<Decimal>,
    pub policy_type_id: Option<i32>,
    pub insured_id: Option<i32>,
}

pub fn validate_policy_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() || name.len() > 255 {
        return Err(ModelError::Validation("policy_name must be 1..=255 characters".into()));
    }
    Ok(())
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::PolicyName.eq(name))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn create(db: &DatabaseConnection, input: NewPolicy) -> Result<Model, ModelError> {
    validate_policy_name(&input.policy_name)?;
    let am = ActiveModel {
        policy_name: Set(input.policy_name),
        description: Set(input.description),
        coverage_amount: Set(input.coverage_amount),
        premium_amount: Set(input.premium_amount),
        created_at: Set(Utc::now().into()),
        policy_type_id: Set(input.policy_type_id),
        insured_id: Set(input.insured_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: PolicyPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.policy_name {
        validate_policy_name(&v)?;
        am.policy_name = Set(v);
    }
    if let Some(v) = patch.description { am.description = Set(Some(v)); }
    if let Some(v) = patch.coverage_amount { am.coverage_amount = Set(v); }
    if let Some(v) = patch.premium_amount { am.premium_amount = Set(v); }
    if let Some(v) = patch.policy_type_id { am.policy_type_id = Set(v); }
    if let Some(v) = patch.insured_id { am.insured_id = Set(v); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_name_bounds() {
        assert!(validate_policy_name("Term Life 20").is_ok());
        assert!(validate_policy_name("  ").is_err());
        assert!(validate_policy_name(&"x".repeat(256)).is_err());
    }
}
