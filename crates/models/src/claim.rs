use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::policy;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub claim_id: i32,
    pub policy_id: i32,
    pub claim_date: Date,
    pub claim_amount: Decimal,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Policy,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Policy => Entity::belongs_to(policy::Entity)
                .from(Column::PolicyId)
                .to(policy::Column::PolicyId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClaim {
    pub policy_id: i32,
    pub claim_date: Date,
    pub claim_amount: Decimal,
    pub status: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClaimPatch {
    pub policy_id: Option<i32>,
    pub claim_date: Option<Date>,
    pub claim_amount: Option<Decimal>,
    pub status: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewClaim) -> Result<Model, ModelError> {
    if input.status.trim().is_empty() {
        return Err(ModelError::Validation("status required".into()));
    }
    let am = ActiveModel {
        policy_id: Set(input.policy_id),
        claim_date: Set(input.claim_date),
        claim_amount: Set(input.claim_amount),
        status: Set(input.status),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: ClaimPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.policy_id { am.policy_id = Set(v); }
    if let Some(v) = patch.claim_date { am.claim_date = Set(v); }
    if let Some(v) = patch.claim_amount { am.claim_amount = Set(v); }
    if let Some(v) = patch.status { am.status = Set(v); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
