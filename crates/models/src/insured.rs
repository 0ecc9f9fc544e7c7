use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "insured")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub insured_id: i32,
    pub user_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub gender: String,
    pub occupation: Option<String>,
    pub marital_status: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::UserId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewInsured {
    pub user_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub gender: String,
    pub occupation: Option<String>,
    pub marital_status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InsuredPatch {
    pub user_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub occupation: Option<String>,
    pub marital_status: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewInsured) -> Result<Model, ModelError> {
    if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
        return Err(ModelError::Validation("first_name and last_name required".into()));
    }
    if input.gender.trim().is_empty() {
        return Err(ModelError::Validation("gender required".into()));
    }
    let am = ActiveModel {
        user_id: Set(input.user_id),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        date_of_birth: Set(input.date_of_birth),
        gender: Set(input.gender),
        occupation: Set(input.occupation),
        marital_status: Set(input.marital_status),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: InsuredPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.user_id { am.user_id = Set(Some(v)); }
    if let Some(v) = patch.first_name { am.first_name = Set(v); }
    if let Some(v) = patch.last_name { am.last_name = Set(v); }
    if let Some(v) = patch.date_of_birth { am.date_of_birth = Set(v); }
    if let Some(v) = patch.gender { am.gender = Set(v); }
    if let Some(v) = patch.occupation { am.occupation = Set(Some(v)); }
    if let Some(v) = patch.marital_status { am.marital_status = Set(Some(v)); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
