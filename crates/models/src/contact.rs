use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::insured;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub contact_id: i32,
    pub insured_id: i32,
    pub contact_name: String,
    pub relationship: String,
    pub phone_number: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Insured,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Insured => Entity::belongs_to(insured::Entity)
                .from(Column::InsuredId)
                .to(insured::Column::InsuredId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    pub insured_id: i32,
    pub contact_name: String,
    pub relationship: String,
    pub phone_number: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactPatch {
    pub insured_id: Option<i32>,
    pub contact_name: Option<String>,
    pub relationship: Option<String>,
    pub phone_number: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewContact) -> Result<Model, ModelError> {
    if input.contact_name.trim().is_empty() || input.phone_number.trim().is_empty() {
        return Err(ModelError::Validation("contact_name and phone_number required".into()));
    }
    let am = ActiveModel {
        insured_id: Set(input.insured_id),
        contact_name: Set(input.contact_name),
        relationship: Set(input.relationship),
        phone_number: Set(input.phone_number),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: ContactPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.insured_id { am.insured_id = Set(v); }
    if let Some(v) = patch.contact_name { am.contact_name = Set(v); }
    if let Some(v) = patch.relationship { am.relationship = Set(v); }
    if let Some(v) = patch.phone_number { am.phone_number = Set(v); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
