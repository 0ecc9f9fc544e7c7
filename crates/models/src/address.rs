use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::insured;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub address_id: i32,
    pub insured_id: i32,
    pub address_type: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
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
pub struct NewAddress {
    pub insured_id: i32,
    pub address_type: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddressPatch {
    pub insured_id: Option<i32>,
    pub address_type: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewAddress) -> Result<Model, ModelError> {
    if input.address_type.trim().is_empty() || input.street_address.trim().is_empty() {
        return Err(ModelError::Validation("address_type and street_address required".into()));
    }
    let am = ActiveModel {
        insured_id: Set(input.insured_id),
        address_type: Set(input.address_type),
        street_address: Set(input.street_address),
        city: Set(input.city),
        state: Set(input.state),
        zip_code: Set(input.zip_code),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: AddressPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.insured_id { am.insured_id = Set(v); }
    if let Some(v) = patch.address_type { am.address_type = Set(v); }
    if let Some(v) = patch.street_address { am.street_address = Set(v); }
    if let Some(v) = patch.city { am.city = Set(v); }
    if let Some(v) = patch.state { am.state = Set(v); }
    if let Some(v) = patch.zip_code { am.zip_code = Set(v); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
