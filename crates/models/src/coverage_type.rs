use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Lookup table; no created_at column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coveragetypes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub coverage_id: i32,
    pub coverage_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCoverageType {
    pub coverage_name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CoverageTypePatch {
    pub coverage_name: Option<String>,
    pub description: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewCoverageType) -> Result<Model, ModelError> {
    if input.coverage_name.trim().is_empty() {
        return Err(ModelError::Validation("coverage_name required".into()));
    }
    let am = ActiveModel {
        coverage_name: Set(input.coverage_name),
        description: Set(input.description),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: CoverageTypePatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.coverage_name { am.coverage_name = Set(v); }
    if let Some(v) = patch.description { am.description = Set(Some(v)); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
