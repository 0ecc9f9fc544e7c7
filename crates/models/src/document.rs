use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::policy;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub document_id: i32,
    pub policy_id: i32,
    pub document_type: String,
    pub file_path: String,
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
pub struct NewDocument {
    pub policy_id: i32,
    pub document_type: String,
    pub file_path: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DocumentPatch {
    pub policy_id: Option<i32>,
    pub document_type: Option<String>,
    pub file_path: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewDocument) -> Result<Model, ModelError> {
    if input.document_type.trim().is_empty() || input.file_path.trim().is_empty() {
        return Err(ModelError::Validation("document_type and file_path required".into()));
    }
    let am = ActiveModel {
        policy_id: Set(input.policy_id),
        document_type: Set(input.document_type),
        file_path: Set(input.file_path),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: DocumentPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.policy_id { am.policy_id = Set(v); }
    if let Some(v) = patch.document_type { am.document_type = Set(v); }
    if let Some(v) = patch.file_path { am.file_path = Set(v); }
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
