use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supporttickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub ticket_id: i32,
    pub user_id: i32,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub priority: Option<String>,
    pub assigned_to: i32,
    pub resolution: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
pub struct NewSupportTicket {
    pub user_id: i32,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub priority: Option<String>,
    pub assigned_to: i32,
    pub resolution: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SupportTicketPatch {
    pub user_id: Option<i32>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<i32>,
    pub resolution: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewSupportTicket) -> Result<Model, ModelError> {
    if input.subject.trim().is_empty() || input.description.trim().is_empty() {
        return Err(ModelError::Validation("subject and description required".into()));
    }
    if input.status.trim().is_empty() {
        return Err(ModelError::Validation("status required".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        user_id: Set(input.user_id),
        subject: Set(input.subject),
        description: Set(input.description),
        status: Set(input.status),
        priority: Set(input.priority),
        assigned_to: Set(input.assigned_to),
        resolution: Set(input.resolution),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Partial overwrite; bumps `updated_at` on every change.
pub async fn update(db: &DatabaseConnection, id: i32, patch: SupportTicketPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.user_id { am.user_id = Set(v); }
    if let Some(v) = patch.subject { am.subject = Set(v); }
    if let Some(v) = patch.description { am.description = Set(v); }
    if let Some(v) = patch.status { am.status = Set(v); }
    if let Some(v) = patch.priority { am.priority = Set(Some(v)); }
    if let Some(v) = patch.assigned_to { am.assigned_to = Set(v); }
    if let Some(v) = patch.resolution { am.resolution = Set(Some(v)); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
