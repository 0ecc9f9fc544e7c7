use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, QueryFilter, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Account record. `password_hash` never leaves the process: it is skipped on
/// every serialization path.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub role: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub const ALLOWED_ROLES: &[&str] = &["admin", "user", "visitor"];

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.is_empty() || username.len() > 100 {
        return Err(ModelError::Validation("username must be 1..=100 characters".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ModelError::Validation("invalid email".into()));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.len() > 255 {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ModelError> {
    if password.len() < 6 || password.len() > 255 {
        return Err(ModelError::Validation("password must be 6..=255 characters".into()));
    }
    Ok(())
}

pub fn validate_role(role: &str) -> Result<(), ModelError> {
    if !ALLOWED_ROLES.contains(&role) {
        return Err(ModelError::Validation("role must be one of admin, user, visitor".into()));
    }
    Ok(())
}

/// Partial overwrite applied by PUT. The password arrives here already hashed.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn create(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    password_hash: &str,
    role: Option<String>,
) -> Result<Model, ModelError> {
    validate_username(username)?;
    validate_email(email)?;
    if let Some(r) = role.as_deref() {
        validate_role(r)?;
    }
    let am = ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(Utc::now().into()),
        role: Set(role),
        is_active: Set(true),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(db: &DatabaseConnection, id: i32, patch: UserPatch) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(v) = patch.username { am.username = Set(v); }
    if let Some(v) = patch.email { am.email = Set(v); }
    if let Some(v) = patch.password_hash { am.password_hash = Set(v); }
    if let Some(v) = patch.role { am.role = Set(Some(v)); }
    if let Some(v) = patch.is_active { am.is_active = Set(v); }
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
    fn username_bounds() {
        assert!(validate_username("a").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"x".repeat(101)).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("userexample.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn role_whitelist() {
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("visitor").is_ok());
        assert!(validate_role("root").is_err());
    }

    #[test]
    fn password_hash_is_redacted() {
        let m = Model {
            user_id: 1,
            username: "ana".into(),
            email: "ana@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: chrono::Utc::now().into(),
            role: Some("user".into()),
            is_active: true,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("password_hash").is_none());
        assert_eq!(v["username"], "ana");
    }
}
