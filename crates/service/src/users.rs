use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::auth;
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};
use models::user;

/// Fields accepted when registering an account.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Partial overwrite for PUT; a present password is re-hashed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Create an account with a hashed password. Duplicate emails are rejected.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn register_user(db: &DatabaseConnection, input: RegisterUserInput) -> Result<user::Model, ServiceError> {
    user::validate_username(&input.username)?;
    user::validate_email(&input.email)?;
    user::validate_password(&input.password)?;
    if let Some(role) = input.role.as_deref() {
        user::validate_role(role)?;
    }

    if user::find_by_email(db, &input.email).await?.is_some() {
        return Err(ServiceError::Conflict("Email already in use".into()));
    }

    let hash = auth::hash_password(&input.password)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;
    let created = user::create(db, &input.username, &input.email, &hash, input.role).await?;
    info!(user_id = created.user_id, "user_registered");
    Ok(created)
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<Option<user::Model>, ServiceError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial overwrite; validates and re-hashes what is present.
pub async fn update_user(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateUserInput,
) -> Result<Option<user::Model>, ServiceError> {
    if let Some(u) = input.username.as_deref() {
        user::validate_username(u)?;
    }
    if let Some(e) = input.email.as_deref() {
        user::validate_email(e)?;
    }
    if let Some(r) = input.role.as_deref() {
        user::validate_role(r)?;
    }
    let password_hash = match input.password.as_deref() {
        Some(p) => {
            user::validate_password(p)?;
            Some(auth::hash_password(p).map_err(|e| ServiceError::Validation(e.to_string()))?)
        }
        None => None,
    };
    let patch = user::UserPatch {
        username: input.username,
        email: input.email,
        password_hash,
        role: input.role,
        is_active: input.is_active,
    };
    Ok(user::update(db, id, patch).await?)
}

pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    Ok(user::delete(db, id).await?)
}

/// List accounts page by page, with totals for the response envelope.
pub async fn list_users_paginated(db: &DatabaseConnection, opts: Pagination) -> Result<Page<user::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let paginator = user::Entity::find().paginate(db, per_page);
    let counts = paginator
        .num_items_and_pages()
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page { items, pages: counts.number_of_pages, total: counts.number_of_items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{login, AuthConfig};
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn user_register_login_and_crud() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let email = format!("svc_{}@example.com", Uuid::new_v4());
        let input = RegisterUserInput {
            username: "svc_user".into(),
            email: email.clone(),
            password: "S3curePass!".into(),
            role: Some("admin".into()),
        };
        let u = register_user(&db, input.clone()).await?;
        assert_eq!(u.email, email);
        assert_ne!(u.password_hash, "S3curePass!");

        // Duplicate email is rejected
        let dup = register_user(&db, input).await;
        assert!(matches!(dup, Err(ServiceError::Conflict(_))));

        // Login round-trip issues a token with the stored role
        let cfg = AuthConfig { jwt_secret: "svc-secret".into(), token_ttl_secs: 3600 };
        let session = login(&db, &cfg, &email, "S3curePass!").await?;
        let claims = crate::auth::verify_token("svc-secret", &session.token)?;
        assert_eq!(claims.user_id, u.user_id);
        assert_eq!(claims.role, "admin");

        // Wrong password is unauthorized
        assert!(login(&db, &cfg, &email, "nope").await.is_err());

        let updated = update_user(
            &db,
            u.user_id,
            UpdateUserInput { username: Some("renamed".into()), ..Default::default() },
        )
        .await?
        .expect("user exists");
        assert_eq!(updated.username, "renamed");

        assert!(delete_user(&db, u.user_id).await?);
        assert!(get_user(&db, u.user_id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_users_reports_totals() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return Ok(());
            }
        };

        let mut ids = vec![];
        for i in 0..3 {
            let input = RegisterUserInput {
                username: format!("page_user_{}", i),
                email: format!("page_{}@example.com", Uuid::new_v4()),
                password: "S3curePass!".into(),
                role: None,
            };
            ids.push(register_user(&db, input).await?.user_id);
        }

        let page = list_users_paginated(&db, Pagination { page: 1, per_page: 2 }).await?;
        assert!(page.items.len() <= 2);
        assert!(page.total >= 3);
        assert!(page.pages >= 2);

        for id in ids {
            delete_user(&db, id).await?;
        }
        Ok(())
    }
}
