use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::errors::AuthError;
use models::user;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

/// Claims carried by a session token. The admin guard only looks at `role`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub role: String,
    pub exp: usize,
}

/// Result of a successful login.
pub struct AuthSession {
    pub user: user::Model,
    pub token: String,
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else { return false };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}

pub fn issue_token(cfg: &AuthConfig, user_id: i32, role: &str) -> Result<String, AuthError> {
    let exp = (chrono::Utc::now() + chrono::Duration::seconds(cfg.token_ttl_secs as i64)).timestamp() as usize;
    let claims = Claims { user_id, role: role.to_string(), exp };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Decode and check signature + expiry. Does not check the role.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    match decode::<Claims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(AuthError::TokenExpired),
            _ => Err(AuthError::TokenInvalid),
        },
    }
}

/// Authenticate by email + password and issue a session token.
#[instrument(skip(db, cfg, password), fields(email = %email))]
pub async fn login(
    db: &DatabaseConnection,
    cfg: &AuthConfig,
    email: &str,
    password: &str,
) -> Result<AuthSession, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::Validation("Email and password are required".into()));
    }
    let user = user::find_by_email(db, email)
        .await
        .map_err(|e| AuthError::Db(e.to_string()))?
        .ok_or(AuthError::Unauthorized)?;

    if !verify_password(password, &user.password_hash) {
        warn!(user_id = user.user_id, "login_rejected");
        return Err(AuthError::Unauthorized);
    }

    let role = user.role.clone().unwrap_or_else(|| "user".to_string());
    let token = issue_token(cfg, user.user_id, &role)?;
    info!(user_id = user.user_id, "user_logged_in");
    Ok(AuthSession { user, token })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AuthConfig {
        AuthConfig { jwt_secret: "test-secret".into(), token_ttl_secs: 3600 }
    }

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter2!", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn token_roundtrip_preserves_claims() {
        let token = issue_token(&cfg(), 42, "admin").unwrap();
        let claims = verify_token("test-secret", &token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn token_with_wrong_secret_is_invalid() {
        let token = issue_token(&cfg(), 1, "user").unwrap();
        assert!(matches!(verify_token("other-secret", &token), Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        // Forge a token two hours in the past, beyond the default leeway.
        let exp = (chrono::Utc::now() - chrono::Duration::hours(2)).timestamp() as usize;
        let claims = Claims { user_id: 7, role: "admin".into(), exp };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();
        assert!(matches!(verify_token("test-secret", &token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn mangled_token_is_invalid() {
        let token = issue_token(&cfg(), 1, "user").unwrap();
        let mangled = format!("{}x", token);
        assert!(matches!(verify_token("test-secret", &mangled), Err(AuthError::TokenInvalid)));
    }
}
