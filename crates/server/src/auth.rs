use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::cache::ListCache;
use crate::errors::ApiError;
use crate::rate_limit::RateLimiter;
use service::auth::{verify_token, AuthConfig, Claims};
use service::errors::AuthError;

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: AuthConfig,
    pub users_cache: ListCache,
    pub policies_cache: ListCache,
    pub limiter: RateLimiter,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, cfg: &configs::AppConfig) -> Self {
        Self {
            db,
            auth: AuthConfig {
                jwt_secret: cfg.auth.jwt_secret.clone(),
                token_ttl_secs: cfg.auth.token_ttl_secs,
            },
            users_cache: ListCache::new("users", cfg.cache.list_ttl_secs, cfg.cache.max_capacity),
            policies_cache: ListCache::new("policies", cfg.cache.list_ttl_secs, cfg.cache.max_capacity),
            limiter: RateLimiter::new(&cfg.rate_limit),
        }
    }
}

/// Pull the session token from `Authorization: Bearer`, falling back to the
/// `auth_token` cookie set at login.
pub fn extract_token(headers: &axum::http::HeaderMap) -> Option<String> {
    if let Some(h) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        return h.strip_prefix("Bearer ").map(|t| t.to_string());
    }

    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    for part in cookie_header.split(';') {
        if let Some(rest) = part.trim().strip_prefix("auth_token=") {
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
        }
    }
    None
}

/// Middleware guarding the admin-only mutations: a valid token with
/// `role == "admin"` or nothing.
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = extract_token(req.headers()) else {
        warn!(path = %path, "missing token on guarded route");
        return Err(ApiError::unauthorized("missing token"));
    };

    let claims: Claims = verify_token(&state.auth.jwt_secret, &token).map_err(|e| {
        warn!(path = %path, err = %e, "token validation failed");
        match e {
            AuthError::TokenExpired => ApiError::unauthorized("token expired"),
            _ => ApiError::unauthorized("invalid token"),
        }
    })?;

    if claims.role != "admin" {
        warn!(path = %path, user_id = claims.user_id, role = %claims.role, "access not granted");
        return Err(ApiError::unauthorized("access not granted"));
    }

    // Downstream handlers may use the verified identity
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    fn headers_of(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (k, v) in pairs {
            headers.insert(
                axum::http::HeaderName::from_bytes(k.as_bytes()).unwrap(),
                v.parse().unwrap(),
            );
        }
        headers
    }

    #[test]
    fn bearer_header_wins() {
        let headers = headers_of(&[
            ("authorization", "Bearer header-token"),
            ("cookie", "auth_token=cookie-token"),
        ]);
        assert_eq!(extract_token(&headers), Some("header-token".to_string()));
    }

    #[test]
    fn cookie_fallback_parses_among_other_cookies() {
        let headers = headers_of(&[("cookie", "theme=dark; auth_token=tok123; lang=en")]);
        assert_eq!(extract_token(&headers), Some("tok123".to_string()));
    }

    #[test]
    fn malformed_authorization_is_no_token() {
        let headers = headers_of(&[("authorization", "Basic dXNlcg==")]);
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn empty_cookie_value_is_no_token() {
        let headers = headers_of(&[("cookie", "auth_token=")]);
        assert_eq!(extract_token(&headers), None);
    }
}
