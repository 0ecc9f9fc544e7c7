use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::{AuthError, ServiceError};

/// Uniform success body for mutations: `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error carrying the HTTP status and the `{"message": ...}` body the API
/// speaks on every non-2xx response.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a model error; `ctx` names the failed operation for the 500 body.
    pub fn from_model(e: ModelError, ctx: &str) -> Self {
        match e {
            ModelError::Validation(msg) => Self::bad_request(msg),
            ModelError::Db(msg) => Self::internal(format!("{}: {}", ctx, msg)),
        }
    }

    /// Map a service error; `ctx` names the failed operation for the 500 body.
    pub fn from_service(e: ServiceError, ctx: &str) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::bad_request(msg),
            // The wire format reports conflicts as plain 400s
            ServiceError::Conflict(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Db(msg) => Self::internal(format!("{}: {}", ctx, msg)),
            ServiceError::Model(m) => Self::from_model(m, ctx),
        }
    }

    pub fn from_auth(e: AuthError, ctx: &str) -> Self {
        match e {
            AuthError::Validation(msg) => Self::bad_request(msg),
            AuthError::Unauthorized => Self::unauthorized("Invalid email or password"),
            AuthError::TokenExpired => Self::unauthorized("token expired"),
            AuthError::TokenInvalid => Self::unauthorized("invalid token"),
            AuthError::HashError(msg) | AuthError::TokenError(msg) | AuthError::Db(msg) => {
                Self::internal(format!("{}: {}", ctx, msg))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_conflict_maps_to_400() {
        let e = ApiError::from_service(ServiceError::Conflict("Email already in use".into()), "Error adding user");
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Email already in use");
    }

    #[test]
    fn db_errors_carry_operation_context() {
        let e = ApiError::from_model(ModelError::Db("boom".into()), "Error adding address");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Error adding address: boom");
    }

    #[test]
    fn auth_errors_map_to_401() {
        let e = ApiError::from_auth(AuthError::TokenExpired, "Error logging in");
        assert_eq!(e.status, StatusCode::UNAUTHORIZED);
    }
}
