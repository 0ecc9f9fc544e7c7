use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{extract_token, require_admin, ServerState, AUTH_COOKIE};
use crate::cache::page_key;
use crate::errors::{ApiError, Message};
use crate::rate_limit::limit_create;
use service::auth;
use service::pagination::Pagination;
use service::users::{self, RegisterUserInput, UpdateUserInput};

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub message: String,
    pub user_id: i32,
    pub token: String,
}

/// Paginated account listing; pages are served from the list cache until a
/// mutation invalidates them.
#[utoipa::path(get, path = "/users", tag = "users", responses((status = 200, description = "Page of users")))]
pub async fn list_users(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(5);
    let key = page_key(page, per_page);

    if let Some(cached) = state.users_cache.get(&key).await {
        return Ok(Json(cached));
    }

    let result = users::list_users_paginated(&state.db, Pagination { page, per_page })
        .await
        .map_err(|e| ApiError::from_service(e, "Error getting users"))?;
    let body = serde_json::json!({
        "users": result.items,
        "pages": result.pages,
        "total_users": result.total,
    });
    state.users_cache.insert(key, body.clone()).await;
    Ok(Json(body))
}

#[utoipa::path(post, path = "/users", tag = "users", request_body = crate::openapi::RegisterUserRequest, responses((status = 201, description = "Created"), (status = 400, description = "Validation error or duplicate email"), (status = 429, description = "Rate limited")))]
pub async fn create_user(
    State(state): State<ServerState>,
    Json(input): Json<RegisterUserInput>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    users::register_user(&state.db, input)
        .await
        .map_err(|e| ApiError::from_service(e, "Error adding user"))?;
    state.users_cache.invalidate_all().await;
    Ok((StatusCode::CREATED, Json(Message::new("User added successfully"))))
}

#[utoipa::path(get, path = "/users/{user_id}", tag = "users", responses((status = 200, description = "User"), (status = 404, description = "Not found")))]
pub async fn get_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<models::user::Model>, ApiError> {
    let found = users::get_user(&state.db, user_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Error getting user"))?;
    match found {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::not_found("User not found")),
    }
}

#[utoipa::path(put, path = "/users/{user_id}", tag = "users", responses((status = 200, description = "Updated"), (status = 401, description = "Admin token required"), (status = 404, description = "Not found")))]
pub async fn update_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
    Json(input): Json<UpdateUserInput>,
) -> Result<Json<Message>, ApiError> {
    let updated = users::update_user(&state.db, user_id, input)
        .await
        .map_err(|e| ApiError::from_service(e, "Error updating user"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("User not found"));
    }
    state.users_cache.invalidate_all().await;
    Ok(Json(Message::new("User updated successfully")))
}

#[utoipa::path(delete, path = "/users/{user_id}", tag = "users", responses((status = 200, description = "Deleted"), (status = 401, description = "Admin token required"), (status = 404, description = "Not found")))]
pub async fn delete_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = users::delete_user(&state.db, user_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Error deleting user"))?;
    if !removed {
        return Err(ApiError::not_found("User not found"));
    }
    state.users_cache.invalidate_all().await;
    Ok(Json(Message::new("User deleted successfully")))
}

/// Verify credentials and issue the session token, both as a cookie and in
/// the response body.
#[utoipa::path(post, path = "/users/login", tag = "users", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in"), (status = 401, description = "Invalid email or password")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = auth::login(&state.db, &state.auth, &input.email, &input.password)
        .await
        .map_err(|e| ApiError::from_auth(e, "Error logging in"))?;

    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    let jar = jar.add(cookie);

    info!(user_id = session.user.user_id, "login_ok");
    let out = LoginOutput {
        message: "Logged in successfully".into(),
        user_id: session.user.user_id,
        token: session.token,
    };
    Ok((jar, Json(out)))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, &'static str) {
    let jar = jar.remove(Cookie::from(AUTH_COOKIE));
    (jar, "Logged out")
}

/// Session probe kept from the original users service: plain-text answer,
/// always 200.
pub async fn protected(State(state): State<ServerState>, headers: HeaderMap) -> &'static str {
    match extract_token(&headers) {
        Some(token) if auth::verify_token(&state.auth.jwt_secret, &token).is_ok() => "Authenticated",
        _ => "Not auth",
    }
}

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route(
            "/users",
            get(list_users).merge(
                post(create_user)
                    .route_layer(middleware::from_fn_with_state(state.clone(), limit_create)),
            ),
        )
        .route(
            "/users/:user_id",
            get(get_user).merge(
                put(update_user)
                    .delete(delete_user)
                    .route_layer(middleware::from_fn_with_state(state, require_admin)),
            ),
        )
        .route("/users/login", post(login))
        .route("/users/logout", get(logout))
        .route("/protected", get(protected))
}
