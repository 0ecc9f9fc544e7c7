use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::auth::{require_admin, ServerState};
use crate::cache::page_key;
use crate::errors::{ApiError, Message};
use crate::rate_limit::limit_create;
use models::policy::{NewPolicy, PolicyPatch};
use service::pagination::Pagination;
use service::policies;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Paginated policy listing; pages are served from the list cache until a
/// mutation invalidates them.
#[utoipa::path(get, path = "/policies", tag = "policies", responses((status = 200, description = "Page of policies")))]
pub async fn list_policies(
    State(state): State<ServerState>,
    Query(params): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(5);
    let key = page_key(page, per_page);

    if let Some(cached) = state.policies_cache.get(&key).await {
        return Ok(Json(cached));
    }

    let result = policies::list_policies_paginated(&state.db, Pagination { page, per_page })
        .await
        .map_err(|e| ApiError::from_service(e, "Error getting policies"))?;
    let body = serde_json::json!({
        "policies": result.items,
        "pages": result.pages,
        "total_policies": result.total,
    });
    state.policies_cache.insert(key, body.clone()).await;
    Ok(Json(body))
}

#[utoipa::path(post, path = "/policies", tag = "policies", request_body = crate::openapi::NewPolicyRequest, responses((status = 201, description = "Created"), (status = 400, description = "Validation error or duplicate name"), (status = 429, description = "Rate limited")))]
pub async fn create_policy(
    State(state): State<ServerState>,
    Json(input): Json<NewPolicy>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    policies::create_policy(&state.db, input)
        .await
        .map_err(|e| ApiError::from_service(e, "Error adding policy"))?;
    state.policies_cache.invalidate_all().await;
    Ok((StatusCode::CREATED, Json(Message::new("Policy added successfully"))))
}

#[utoipa::path(get, path = "/policies/{policy_id}", tag = "policies", responses((status = 200, description = "Policy"), (status = 404, description = "Not found")))]
pub async fn get_policy(
    State(state): State<ServerState>,
    Path(policy_id): Path<i32>,
) -> Result<Json<models::policy::Model>, ApiError> {
    let found = policies::get_policy(&state.db, policy_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Error getting policy"))?;
    match found {
        Some(policy) => Ok(Json(policy)),
        None => Err(ApiError::not_found("Policy not found")),
    }
}

#[utoipa::path(put, path = "/policies/{policy_id}", tag = "policies", responses((status = 200, description = "Updated"), (status = 401, description = "Admin token required"), (status = 404, description = "Not found")))]
pub async fn update_policy(
    State(state): State<ServerState>,
    Path(policy_id): Path<i32>,
    Json(patch): Json<PolicyPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = policies::update_policy(&state.db, policy_id, patch)
        .await
        .map_err(|e| ApiError::from_service(e, "Error updating policy"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Policy not found"));
    }
    state.policies_cache.invalidate_all().await;
    Ok(Json(Message::new("Policy updated successfully")))
}

#[utoipa::path(delete, path = "/policies/{policy_id}", tag = "policies", responses((status = 200, description = "Deleted"), (status = 401, description = "Admin token required"), (status = 404, description = "Not found")))]
pub async fn delete_policy(
    State(state): State<ServerState>,
    Path(policy_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = policies::delete_policy(&state.db, policy_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Error deleting policy"))?;
    if !removed {
        return Err(ApiError::not_found("Policy not found"));
    }
    state.policies_cache.invalidate_all().await;
    Ok(Json(Message::new("Policy deleted successfully")))
}

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route(
            "/policies",
            get(list_policies).merge(
                post(create_policy)
                    .route_layer(middleware::from_fn_with_state(state.clone(), limit_create)),
            ),
        )
        .route(
            "/policies/:policy_id",
            get(get_policy).merge(
                put(update_policy)
                    .delete(delete_policy)
                    .route_layer(middleware::from_fn_with_state(state, require_admin)),
            ),
        )
}
