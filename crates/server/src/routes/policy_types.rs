use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::policy_type::{self, NewPolicyType, PolicyTypePatch};

pub async fn list_policy_types(State(state): State<ServerState>) -> Result<Json<Vec<policy_type::Model>>, ApiError> {
    let items = policy_type::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting policy types: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_policy_type(
    State(state): State<ServerState>,
    Path(type_id): Path<i32>,
) -> Result<Json<policy_type::Model>, ApiError> {
    let found = policy_type::Entity::find_by_id(type_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting policy type: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Policy type not found")),
    }
}

pub async fn create_policy_type(
    State(state): State<ServerState>,
    Json(input): Json<NewPolicyType>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    policy_type::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding policy type"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Policy type added successfully"))))
}

pub async fn update_policy_type(
    State(state): State<ServerState>,
    Path(type_id): Path<i32>,
    Json(patch): Json<PolicyTypePatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = policy_type::update(&state.db, type_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating policy type"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Policy type not found"));
    }
    Ok(Json(Message::new("Policy type updated successfully")))
}

pub async fn delete_policy_type(
    State(state): State<ServerState>,
    Path(type_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = policy_type::delete(&state.db, type_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting policy type"))?;
    if !removed {
        return Err(ApiError::not_found("Policy type not found"));
    }
    Ok(Json(Message::new("Policy type deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/policytypes", get(list_policy_types).post(create_policy_type))
        .route(
            "/policytypes/:type_id",
            get(get_policy_type).put(update_policy_type).delete(delete_policy_type),
        )
}
