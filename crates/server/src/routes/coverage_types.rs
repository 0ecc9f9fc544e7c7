use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::coverage_type::{self, NewCoverageType, CoverageTypePatch};

pub async fn list_coverage_types(State(state): State<ServerState>) -> Result<Json<Vec<coverage_type::Model>>, ApiError> {
    let items = coverage_type::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting coverage types: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_coverage_type(
    State(state): State<ServerState>,
    Path(coverage_id): Path<i32>,
) -> Result<Json<coverage_type::Model>, ApiError> {
    let found = coverage_type::Entity::find_by_id(coverage_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting coverage type: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Coverage type not found")),
    }
}

pub async fn create_coverage_type(
    State(state): State<ServerState>,
    Json(input): Json<NewCoverageType>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    coverage_type::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding coverage type"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Coverage type added successfully"))))
}

pub async fn update_coverage_type(
    State(state): State<ServerState>,
    Path(coverage_id): Path<i32>,
    Json(patch): Json<CoverageTypePatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = coverage_type::update(&state.db, coverage_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating coverage type"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Coverage type not found"));
    }
    Ok(Json(Message::new("Coverage type updated successfully")))
}

pub async fn delete_coverage_type(
    State(state): State<ServerState>,
    Path(coverage_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = coverage_type::delete(&state.db, coverage_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting coverage type"))?;
    if !removed {
        return Err(ApiError::not_found("Coverage type not found"));
    }
    Ok(Json(Message::new("Coverage type deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/coverage_types", get(list_coverage_types).post(create_coverage_type))
        .route(
            "/coverage_types/:coverage_id",
            get(get_coverage_type).put(update_coverage_type).delete(delete_coverage_type),
        )
}
