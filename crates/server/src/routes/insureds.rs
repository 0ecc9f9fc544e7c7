use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::insured::{self, NewInsured, InsuredPatch};

pub async fn list_insureds(State(state): State<ServerState>) -> Result<Json<Vec<insured::Model>>, ApiError> {
    let items = insured::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting insureds: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_insured(
    State(state): State<ServerState>,
    Path(insured_id): Path<i32>,
) -> Result<Json<insured::Model>, ApiError> {
    let found = insured::Entity::find_by_id(insured_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting insured: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Insured not found")),
    }
}

pub async fn create_insured(
    State(state): State<ServerState>,
    Json(input): Json<NewInsured>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    insured::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding insured"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Insured added successfully"))))
}

pub async fn update_insured(
    State(state): State<ServerState>,
    Path(insured_id): Path<i32>,
    Json(patch): Json<InsuredPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = insured::update(&state.db, insured_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating insured"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Insured not found"));
    }
    Ok(Json(Message::new("Insured updated successfully")))
}

pub async fn delete_insured(
    State(state): State<ServerState>,
    Path(insured_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = insured::delete(&state.db, insured_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting insured"))?;
    if !removed {
        return Err(ApiError::not_found("Insured not found"));
    }
    Ok(Json(Message::new("Insured deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/insured", get(list_insureds).post(create_insured))
        .route(
            "/insured/:insured_id",
            get(get_insured).put(update_insured).delete(delete_insured),
        )
}
