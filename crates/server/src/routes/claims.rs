use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::claim::{self, NewClaim, ClaimPatch};

pub async fn list_claims(State(state): State<ServerState>) -> Result<Json<Vec<claim::Model>>, ApiError> {
    let items = claim::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting claims: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_claim(
    State(state): State<ServerState>,
    Path(claim_id): Path<i32>,
) -> Result<Json<claim::Model>, ApiError> {
    let found = claim::Entity::find_by_id(claim_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting claim: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Claim not found")),
    }
}

pub async fn create_claim(
    State(state): State<ServerState>,
    Json(input): Json<NewClaim>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    claim::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding claim"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Claim added successfully"))))
}

pub async fn update_claim(
    State(state): State<ServerState>,
    Path(claim_id): Path<i32>,
    Json(patch): Json<ClaimPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = claim::update(&state.db, claim_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating claim"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Claim not found"));
    }
    Ok(Json(Message::new("Claim updated successfully")))
}

pub async fn delete_claim(
    State(state): State<ServerState>,
    Path(claim_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = claim::delete(&state.db, claim_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting claim"))?;
    if !removed {
        return Err(ApiError::not_found("Claim not found"));
    }
    Ok(Json(Message::new("Claim deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/claims", get(list_claims).post(create_claim))
        .route(
            "/claims/:claim_id",
            get(get_claim).put(update_claim).delete(delete_claim),
        )
}
