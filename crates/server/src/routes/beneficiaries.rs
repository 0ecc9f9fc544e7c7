use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::beneficiary::{self, NewBeneficiary, BeneficiaryPatch};

pub async fn list_beneficiaries(State(state): State<ServerState>) -> Result<Json<Vec<beneficiary::Model>>, ApiError> {
    let items = beneficiary::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting beneficiaries: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_beneficiary(
    State(state): State<ServerState>,
    Path(beneficiary_id): Path<i32>,
) -> Result<Json<beneficiary::Model>, ApiError> {
    let found = beneficiary::Entity::find_by_id(beneficiary_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting beneficiary: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Beneficiary not found")),
    }
}

pub async fn create_beneficiary(
    State(state): State<ServerState>,
    Json(input): Json<NewBeneficiary>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    beneficiary::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding beneficiary"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Beneficiary added successfully"))))
}

pub async fn update_beneficiary(
    State(state): State<ServerState>,
    Path(beneficiary_id): Path<i32>,
    Json(patch): Json<BeneficiaryPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = beneficiary::update(&state.db, beneficiary_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating beneficiary"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Beneficiary not found"));
    }
    Ok(Json(Message::new("Beneficiary updated successfully")))
}

pub async fn delete_beneficiary(
    State(state): State<ServerState>,
    Path(beneficiary_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = beneficiary::delete(&state.db, beneficiary_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting beneficiary"))?;
    if !removed {
        return Err(ApiError::not_found("Beneficiary not found"));
    }
    Ok(Json(Message::new("Beneficiary deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/beneficiaries", get(list_beneficiaries).post(create_beneficiary))
        .route(
            "/beneficiaries/:beneficiary_id",
            get(get_beneficiary).put(update_beneficiary).delete(delete_beneficiary),
        )
}
