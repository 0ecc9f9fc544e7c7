use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::insurance_proposal::{self, NewInsuranceProposal, InsuranceProposalPatch};

pub async fn list_insurance_proposals(State(state): State<ServerState>) -> Result<Json<Vec<insurance_proposal::Model>>, ApiError> {
    let items = insurance_proposal::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting insurance proposals: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_insurance_proposal(
    State(state): State<ServerState>,
    Path(proposal_id): Path<i32>,
) -> Result<Json<insurance_proposal::Model>, ApiError> {
    let found = insurance_proposal::Entity::find_by_id(proposal_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting insurance proposal: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Insurance proposal not found")),
    }
}

pub async fn create_insurance_proposal(
    State(state): State<ServerState>,
    Json(input): Json<NewInsuranceProposal>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    insurance_proposal::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding insurance proposal"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Insurance proposal added successfully"))))
}

pub async fn update_insurance_proposal(
    State(state): State<ServerState>,
    Path(proposal_id): Path<i32>,
    Json(patch): Json<InsuranceProposalPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = insurance_proposal::update(&state.db, proposal_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating insurance proposal"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Insurance proposal not found"));
    }
    Ok(Json(Message::new("Insurance proposal updated successfully")))
}

pub async fn delete_insurance_proposal(
    State(state): State<ServerState>,
    Path(proposal_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = insurance_proposal::delete(&state.db, proposal_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting insurance proposal"))?;
    if !removed {
        return Err(ApiError::not_found("Insurance proposal not found"));
    }
    Ok(Json(Message::new("Insurance proposal deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/insurance_proposals", get(list_insurance_proposals).post(create_insurance_proposal))
        .route(
            "/insurance_proposals/:proposal_id",
            get(get_insurance_proposal).put(update_insurance_proposal).delete(delete_insurance_proposal),
        )
}
