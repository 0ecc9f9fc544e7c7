use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{delete, get};
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::{require_admin, ServerState};
use crate::errors::{ApiError, Message};
use models::insurance_request::{self, InsuranceRequestPatch, NewInsuranceRequest};

pub async fn list_insurance_requests(State(state): State<ServerState>) -> Result<Json<Vec<insurance_request::Model>>, ApiError> {
    let items = insurance_request::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting insurance requests: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_insurance_request(
    State(state): State<ServerState>,
    Path(request_id): Path<i32>,
) -> Result<Json<insurance_request::Model>, ApiError> {
    let found = insurance_request::Entity::find_by_id(request_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting insurance request: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Insurance request not found")),
    }
}

pub async fn create_insurance_request(
    State(state): State<ServerState>,
    Json(input): Json<NewInsuranceRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    insurance_request::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding insurance request"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Insurance request added successfully"))))
}

pub async fn update_insurance_request(
    State(state): State<ServerState>,
    Path(request_id): Path<i32>,
    Json(patch): Json<InsuranceRequestPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = insurance_request::update(&state.db, request_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating insurance request"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Insurance request not found"));
    }
    Ok(Json(Message::new("Insurance request updated successfully")))
}

pub async fn delete_insurance_request(
    State(state): State<ServerState>,
    Path(request_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = insurance_request::delete(&state.db, request_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting insurance request"))?;
    if !removed {
        return Err(ApiError::not_found("Insurance request not found"));
    }
    Ok(Json(Message::new("Insurance request deleted successfully")))
}

/// Delete is the one admin-guarded operation on this resource.
pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/insurance_requests", get(list_insurance_requests).post(create_insurance_request))
        .route(
            "/insurance_requests/:request_id",
            get(get_insurance_request).put(update_insurance_request).merge(
                delete(delete_insurance_request)
                    .route_layer(middleware::from_fn_with_state(state, require_admin)),
            ),
        )
}
