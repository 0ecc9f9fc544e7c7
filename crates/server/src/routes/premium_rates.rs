use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::premium_rate::{self, NewPremiumRate, PremiumRatePatch};

pub async fn list_premium_rates(State(state): State<ServerState>) -> Result<Json<Vec<premium_rate::Model>>, ApiError> {
    let items = premium_rate::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting premium rates: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_premium_rate(
    State(state): State<ServerState>,
    Path(rate_id): Path<i32>,
) -> Result<Json<premium_rate::Model>, ApiError> {
    let found = premium_rate::Entity::find_by_id(rate_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting premium rate: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Premium rate not found")),
    }
}

pub async fn create_premium_rate(
    State(state): State<ServerState>,
    Json(input): Json<NewPremiumRate>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    premium_rate::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding premium rate"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Premium rate added successfully"))))
}

pub async fn update_premium_rate(
    State(state): State<ServerState>,
    Path(rate_id): Path<i32>,
    Json(patch): Json<PremiumRatePatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = premium_rate::update(&state.db, rate_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating premium rate"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Premium rate not found"));
    }
    Ok(Json(Message::new("Premium rate updated successfully")))
}

pub async fn delete_premium_rate(
    State(state): State<ServerState>,
    Path(rate_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = premium_rate::delete(&state.db, rate_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting premium rate"))?;
    if !removed {
        return Err(ApiError::not_found("Premium rate not found"));
    }
    Ok(Json(Message::new("Premium rate deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/premium_rates", get(list_premium_rates).post(create_premium_rate))
        .route(
            "/premium_rates/:rate_id",
            get(get_premium_rate).put(update_premium_rate).delete(delete_premium_rate),
        )
}
