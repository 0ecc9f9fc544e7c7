use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::address::{self, NewAddress, AddressPatch};

pub async fn list_addresses(State(state): State<ServerState>) -> Result<Json<Vec<address::Model>>, ApiError> {
    let items = address::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting addresses: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_address(
    State(state): State<ServerState>,
    Path(address_id): Path<i32>,
) -> Result<Json<address::Model>, ApiError> {
    let found = address::Entity::find_by_id(address_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting address: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Address not found")),
    }
}

pub async fn create_address(
    State(state): State<ServerState>,
    Json(input): Json<NewAddress>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    address::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding address"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Address added successfully"))))
}

pub async fn update_address(
    State(state): State<ServerState>,
    Path(address_id): Path<i32>,
    Json(patch): Json<AddressPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = address::update(&state.db, address_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating address"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Address not found"));
    }
    Ok(Json(Message::new("Address updated successfully")))
}

pub async fn delete_address(
    State(state): State<ServerState>,
    Path(address_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = address::delete(&state.db, address_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting address"))?;
    if !removed {
        return Err(ApiError::not_found("Address not found"));
    }
    Ok(Json(Message::new("Address deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/addresses", get(list_addresses).post(create_address))
        .route(
            "/addresses/:address_id",
            get(get_address).put(update_address).delete(delete_address),
        )
}
