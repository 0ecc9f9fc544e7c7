use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::contact::{self, NewContact, ContactPatch};

pub async fn list_contacts(State(state): State<ServerState>) -> Result<Json<Vec<contact::Model>>, ApiError> {
    let items = contact::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting contacts: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_contact(
    State(state): State<ServerState>,
    Path(contact_id): Path<i32>,
) -> Result<Json<contact::Model>, ApiError> {
    let found = contact::Entity::find_by_id(contact_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting contact: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Contact not found")),
    }
}

pub async fn create_contact(
    State(state): State<ServerState>,
    Json(input): Json<NewContact>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    contact::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding contact"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Contact added successfully"))))
}

pub async fn update_contact(
    State(state): State<ServerState>,
    Path(contact_id): Path<i32>,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = contact::update(&state.db, contact_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating contact"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Contact not found"));
    }
    Ok(Json(Message::new("Contact updated successfully")))
}

pub async fn delete_contact(
    State(state): State<ServerState>,
    Path(contact_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = contact::delete(&state.db, contact_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting contact"))?;
    if !removed {
        return Err(ApiError::not_found("Contact not found"));
    }
    Ok(Json(Message::new("Contact deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/:contact_id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}
