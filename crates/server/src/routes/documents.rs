use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::document::{self, NewDocument, DocumentPatch};

pub async fn list_documents(State(state): State<ServerState>) -> Result<Json<Vec<document::Model>>, ApiError> {
    let items = document::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting documents: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_document(
    State(state): State<ServerState>,
    Path(document_id): Path<i32>,
) -> Result<Json<document::Model>, ApiError> {
    let found = document::Entity::find_by_id(document_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting document: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Document not found")),
    }
}

pub async fn create_document(
    State(state): State<ServerState>,
    Json(input): Json<NewDocument>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    document::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding document"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Document added successfully"))))
}

pub async fn update_document(
    State(state): State<ServerState>,
    Path(document_id): Path<i32>,
    Json(patch): Json<DocumentPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = document::update(&state.db, document_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating document"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Document not found"));
    }
    Ok(Json(Message::new("Document updated successfully")))
}

pub async fn delete_document(
    State(state): State<ServerState>,
    Path(document_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = document::delete(&state.db, document_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting document"))?;
    if !removed {
        return Err(ApiError::not_found("Document not found"));
    }
    Ok(Json(Message::new("Document deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/documents", get(list_documents).post(create_document))
        .route(
            "/documents/:document_id",
            get(get_document).put(update_document).delete(delete_document),
        )
}
