use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::support_ticket::{self, NewSupportTicket, SupportTicketPatch};

pub async fn list_support_tickets(State(state): State<ServerState>) -> Result<Json<Vec<support_ticket::Model>>, ApiError> {
    let items = support_ticket::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting support tickets: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_support_ticket(
    State(state): State<ServerState>,
    Path(ticket_id): Path<i32>,
) -> Result<Json<support_ticket::Model>, ApiError> {
    let found = support_ticket::Entity::find_by_id(ticket_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting support ticket: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Support ticket not found")),
    }
}

pub async fn create_support_ticket(
    State(state): State<ServerState>,
    Json(input): Json<NewSupportTicket>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    support_ticket::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding support ticket"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Support ticket added successfully"))))
}

pub async fn update_support_ticket(
    State(state): State<ServerState>,
    Path(ticket_id): Path<i32>,
    Json(patch): Json<SupportTicketPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = support_ticket::update(&state.db, ticket_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating support ticket"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Support ticket not found"));
    }
    Ok(Json(Message::new("Support ticket updated successfully")))
}

pub async fn delete_support_ticket(
    State(state): State<ServerState>,
    Path(ticket_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = support_ticket::delete(&state.db, ticket_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting support ticket"))?;
    if !removed {
        return Err(ApiError::not_found("Support ticket not found"));
    }
    Ok(Json(Message::new("Support ticket deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/support_tickets", get(list_support_tickets).post(create_support_ticket))
        .route(
            "/support_tickets/:ticket_id",
            get(get_support_ticket).put(update_support_ticket).delete(delete_support_ticket),
        )
}
