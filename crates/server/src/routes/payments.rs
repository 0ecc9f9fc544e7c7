use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::EntityTrait;

use crate::auth::ServerState;
use crate::errors::{ApiError, Message};
use models::payment::{self, NewPayment, PaymentPatch};

pub async fn list_payments(State(state): State<ServerState>) -> Result<Json<Vec<payment::Model>>, ApiError> {
    let items = payment::Entity::find()
        .all(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting payments: {}", e)))?;
    Ok(Json(items))
}

pub async fn get_payment(
    State(state): State<ServerState>,
    Path(payment_id): Path<i32>,
) -> Result<Json<payment::Model>, ApiError> {
    let found = payment::Entity::find_by_id(payment_id)
        .one(&state.db)
        .await
        .map_err(|e| ApiError::internal(format!("Error getting payment: {}", e)))?;
    match found {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found("Payment not found")),
    }
}

pub async fn create_payment(
    State(state): State<ServerState>,
    Json(input): Json<NewPayment>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    payment::create(&state.db, input)
        .await
        .map_err(|e| ApiError::from_model(e, "Error adding payment"))?;
    Ok((StatusCode::CREATED, Json(Message::new("Payment added successfully"))))
}

pub async fn update_payment(
    State(state): State<ServerState>,
    Path(payment_id): Path<i32>,
    Json(patch): Json<PaymentPatch>,
) -> Result<Json<Message>, ApiError> {
    let updated = payment::update(&state.db, payment_id, patch)
        .await
        .map_err(|e| ApiError::from_model(e, "Error updating payment"))?;
    if updated.is_none() {
        return Err(ApiError::not_found("Payment not found"));
    }
    Ok(Json(Message::new("Payment updated successfully")))
}

pub async fn delete_payment(
    State(state): State<ServerState>,
    Path(payment_id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let removed = payment::delete(&state.db, payment_id)
        .await
        .map_err(|e| ApiError::from_model(e, "Error deleting payment"))?;
    if !removed {
        return Err(ApiError::not_found("Payment not found"));
    }
    Ok(Json(Message::new("Payment deleted successfully")))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/payments", get(list_payments).post(create_payment))
        .route(
            "/payments/:payment_id",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
}
