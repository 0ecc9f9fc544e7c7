use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::auth::ServerState;
use crate::metrics;
use crate::openapi::ApiDoc;

pub mod addresses;
pub mod beneficiaries;
pub mod claims;
pub mod contacts;
pub mod coverage_types;
pub mod documents;
pub mod insurance_proposals;
pub mod insurance_requests;
pub mod insureds;
pub mod payments;
pub mod policies;
pub mod policy_types;
pub mod premium_rates;
pub mod support_tickets;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service healthy")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics_endpoint() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: one router per resource, merged, with
/// CORS, request tracing and metrics applied to everything.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let resources = Router::new()
        .merge(addresses::router())
        .merge(beneficiaries::router())
        .merge(claims::router())
        .merge(contacts::router())
        .merge(coverage_types::router())
        .merge(documents::router())
        .merge(insurance_proposals::router())
        .merge(insurance_requests::router(state.clone()))
        .merge(insureds::router())
        .merge(payments::router())
        .merge(policy_types::router())
        .merge(premium_rates::router())
        .merge(support_tickets::router())
        .merge(users::router(state.clone()))
        .merge(policies::router(state.clone()));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(resources)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
        .with_state(state)
}
