use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue},
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::github::RepoMeta;
use common::types::Health;
use service::{contact_service, contact_service::ContactInput, github_service::GithubCache, visit_service};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub github: Arc<GithubCache>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn hit(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let visits = visit_service::record_visit(&state.db).await?;
    Ok(Json(serde_json::json!({ "visits": visits })))
}

async fn views(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let visits = visit_service::current_visits(&state.db).await?;
    Ok(Json(serde_json::json!({ "visits": visits })))
}

async fn contact(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let row = contact_service::submit(&state.db, input).await?;
    Ok(Json(serde_json::json!({ "success": true, "id": row.id })))
}

async fn github(State(state): State<AppState>) -> Result<Json<RepoMeta>, ApiError> {
    let meta = state.github.get().await?;
    Ok(Json(meta))
}

/// Build the full application router: static site, health, and the JSON API
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes (health + static catch-all)
    let public = Router::new()
        .route("/health", get(health))
        .fallback_service(static_dir);

    // JSON API routes
    let api = Router::new()
        .route("/api/hit", get(hit))
        .route("/api/views", get(views))
        .route("/api/contact", post(contact))
        .route("/api/github", get(github));

    // Compose
    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency on the way out
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
