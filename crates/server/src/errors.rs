//! Translation of service results into transport responses. This is the
//! only place error kinds turn into status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use common::github::GithubError;
use service::contact_service::ContactError;
use service::errors::ServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] ServiceError),
    #[error(transparent)]
    Contact(#[from] ContactError),
    #[error(transparent)]
    Upstream(#[from] GithubError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(e) => {
                error!(error = %e, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "db_error" })),
                )
                    .into_response()
            }
            // client mistake, not a server fault: answered, not logged
            ApiError::Contact(ContactError::Rejected(r)) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": r.kind(), "message": r.to_string() })),
            )
                .into_response(),
            ApiError::Contact(ContactError::Store(e)) => {
                error!(error = %e, "contact store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "error": "db_error",
                        "message": "could not save your message, please try again later"
                    })),
                )
                    .into_response()
            }
            ApiError::Upstream(GithubError::Status(code)) => {
                warn!(status = code, "github returned non-success status");
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, Json(serde_json::json!({ "error": "upstream_error" })))
                    .into_response()
            }
            ApiError::Upstream(e) => {
                error!(error = %e, "github fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "server_error" })),
                )
                    .into_response()
            }
        }
    }
}
