//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a request can surface to a client.
///
/// The three structured cases carry fixed response bodies; everything else
/// collapses into a logged, body-less 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("cafe id not found")]
    CafeNotFound,

    #[error("no cafe at that location")]
    LocationNotFound,

    #[error("api key mismatch")]
    Forbidden,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CafeNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": {
                        "Not Found": "Sorry a cafe with that id was not found in the database."
                    }
                })),
            )
                .into_response(),
            ApiError::LocationNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": {
                        "Not Found": "Sorry, we don't have a cafe at that location."
                    }
                })),
            )
                .into_response(),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "error": {
                        "Forbidden": "Sorry, that's not allowed. Make sure you have the correct api_key."
                    }
                })),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": { "Bad Request": message }
                })),
            )
                .into_response(),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        ApiError::Internal(e.into())
    }
}
