use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HerodexError {
    #[error("no hero matches {0:?}")]
    HeroNotFound(String),
}

impl IntoResponse for HerodexError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            HerodexError::HeroNotFound(query) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "HERO_NOT_FOUND".to_string(),
                    message: format!("No hero matches {query:?}."),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
