use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant collapses into one human-readable message for the UI; none
/// is fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local validation: trimmed input was empty. Never reaches the network.
    #[error("{0}")]
    EmptyInput(String),

    /// Local validation: input exceeds 1.5x the platform's character limit.
    #[error("Text is too long for {label}. Recommended limit: {limit} characters.")]
    LengthExceeded { label: &'static str, limit: u32 },

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyInput(msg) => (StatusCode::BAD_REQUEST, "EMPTY_INPUT", msg.clone()),
            AppError::LengthExceeded { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "LENGTH_EXCEEDED",
                self.to_string(),
            ),
            AppError::Completion(e) => {
                let (status, code) = match e {
                    CompletionError::MissingCredential => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
                    }
                    CompletionError::Api { .. } => (StatusCode::BAD_GATEWAY, "API_ERROR"),
                    CompletionError::EmptyResult => (StatusCode::BAD_GATEWAY, "EMPTY_RESULT"),
                    CompletionError::Transport(_) => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
                };
                tracing::error!("Completion error: {e}");
                (status, code, e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
