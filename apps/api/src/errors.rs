use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mailer::MailError;

/// Message returned for every server-side fault. The real cause is logged for
/// operators but never disclosed to the caller.
const PROCESSING_FAILED: &str = "Failed to process application";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required scalar field was absent or empty. Reported one at a time,
    /// first missing field wins.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// One or more required documents were not attached. All missing kinds
    /// are collected into a single message.
    #[error("Missing required documents: {}", .0.join(", "))]
    MissingDocuments(Vec<&'static str>),

    /// An uploaded file violated the size or media-type policy.
    #[error("{0}")]
    FilePolicy(String),

    /// Mail transport is misconfigured or unreachable. Never shown verbatim
    /// to the caller.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingField(_) | AppError::MissingDocuments(_) | AppError::FilePolicy(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Config(detail) => {
                tracing::error!("Configuration error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROCESSING_FAILED.to_string(),
                )
            }
            AppError::Mail(e) => {
                tracing::error!("Mail error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROCESSING_FAILED.to_string(),
                )
            }
            AppError::Multipart(e) => {
                tracing::error!("Multipart parse error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROCESSING_FAILED.to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
