use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::generation::generator::GenerationError;
use crate::generation::params::ValidationError;

const GENERATION_FAILED_MESSAGE: &str = "حدث خطأ أثناء إنشاء الكتاب. الرجاء المحاولة مرة أخرى.";
const EXPORT_FAILED_MESSAGE: &str = "حدث خطأ أثناء تحميل الملف";
const NO_BOOK_MESSAGE: &str = "لم يتم إنشاء أي كتاب بعد";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("No book has been generated yet")]
    NoBook,

    #[error("Busy: {0}")]
    Busy(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::InvalidBody(e) => (StatusCode::BAD_REQUEST, "INVALID_BODY", e.body_text()),
            // Sub-causes are logged, never shown to the user.
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    EXPORT_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::NoBook => (StatusCode::NOT_FOUND, "NO_BOOK", NO_BOOK_MESSAGE.to_string()),
            AppError::Busy(what) => (StatusCode::CONFLICT, "BUSY", format!("{what} already in progress")),
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
