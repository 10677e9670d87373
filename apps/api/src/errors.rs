use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::routes::upload::form_page;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Batch-fatal conditions only — per-file extraction failures are soft
/// outcomes handled inside the batch collector, not errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No selected files")]
    NoFiles,

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Upload error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoFiles | AppError::UnsupportedFormat(_) | AppError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Spreadsheet(e) => {
                tracing::error!("Spreadsheet error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Rejections re-render the upload form with the error as plain text.
        (status, Html(form_page(Some(&self.to_string())))).into_response()
    }
}
