use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant except `Internal` is a user error reported before or instead
/// of an analysis; no partial result accompanies any of them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("A resume and a job role or job description are both required")]
    MissingInput,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File is {size} bytes; the limit is {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },

    /// The request body hit the router's size limit before the file was fully read.
    #[error("Upload exceeds the request size limit: {0}")]
    BodyTooLarge(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Only {length} characters of text were found; at least {minimum} are needed")]
    InsufficientText { length: usize, minimum: usize },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(mime) => AppError::UnsupportedFormat(mime),
            ExtractionError::TooLarge { size, limit } => AppError::FileTooLarge { size, limit },
            other => AppError::ExtractionFailure(other.to_string()),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::BodyTooLarge(err.body_text())
        } else {
            AppError::Validation(err.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingInput => (
                StatusCode::BAD_REQUEST,
                "MISSING_INPUT",
                "Please upload a resume and provide a job role or job description".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::FileTooLarge { .. } | AppError::BodyTooLarge(_) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "FILE_TOO_LARGE",
                self.to_string(),
            ),
            AppError::UnsupportedFormat(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                "Unsupported file format. Please upload PDF or DOCX files.".to_string(),
            ),
            AppError::ExtractionFailure(msg) => {
                tracing::warn!("Extraction failure: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILURE",
                    "Unable to read text from the uploaded file. Please check your file format."
                        .to_string(),
                )
            }
            AppError::InsufficientText { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_TEXT",
                "Could not extract enough text from the file. Please ensure your file contains readable text."
                    .to_string(),
            ),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::MissingInput, StatusCode::BAD_REQUEST),
            (
                AppError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::FileTooLarge { size: 11, limit: 10 },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AppError::BodyTooLarge("length limit exceeded".to_string()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AppError::UnsupportedFormat("image/png".to_string()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                AppError::ExtractionFailure("broken".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::InsufficientText {
                    length: 40,
                    minimum: 50,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_extraction_error_mapping() {
        let unsupported: AppError =
            ExtractionError::UnsupportedFormat("image/png".to_string()).into();
        assert!(matches!(unsupported, AppError::UnsupportedFormat(m) if m == "image/png"));

        let too_large: AppError = ExtractionError::TooLarge { size: 11, limit: 10 }.into();
        assert!(matches!(too_large, AppError::FileTooLarge { size: 11, limit: 10 }));

        let failed: AppError = ExtractionError::Pdf("bad xref".to_string()).into();
        assert!(matches!(failed, AppError::ExtractionFailure(m) if m.contains("bad xref")));
    }
}
