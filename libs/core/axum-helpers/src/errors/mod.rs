pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned for client and server errors.
///
/// ```json
/// {
///   "error_type": "Bad request",
///   "error_messages": ["\"from\" is required", "\"to\" contains invalid email(s)"]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error category
    pub error_type: String,
    /// One entry per problem found in the request
    pub error_messages: Vec<String>,
}

/// Body returned for unknown routes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotFoundResponse {
    /// `"<path> not found"`
    pub url: String,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, messages, code) = match self {
            AppError::Validation(messages) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    messages
                );
                (StatusCode::BAD_REQUEST, messages, ErrorCode::ValidationError)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                // Syntax, type and content-type problems are all client errors
                (
                    StatusCode::BAD_REQUEST,
                    vec![e.body_text()],
                    ErrorCode::JsonExtraction,
                )
            }
            AppError::NotFound(url) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", url);
                let body = Json(NotFoundResponse {
                    url: format!("{} not found", url),
                });
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![msg],
                    ErrorCode::InternalError,
                )
            }
        };

        error_response(status, messages, code)
    }
}

/// Builds an [`ErrorResponse`] with the given status.
pub fn error_response(status: StatusCode, messages: Vec<String>, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        error_type: error_code.error_type().to_string(),
        error_messages: messages,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_every_message() {
        let response = AppError::Validation(vec![
            "\"from\" is required".to_string(),
            "\"subject\" is required".to_string(),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error_type"], "Bad request");
        assert_eq!(json["error_messages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_not_found_reports_url() {
        let response = AppError::NotFound("/nope".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["url"], "/nope not found");
    }

    #[tokio::test]
    async fn test_internal_error_is_500() {
        let response = AppError::InternalServerError("boom".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error_type"], "Internal server error");
        assert_eq!(json["error_messages"][0], "boom");
    }
}
