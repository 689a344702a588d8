use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Invalid email request: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Provider client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Outbox error: {0}")]
    Outbox(String),
}

pub type EmailResult<T> = Result<T, EmailError>;

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Validation(messages) => AppError::Validation(messages),
            EmailError::Client(e) => AppError::InternalServerError(e.to_string()),
            EmailError::Outbox(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EmailError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
