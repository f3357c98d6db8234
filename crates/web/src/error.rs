use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::error::StorageError;

use crate::templates::{ErrorTemplate, HtmlTemplate};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    /// Rejected form input; carries the message shown to the user.
    Validation(String),
    /// Request body could not be decoded as a form.
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            Self::Validation(msg) => {
                tracing::debug!("Registration rejected: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Malformed form body: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        let mut response = HtmlTemplate(ErrorTemplate { message }).into_response();
        if response.status().is_success() {
            *response.status_mut() = status_code;
        }
        response
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;
