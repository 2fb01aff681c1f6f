//! Application error type.
//!
//! Every handler and service returns `Result<_, AppError>`. The error carries
//! the HTTP status to answer with and the underlying [`anyhow::Error`].
//! Client errors (4xx) echo their message in the JSON body; server errors
//! (5xx) are logged with full detail and answered with a generic message so
//! storage faults never reach the caller.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(message.into()))
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Message safe to show to the caller.
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:#}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(json!({
            "error": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Flattens validator output into a single comma separated message.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
