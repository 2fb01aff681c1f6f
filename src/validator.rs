use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use campusdesk_core::AppError;
use campusdesk_core::errors::format_validation_errors;

/// JSON body extractor that runs `validator` rules before the handler.
///
/// Malformed JSON answers 400; rule violations answer 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_json)?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!("{}", format_validation_errors(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}

fn reject_json(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if let Some(field) = error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}
