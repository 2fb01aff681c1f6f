use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use campusdesk_auth::{Claims, verify_token};
use campusdesk_core::AppError;

use crate::state::AppState;

/// Authenticated admin, taken from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl AdminUser {
    pub fn admin_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid admin ID in token"))
    }
}

fn bearer_claims(parts: &Parts, state: &AppState) -> Result<Claims, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

    verify_token(token, &state.jwt_config)
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already verified by `require_admin`
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(AdminUser(claims.clone()));
        }

        bearer_claims(parts, state).map(AdminUser)
    }
}

/// Rejects requests without a valid admin token before routing reaches a
/// handler, and stores the verified claims for [`AdminUser`].
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let claims = bearer_claims(&parts, &state)?;

    tracing::debug!(admin = %claims.username, "admin request authorized");
    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
