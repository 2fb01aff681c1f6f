//! Creation and verification of admin access tokens.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use campusdesk_config::JwtConfig;
use campusdesk_core::AppError;

use crate::claims::Claims;

/// Signs an access token for the given admin.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    admin_id: Uuid,
    username: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: admin_id.to_string(),
        username: username.to_string(),
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Checks signature and expiry and returns the claims.
///
/// # Errors
///
/// Returns 401 for a bad signature, an expired token or a malformed token.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
