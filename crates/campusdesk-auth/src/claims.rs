//! JWT claims for admin access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in an admin access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Admin ID (subject claim)
    pub sub: String,
    /// Admin login name
    pub username: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
