use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Seconds an admin access token stays valid.
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-in-production".to_string(),
            access_token_expiry: 3600, // 1 hour
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
        }
    }
}
