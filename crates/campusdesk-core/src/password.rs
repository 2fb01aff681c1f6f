//! bcrypt helpers for admin credentials.

use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` for a wrong password and an error only when the
/// stored hash itself is unreadable.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    verify(password, hashed)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}
