//! Admin account management.

use anyhow::{Context, bail};
use sqlx::PgPool;
use uuid::Uuid;

use campusdesk_core::hash_password;

/// Inserts an admin with a bcrypt-hashed password. Fails if the username is
/// taken.
pub async fn create_admin(db: &PgPool, username: &str, password: &str) -> anyhow::Result<Uuid> {
    let username = username.trim();
    if username.is_empty() {
        bail!("username must not be empty");
    }
    if password.len() < 8 {
        bail!("password must be at least 8 characters");
    }

    let hashed = hash_password(password).map_err(|e| e.error)?;

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO admins (username, password)
         VALUES ($1, $2)
         ON CONFLICT (username) DO NOTHING
         RETURNING id",
    )
    .bind(username)
    .bind(&hashed)
    .fetch_optional(db)
    .await
    .context("failed to insert admin")?;

    match id {
        Some(id) => Ok(id),
        None => bail!("an admin named '{}' already exists", username),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdesk_core::verify_password;

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_hashes_password(pool: PgPool) {
        let id = create_admin(&pool, " registrar ", "long-enough").await.unwrap();

        let (username, stored): (String, String) =
            sqlx::query_as("SELECT username, password FROM admins WHERE id = $1")
                .bind(id)
                .fetch_one(&pool)
                .await
                .unwrap();

        assert_eq!(username, "registrar");
        assert_ne!(stored, "long-enough");
        assert!(verify_password("long-enough", &stored).unwrap());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_duplicate_username_is_rejected(pool: PgPool) {
        create_admin(&pool, "registrar", "long-enough").await.unwrap();
        let err = create_admin(&pool, "registrar", "another-pass").await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_short_password_is_rejected(pool: PgPool) {
        assert!(create_admin(&pool, "registrar", "short").await.is_err());
    }
}
