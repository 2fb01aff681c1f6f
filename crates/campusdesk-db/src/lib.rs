//! # CampusDesk DB
//!
//! PostgreSQL pool construction and migrations.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 10)
//!
//! Handlers borrow connections from the pool for the length of one request.
//! A [`sqlx::pool::PoolConnection`] goes back to the pool when it is dropped,
//! so release happens on every exit path including errors.
//!
//! # Example
//!
//! ```ignore
//! use campusdesk_db::{DatabaseConfig, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! campusdesk_db::run_migrations(&pool).await?;
//! ```

use std::env;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self {
            url,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            acquire_timeout: Duration::from_secs(5),
        })
    }
}

/// Opens a PostgreSQL connection pool.
pub async fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");
    Ok(())
}
