use sqlx::PgPool;

use campusdesk_config::{CorsConfig, JwtConfig, PortalConfig};
use campusdesk_db::{DatabaseConfig, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub portal_config: PortalConfig,
}

impl AppState {
    /// State around an existing pool with every other setting defaulted.
    pub fn with_pool(db: PgPool) -> Self {
        Self {
            db,
            jwt_config: JwtConfig::default(),
            cors_config: CorsConfig::default(),
            portal_config: PortalConfig::default(),
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool(&DatabaseConfig::from_env()?).await?;

    Ok(AppState {
        db,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        portal_config: PortalConfig::from_env().map_err(anyhow::Error::msg)?,
    })
}
