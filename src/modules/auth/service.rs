use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use campusdesk_auth::create_access_token;
use campusdesk_config::JwtConfig;
use campusdesk_core::{AppError, verify_password};

use crate::modules::auth::model::{Admin, LoginRequest, LoginResponse};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct AdminWithPassword {
            id: Uuid,
            username: String,
            password: String,
            created_at: chrono::DateTime<chrono::Utc>,
        }

        let admin = sqlx::query_as::<_, AdminWithPassword>(
            "SELECT id, username, password, created_at FROM admins WHERE username = $1",
        )
        .bind(dto.username.trim())
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(&dto.password, &admin.password)? {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let access_token = create_access_token(admin.id, &admin.username, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_config.access_token_expiry,
            admin: Admin {
                id: admin.id,
                username: admin.username,
                created_at: admin.created_at,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn get_admin(db: &PgPool, id: Uuid) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>("SELECT id, username, created_at FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::unauthorized("Admin account no longer exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdesk_auth::verify_token;
    use campusdesk_core::hash_password;

    async fn insert_admin(pool: &PgPool, username: &str, password: &str) -> Uuid {
        let hashed = hash_password(password).unwrap();
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO admins (username, password) VALUES ($1, $2) RETURNING id",
        )
        .bind(username)
        .bind(hashed)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_login_issues_verifiable_token(pool: PgPool) {
        let id = insert_admin(&pool, "registrar", "s3cret-pass").await;
        let config = JwtConfig::default();

        let response = AuthService::login(&pool, login_request("registrar", "s3cret-pass"), &config)
            .await
            .unwrap();

        assert_eq!(response.admin.id, id);
        assert_eq!(response.token_type, "Bearer");
        let claims = verify_token(&response.access_token, &config).unwrap();
        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.username, "registrar");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_wrong_password_and_unknown_user_look_the_same(pool: PgPool) {
        insert_admin(&pool, "registrar", "s3cret-pass").await;
        let config = JwtConfig::default();

        let wrong = AuthService::login(&pool, login_request("registrar", "nope"), &config)
            .await
            .unwrap_err();
        let unknown = AuthService::login(&pool, login_request("ghost", "nope"), &config)
            .await
            .unwrap_err();

        assert_eq!(wrong.status.as_u16(), 401);
        assert_eq!(unknown.status.as_u16(), 401);
        assert_eq!(wrong.public_message(), unknown.public_message());
    }
}
