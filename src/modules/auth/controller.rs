use axum::{Json, extract::State};
use tracing::instrument;

use campusdesk_core::AppError;

use crate::metrics::track_admin_login;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{Admin, LoginRequest, LoginResponse};
use super::service::AuthService;

/// Exchange admin credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    match AuthService::login(&state.db, dto, &state.jwt_config).await {
        Ok(response) => {
            track_admin_login("success");
            Ok(Json(response))
        }
        Err(err) => {
            track_admin_login("failure");
            Err(err)
        }
    }
}

/// Profile of the admin behind the bearer token
#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Current admin", body = Admin),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_current_admin(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<Admin>, AppError> {
    let profile = AuthService::get_admin(&state.db, admin.admin_id()?).await?;
    Ok(Json(profile))
}
