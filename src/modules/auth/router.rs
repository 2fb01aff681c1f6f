use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_current_admin, login};

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

pub fn init_admin_profile_router() -> Router<AppState> {
    Router::new().route("/me", get(get_current_admin))
}
