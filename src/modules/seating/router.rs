use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    admin_list_seating, create_seating_entry, delete_seating_entry, get_seating,
    update_seating_entry,
};

/// Only mounted in semester mode.
pub fn init_seating_router() -> Router<AppState> {
    Router::new().route("/", get(get_seating))
}

pub fn init_admin_seating_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_list_seating).post(create_seating_entry))
        .route(
            "/{id}",
            put(update_seating_entry).delete(delete_seating_entry),
        )
}
