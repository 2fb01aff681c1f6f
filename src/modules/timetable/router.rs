use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    admin_list_timetable, create_timetable_entry, delete_timetable_entry, get_timetable,
    update_timetable_entry,
};

pub fn init_timetable_router() -> Router<AppState> {
    Router::new().route("/", get(get_timetable))
}

pub fn init_admin_timetable_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_list_timetable).post(create_timetable_entry))
        .route(
            "/{id}",
            put(update_timetable_entry).delete(delete_timetable_entry),
        )
}
