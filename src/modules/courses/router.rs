use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    admin_list_courses, create_course, delete_course, get_courses, update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new().route("/", get(get_courses))
}

pub fn init_admin_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_list_courses).post(create_course))
        .route("/{id}", put(update_course).delete(delete_course))
}
