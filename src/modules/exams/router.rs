use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{admin_list_exams, create_exam, delete_exam, get_exams, update_exam};

pub fn init_exams_router() -> Router<AppState> {
    Router::new().route("/", get(get_exams))
}

pub fn init_admin_exams_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_list_exams).post(create_exam))
        .route("/{id}", put(update_exam).delete(delete_exam))
}
