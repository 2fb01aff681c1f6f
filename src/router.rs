use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::auth::require_admin;
use crate::modules::auth::{init_admin_profile_router, init_auth_router};
use crate::modules::chatbot::init_chatbot_router;
use crate::modules::courses::{init_admin_courses_router, init_courses_router};
use crate::modules::exams::{init_admin_exams_router, init_exams_router};
use crate::modules::seating::{init_admin_seating_router, init_seating_router};
use crate::modules::timetable::{init_admin_timetable_router, init_timetable_router};
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn init_router(state: AppState) -> Router {
    let has_seating = state.portal_config.selection_mode.has_seating();

    let mut public = Router::new()
        .nest("/auth", init_auth_router())
        .nest("/chat", init_chatbot_router())
        .nest("/timetable", init_timetable_router())
        .nest("/exams", init_exams_router())
        .nest("/courses", init_courses_router());

    let mut admin = Router::new()
        .merge(init_admin_profile_router())
        .nest("/timetable", init_admin_timetable_router())
        .nest("/exams", init_admin_exams_router())
        .nest("/courses", init_admin_courses_router());

    if has_seating {
        public = public.nest("/seating", init_seating_router());
        admin = admin.nest("/seating", init_admin_seating_router());
    }

    let admin = admin.route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/health", get(health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", public.nest("/admin", admin))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
