#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use campusdesk::campusdesk_config::{PortalConfig, SelectionMode};
use campusdesk::campusdesk_core::hash_password;
use campusdesk::router::init_router;
use campusdesk::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "portal-admin-pass";

pub fn setup_test_app(pool: PgPool, mode: SelectionMode) -> Router {
    let mut state = AppState::with_pool(pool);
    state.portal_config = PortalConfig {
        selection_mode: mode,
        expose_chat_errors: false,
    };
    init_router(state)
}

pub async fn create_test_admin(pool: &PgPool, username: &str) -> Uuid {
    let hashed = hash_password(ADMIN_PASSWORD).unwrap();
    sqlx::query_scalar("INSERT INTO admins (username, password) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(hashed)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Creates an admin and logs in through the API.
pub async fn admin_token(app: &Router, pool: &PgPool) -> String {
    let username = format!("admin-{}", Uuid::new_v4());
    create_test_admin(pool, &username).await;

    let response = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&body).unwrap())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn insert_timetable_row(
    pool: &PgPool,
    semester: i32,
    branch: Option<&str>,
    section: Option<&str>,
    day: &str,
    time_range: &str,
    subject: &str,
) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO timetable (semester, branch, section, day, time_range, start_time, subject, classroom)
         VALUES ($1, $2, $3, $4, $5, $6, $7, 'R101')
         RETURNING id",
    )
    .bind(semester)
    .bind(branch)
    .bind(section)
    .bind(day)
    .bind(time_range)
    .bind(campusdesk::campusdesk_core::compute_start_time_key(time_range))
    .bind(subject)
    .fetch_one(pool)
    .await
    .unwrap()
}
