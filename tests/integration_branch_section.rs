mod common;

use axum::http::StatusCode;
use campusdesk::campusdesk_config::SelectionMode;
use common::{admin_token, body_json, insert_timetable_row, send, setup_test_app};
use serde_json::{Value, json};
use sqlx::PgPool;

const BRANCH: SelectionMode = SelectionMode::BranchSection;

async fn ask(app: &axum::Router, body: Value) -> String {
    let response = send(app, "POST", "/api/chat", None, Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["reply"]
        .as_str()
        .unwrap()
        .to_string()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_listing_requires_branch_and_section(pool: PgPool) {
    let app = setup_test_app(pool.clone(), BRANCH);

    let response = send(&app, "GET", "/api/timetable?semester=3&branch=CSE", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "GET", "/api/exams?semester=3", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "GET", "/api/courses?semester=3", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_timetable_is_scoped_to_section(pool: PgPool) {
    insert_timetable_row(&pool, 3, Some("CSE"), Some("A"), "Monday", "9:00 AM - 10:00 AM", "Section A").await;
    insert_timetable_row(&pool, 3, Some("CSE"), Some("B"), "Monday", "9:00 AM - 10:00 AM", "Section B").await;

    let app = setup_test_app(pool.clone(), BRANCH);
    let response = send(
        &app,
        "GET",
        "/api/timetable?semester=3&branch=CSE&section=B",
        None,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["subject"], "Section B");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seating_is_not_served(pool: PgPool) {
    let app = setup_test_app(pool.clone(), BRANCH);
    let token = admin_token(&app, &pool).await;

    let response = send(&app, "GET", "/api/seating?semester=1", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/api/admin/seating", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let reply = ask(&app, json!({ "message": "seating", "semester": 1, "branch": "CSE", "section": "A" })).await;
    assert!(reply.starts_with("I can help with"));
    assert!(reply.contains("fees"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_chat_warns_before_reading_without_context(pool: PgPool) {
    let app = setup_test_app(pool.clone(), BRANCH);

    let reply = ask(&app, json!({ "message": "timetable", "semester": 3, "branch": "CSE" })).await;
    assert_eq!(reply, "⚠️ Please select Branch, Semester, and Section first.");

    let reply = ask(&app, json!({ "message": "fees", "semester": 3 })).await;
    assert_eq!(reply, "⚠️ Please select Branch, Semester, and Section first.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_branch_courses_ignore_semester(pool: PgPool) {
    let app = setup_test_app(pool.clone(), BRANCH);
    let token = admin_token(&app, &pool).await;

    let response = send(
        &app,
        "POST",
        "/api/admin/courses",
        Some(&token),
        Some(json!({
            "branch": "ECE",
            "course_name": "B.E. Electronics",
            "duration": "4 years",
            "fee": "90000"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&app, "GET", "/api/courses?branch=ECE&semester=7", None, None).await;
    let body = body_json(response).await;
    assert_eq!(body[0]["course_name"], "B.E. Electronics");

    let reply = ask(
        &app,
        json!({ "message": "what is the fee", "semester": 2, "branch": "ECE", "section": "A" }),
    )
    .await;
    assert!(reply.contains("B.E. Electronics"));
    assert!(reply.contains("90000"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_record_write_requires_branch_and_section(pool: PgPool) {
    let app = setup_test_app(pool.clone(), BRANCH);
    let token = admin_token(&app, &pool).await;

    let response = send(
        &app,
        "POST",
        "/api/admin/timetable",
        Some(&token),
        Some(json!({
            "semester": 1,
            "branch": "CSE",
            "day": "Monday",
            "time_range": "9:00 AM - 10:00 AM",
            "subject": "Maths",
            "classroom": "R1"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
