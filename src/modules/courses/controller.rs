use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use campusdesk_core::AppError;

use crate::metrics::track_record_written;
use crate::middleware::auth::AdminUser;
use crate::modules::courses::model::{
    CourseEntry, CourseFilterParams, CreateCourseEntryDto, UpdateCourseEntryDto,
};
use crate::modules::courses::service::CourseService;
use crate::state::AppState;
use crate::utils::selection::{SelectionParams, enforce_course_scope};
use crate::validator::ValidatedJson;

fn selection_params(filters: CourseFilterParams) -> SelectionParams {
    SelectionParams {
        semester: filters.semester,
        branch: filters.branch,
        section: None,
    }
}

#[utoipa::path(
    get,
    path = "/api/courses",
    params(CourseFilterParams),
    responses(
        (status = 200, description = "Courses ordered by name", body = Vec<CourseEntry>),
        (status = 400, description = "Branch missing in branch_section mode")
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(filters): Query<CourseFilterParams>,
) -> Result<Json<Vec<CourseEntry>>, AppError> {
    let scope = selection_params(filters).resolve_course_scope(state.portal_config.selection_mode)?;

    let mut conn = state.db.acquire().await?;
    let courses = CourseService::list(&mut conn, &scope).await?;

    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/admin/courses",
    params(CourseFilterParams),
    responses(
        (status = 200, description = "Courses in scope, or every course when no branch is given", body = Vec<CourseEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn admin_list_courses(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(filters): Query<CourseFilterParams>,
) -> Result<Json<Vec<CourseEntry>>, AppError> {
    let scope = selection_params(filters)
        .into_selection()
        .course_scope(state.portal_config.selection_mode);

    let mut conn = state.db.acquire().await?;
    let courses = match scope {
        Some(scope) => CourseService::list(&mut conn, &scope).await?,
        None => CourseService::list_all(&mut conn).await?,
    };

    Ok(Json(courses))
}

#[utoipa::path(
    post,
    path = "/api/admin/courses",
    request_body = CreateCourseEntryDto,
    responses(
        (status = 201, description = "Course created", body = CourseEntry),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_course(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(mut dto): ValidatedJson<CreateCourseEntryDto>,
) -> Result<(StatusCode, Json<CourseEntry>), AppError> {
    (dto.semester, dto.branch) = enforce_course_scope(
        state.portal_config.selection_mode,
        dto.semester,
        dto.branch.take(),
    )?;

    let course = CourseService::create(&state.db, dto).await?;
    track_record_written("course", "create");

    Ok((StatusCode::CREATED, Json(course)))
}

#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseEntryDto,
    responses(
        (status = 200, description = "Course updated", body = CourseEntry),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_course(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseEntryDto>,
) -> Result<Json<CourseEntry>, AppError> {
    let course = CourseService::update(&state.db, id, dto, state.portal_config.selection_mode).await?;
    track_record_written("course", "update");

    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/admin/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Course not found")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CourseService::delete(&state.db, id).await?;
    track_record_written("course", "delete");

    Ok(StatusCode::NO_CONTENT)
}
