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
use crate::modules::exams::model::{CreateExamEntryDto, ExamEntry, UpdateExamEntryDto};
use crate::modules::exams::service::ExamService;
use crate::state::AppState;
use crate::utils::selection::{SelectionParams, enforce_record_scope};
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/exams",
    params(SelectionParams),
    responses(
        (status = 200, description = "Exams ordered by date and time", body = Vec<ExamEntry>),
        (status = 400, description = "Branch and section missing in branch_section mode")
    ),
    tag = "Exams"
)]
#[instrument(skip(state))]
pub async fn get_exams(
    State(state): State<AppState>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Vec<ExamEntry>>, AppError> {
    let selection = params.resolve(state.portal_config.selection_mode)?;

    let mut conn = state.db.acquire().await?;
    let exams = ExamService::list(&mut conn, &selection).await?;

    Ok(Json(exams))
}

#[utoipa::path(
    get,
    path = "/api/admin/exams",
    params(SelectionParams),
    responses(
        (status = 200, description = "Exam entries for the semester", body = Vec<ExamEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn admin_list_exams(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Vec<ExamEntry>>, AppError> {
    let selection = params
        .into_selection()
        .scoped(state.portal_config.selection_mode);

    let mut conn = state.db.acquire().await?;
    let exams = ExamService::list(&mut conn, &selection).await?;

    Ok(Json(exams))
}

#[utoipa::path(
    post,
    path = "/api/admin/exams",
    request_body = CreateExamEntryDto,
    responses(
        (status = 201, description = "Exam entry created", body = ExamEntry),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_exam(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(mut dto): ValidatedJson<CreateExamEntryDto>,
) -> Result<(StatusCode, Json<ExamEntry>), AppError> {
    (dto.branch, dto.section) = enforce_record_scope(
        state.portal_config.selection_mode,
        dto.branch.take(),
        dto.section.take(),
    )?;

    let exam = ExamService::create(&state.db, dto).await?;
    track_record_written("exam", "create");

    Ok((StatusCode::CREATED, Json(exam)))
}

#[utoipa::path(
    put,
    path = "/api/admin/exams/{id}",
    params(
        ("id" = Uuid, Path, description = "Exam entry ID")
    ),
    request_body = UpdateExamEntryDto,
    responses(
        (status = 200, description = "Exam entry updated", body = ExamEntry),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exam entry not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_exam(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateExamEntryDto>,
) -> Result<Json<ExamEntry>, AppError> {
    let exam = ExamService::update(&state.db, id, dto, state.portal_config.selection_mode).await?;
    track_record_written("exam", "update");

    Ok(Json(exam))
}

#[utoipa::path(
    delete,
    path = "/api/admin/exams/{id}",
    params(
        ("id" = Uuid, Path, description = "Exam entry ID")
    ),
    responses(
        (status = 204, description = "Exam entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Exam entry not found")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_exam(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ExamService::delete(&state.db, id).await?;
    track_record_written("exam", "delete");

    Ok(StatusCode::NO_CONTENT)
}
