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
use crate::modules::timetable::model::{
    CreateTimetableEntryDto, TimetableEntry, UpdateTimetableEntryDto,
};
use crate::modules::timetable::service::TimetableService;
use crate::state::AppState;
use crate::utils::selection::{SelectionParams, enforce_record_scope};
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/timetable",
    params(SelectionParams),
    responses(
        (status = 200, description = "Timetable in week order", body = Vec<TimetableEntry>),
        (status = 400, description = "Branch and section missing in branch_section mode")
    ),
    tag = "Timetable"
)]
#[instrument(skip(state))]
pub async fn get_timetable(
    State(state): State<AppState>,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let selection = params.resolve(state.portal_config.selection_mode)?;

    let mut conn = state.db.acquire().await?;
    let entries = TimetableService::list(&mut conn, &selection).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/admin/timetable",
    params(SelectionParams),
    responses(
        (status = 200, description = "Timetable entries for the semester", body = Vec<TimetableEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn admin_list_timetable(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(params): Query<SelectionParams>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let selection = params
        .into_selection()
        .scoped(state.portal_config.selection_mode);

    let mut conn = state.db.acquire().await?;
    let entries = TimetableService::list(&mut conn, &selection).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/admin/timetable",
    request_body = CreateTimetableEntryDto,
    responses(
        (status = 201, description = "Timetable entry created", body = TimetableEntry),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_timetable_entry(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(mut dto): ValidatedJson<CreateTimetableEntryDto>,
) -> Result<(StatusCode, Json<TimetableEntry>), AppError> {
    (dto.branch, dto.section) = enforce_record_scope(
        state.portal_config.selection_mode,
        dto.branch.take(),
        dto.section.take(),
    )?;

    let entry = TimetableService::create(&state.db, dto).await?;
    track_record_written("timetable", "create");

    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    put,
    path = "/api/admin/timetable/{id}",
    params(
        ("id" = Uuid, Path, description = "Timetable entry ID")
    ),
    request_body = UpdateTimetableEntryDto,
    responses(
        (status = 200, description = "Timetable entry updated", body = TimetableEntry),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Timetable entry not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_timetable_entry(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTimetableEntryDto>,
) -> Result<Json<TimetableEntry>, AppError> {
    let entry = TimetableService::update(&state.db, id, dto, state.portal_config.selection_mode).await?;
    track_record_written("timetable", "update");

    Ok(Json(entry))
}

#[utoipa::path(
    delete,
    path = "/api/admin/timetable/{id}",
    params(
        ("id" = Uuid, Path, description = "Timetable entry ID")
    ),
    responses(
        (status = 204, description = "Timetable entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Timetable entry not found")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_timetable_entry(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TimetableService::delete(&state.db, id).await?;
    track_record_written("timetable", "delete");

    Ok(StatusCode::NO_CONTENT)
}
