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
use crate::modules::seating::model::{
    CreateSeatingEntryDto, SeatingEntry, SeatingFilterParams, UpdateSeatingEntryDto,
};
use crate::modules::seating::service::SeatingService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/seating",
    params(SeatingFilterParams),
    responses(
        (status = 200, description = "Seating ordered by subject, classroom and seat", body = Vec<SeatingEntry>)
    ),
    tag = "Seating"
)]
#[instrument(skip(state))]
pub async fn get_seating(
    State(state): State<AppState>,
    Query(filters): Query<SeatingFilterParams>,
) -> Result<Json<Vec<SeatingEntry>>, AppError> {
    let mut conn = state.db.acquire().await?;
    let seats = SeatingService::list(&mut conn, filters.semester()).await?;

    Ok(Json(seats))
}

#[utoipa::path(
    get,
    path = "/api/admin/seating",
    params(SeatingFilterParams),
    responses(
        (status = 200, description = "Seating entries for the semester", body = Vec<SeatingEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn admin_list_seating(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(filters): Query<SeatingFilterParams>,
) -> Result<Json<Vec<SeatingEntry>>, AppError> {
    let mut conn = state.db.acquire().await?;
    let seats = SeatingService::list(&mut conn, filters.semester()).await?;

    Ok(Json(seats))
}

#[utoipa::path(
    post,
    path = "/api/admin/seating",
    request_body = CreateSeatingEntryDto,
    responses(
        (status = 201, description = "Seating entry created", body = SeatingEntry),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_seating_entry(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateSeatingEntryDto>,
) -> Result<(StatusCode, Json<SeatingEntry>), AppError> {
    let seat = SeatingService::create(&state.db, dto).await?;
    track_record_written("seating", "create");

    Ok((StatusCode::CREATED, Json(seat)))
}

#[utoipa::path(
    put,
    path = "/api/admin/seating/{id}",
    params(
        ("id" = Uuid, Path, description = "Seating entry ID")
    ),
    request_body = UpdateSeatingEntryDto,
    responses(
        (status = 200, description = "Seating entry updated", body = SeatingEntry),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Seating entry not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_seating_entry(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSeatingEntryDto>,
) -> Result<Json<SeatingEntry>, AppError> {
    let seat = SeatingService::update(&state.db, id, dto).await?;
    track_record_written("seating", "update");

    Ok(Json(seat))
}

#[utoipa::path(
    delete,
    path = "/api/admin/seating/{id}",
    params(
        ("id" = Uuid, Path, description = "Seating entry ID")
    ),
    responses(
        (status = 204, description = "Seating entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Seating entry not found")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_seating_entry(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    SeatingService::delete(&state.db, id).await?;
    track_record_written("seating", "delete");

    Ok(StatusCode::NO_CONTENT)
}
