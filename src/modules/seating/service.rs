use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use campusdesk_core::AppError;

use crate::modules::seating::model::{
    CreateSeatingEntryDto, SeatingEntry, UpdateSeatingEntryDto,
};

const COLUMNS: &str =
    "id, semester, subject, student_name, usn, classroom, seat_number, created_at, updated_at";

pub struct SeatingService;

impl SeatingService {
    #[instrument(skip(conn))]
    pub async fn list(
        conn: &mut PgConnection,
        semester: i32,
    ) -> Result<Vec<SeatingEntry>, AppError> {
        let seats = sqlx::query_as::<_, SeatingEntry>(&format!(
            r#"SELECT {COLUMNS}
               FROM exam_seating
               WHERE semester = $1
               ORDER BY subject, classroom, seat_number"#
        ))
        .bind(semester)
        .fetch_all(&mut *conn)
        .await?;

        Ok(seats)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<SeatingEntry, AppError> {
        sqlx::query_as::<_, SeatingEntry>(&format!(
            "SELECT {COLUMNS} FROM exam_seating WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Seating entry not found")))
    }

    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        dto: CreateSeatingEntryDto,
    ) -> Result<SeatingEntry, AppError> {
        let seat = sqlx::query_as::<_, SeatingEntry>(&format!(
            r#"INSERT INTO exam_seating (semester, subject, student_name, usn, classroom, seat_number)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester)
        .bind(&dto.subject)
        .bind(&dto.student_name)
        .bind(&dto.usn)
        .bind(&dto.classroom)
        .bind(&dto.seat_number)
        .fetch_one(db)
        .await?;

        Ok(seat)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSeatingEntryDto,
    ) -> Result<SeatingEntry, AppError> {
        let existing = Self::get(db, id).await?;

        sqlx::query_as::<_, SeatingEntry>(&format!(
            r#"UPDATE exam_seating
               SET semester = $1, subject = $2, student_name = $3, usn = $4, classroom = $5,
                   seat_number = $6, updated_at = NOW()
               WHERE id = $7
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester.unwrap_or(existing.semester))
        .bind(dto.subject.unwrap_or(existing.subject))
        .bind(dto.student_name.unwrap_or(existing.student_name))
        .bind(dto.usn.unwrap_or(existing.usn))
        .bind(dto.classroom.unwrap_or(existing.classroom))
        .bind(dto.seat_number.unwrap_or(existing.seat_number))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Seating entry not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM exam_seating WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Seating entry not found")));
        }

        Ok(())
    }
}
