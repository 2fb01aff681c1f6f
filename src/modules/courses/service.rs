use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use campusdesk_config::SelectionMode;
use campusdesk_core::AppError;

use crate::modules::courses::model::{CourseEntry, CreateCourseEntryDto, UpdateCourseEntryDto};
use crate::utils::selection::{CourseScope, enforce_course_scope};

const COLUMNS: &str = "id, semester, branch, course_name, duration, fee, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    /// Courses for a semester or a branch, ordered by name.
    #[instrument(skip(conn))]
    pub async fn list(
        conn: &mut PgConnection,
        scope: &CourseScope,
    ) -> Result<Vec<CourseEntry>, AppError> {
        let key = match scope {
            CourseScope::Semester(_) => "semester",
            CourseScope::Branch(_) => "branch",
        };
        let sql = format!("SELECT {COLUMNS} FROM courses WHERE {key} = $1 ORDER BY course_name");

        let query = sqlx::query_as::<_, CourseEntry>(&sql);
        let query = match scope {
            CourseScope::Semester(semester) => query.bind(*semester),
            CourseScope::Branch(branch) => query.bind(branch.as_str()),
        };

        Ok(query.fetch_all(&mut *conn).await?)
    }

    #[instrument(skip(conn))]
    pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<CourseEntry>, AppError> {
        let courses = sqlx::query_as::<_, CourseEntry>(&format!(
            "SELECT {COLUMNS} FROM courses ORDER BY course_name"
        ))
        .fetch_all(&mut *conn)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<CourseEntry, AppError> {
        sqlx::query_as::<_, CourseEntry>(&format!("SELECT {COLUMNS} FROM courses WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateCourseEntryDto) -> Result<CourseEntry, AppError> {
        let course = sqlx::query_as::<_, CourseEntry>(&format!(
            r#"INSERT INTO courses (semester, branch, course_name, duration, fee)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester)
        .bind(&dto.branch)
        .bind(&dto.course_name)
        .bind(&dto.duration)
        .bind(&dto.fee)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseEntryDto,
        mode: SelectionMode,
    ) -> Result<CourseEntry, AppError> {
        let existing = Self::get(db, id).await?;
        let (semester, branch) = enforce_course_scope(
            mode,
            dto.semester.or(existing.semester),
            dto.branch.or(existing.branch),
        )?;

        sqlx::query_as::<_, CourseEntry>(&format!(
            r#"UPDATE courses
               SET semester = $1, branch = $2, course_name = $3, duration = $4, fee = $5,
                   updated_at = NOW()
               WHERE id = $6
               RETURNING {COLUMNS}"#
        ))
        .bind(semester)
        .bind(&branch)
        .bind(dto.course_name.unwrap_or(existing.course_name))
        .bind(dto.duration.or(existing.duration))
        .bind(dto.fee.or(existing.fee))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Course not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Course not found")));
        }

        Ok(())
    }
}
