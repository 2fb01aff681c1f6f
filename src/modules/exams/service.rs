use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use campusdesk_config::SelectionMode;
use campusdesk_core::AppError;

use crate::modules::exams::model::{CreateExamEntryDto, ExamEntry, UpdateExamEntryDto};
use crate::utils::selection::{Selection, enforce_record_scope};

const COLUMNS: &str =
    "id, semester, branch, section, subject, date, time, classroom, created_at, updated_at";

pub struct ExamService;

impl ExamService {
    #[instrument(skip(conn))]
    pub async fn list(
        conn: &mut PgConnection,
        selection: &Selection,
    ) -> Result<Vec<ExamEntry>, AppError> {
        let exams = sqlx::query_as::<_, ExamEntry>(&format!(
            r#"SELECT {COLUMNS}
               FROM exams
               WHERE semester = $1
                 AND ($2::text IS NULL OR branch = $2)
                 AND ($3::text IS NULL OR section = $3)
               ORDER BY date, time"#
        ))
        .bind(selection.semester)
        .bind(selection.branch.as_deref())
        .bind(selection.section.as_deref())
        .fetch_all(&mut *conn)
        .await?;

        Ok(exams)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<ExamEntry, AppError> {
        sqlx::query_as::<_, ExamEntry>(&format!("SELECT {COLUMNS} FROM exams WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Exam entry not found")))
    }

    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: CreateExamEntryDto) -> Result<ExamEntry, AppError> {
        let exam = sqlx::query_as::<_, ExamEntry>(&format!(
            r#"INSERT INTO exams (semester, branch, section, subject, date, time, classroom)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester)
        .bind(&dto.branch)
        .bind(&dto.section)
        .bind(&dto.subject)
        .bind(&dto.date)
        .bind(&dto.time)
        .bind(&dto.classroom)
        .fetch_one(db)
        .await?;

        Ok(exam)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateExamEntryDto,
        mode: SelectionMode,
    ) -> Result<ExamEntry, AppError> {
        let existing = Self::get(db, id).await?;
        let (branch, section) = enforce_record_scope(
            mode,
            dto.branch.or(existing.branch),
            dto.section.or(existing.section),
        )?;

        sqlx::query_as::<_, ExamEntry>(&format!(
            r#"UPDATE exams
               SET semester = $1, branch = $2, section = $3, subject = $4, date = $5,
                   time = $6, classroom = $7, updated_at = NOW()
               WHERE id = $8
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester.unwrap_or(existing.semester))
        .bind(&branch)
        .bind(&section)
        .bind(dto.subject.unwrap_or(existing.subject))
        .bind(dto.date.unwrap_or(existing.date))
        .bind(dto.time.unwrap_or(existing.time))
        .bind(dto.classroom.unwrap_or(existing.classroom))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Exam entry not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM exams WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Exam entry not found")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(subject: &str, date: &str, time: &str) -> CreateExamEntryDto {
        CreateExamEntryDto {
            semester: 5,
            branch: Some("CSE".to_string()),
            section: Some("A".to_string()),
            subject: subject.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            classroom: "EX-1".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_orders_by_date_then_time(pool: PgPool) {
        ExamService::create(&pool, dto("Networks", "2025-06-12", "10:00 AM"))
            .await
            .unwrap();
        ExamService::create(&pool, dto("Compilers", "2025-06-10", "2:00 PM"))
            .await
            .unwrap();
        ExamService::create(&pool, dto("Graphics", "2025-06-10", "10:00 AM"))
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        let exams = ExamService::list(&mut conn, &Selection::sectioned(5, "CSE", "A"))
            .await
            .unwrap();

        let order: Vec<&str> = exams.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(order, vec!["Graphics", "Compilers", "Networks"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_respects_section(pool: PgPool) {
        ExamService::create(&pool, dto("Networks", "2025-06-12", "10:00 AM"))
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        let exams = ExamService::list(&mut conn, &Selection::sectioned(5, "CSE", "B"))
            .await
            .unwrap();
        assert!(exams.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_and_delete(pool: PgPool) {
        let exam = ExamService::create(&pool, dto("Networks", "2025-06-12", "10:00 AM"))
            .await
            .unwrap();

        let updated = ExamService::update(
            &pool,
            exam.id,
            UpdateExamEntryDto {
                classroom: Some("EX-9".to_string()),
                ..Default::default()
            },
            SelectionMode::BranchSection,
        )
        .await
        .unwrap();
        assert_eq!(updated.classroom, "EX-9");
        assert_eq!(updated.subject, "Networks");
        assert_eq!(updated.section.as_deref(), Some("A"));

        ExamService::delete(&pool, exam.id).await.unwrap();
        let err = ExamService::get(&pool, exam.id).await.unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_semester_mode_update_clears_stale_scope(pool: PgPool) {
        let exam = ExamService::create(&pool, dto("Networks", "2025-06-12", "10:00 AM"))
            .await
            .unwrap();

        let updated = ExamService::update(
            &pool,
            exam.id,
            UpdateExamEntryDto {
                section: Some("B".to_string()),
                ..Default::default()
            },
            SelectionMode::Semester,
        )
        .await
        .unwrap();

        assert_eq!(updated.branch, None);
        assert_eq!(updated.section, None);
    }
}
