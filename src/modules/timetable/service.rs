use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use campusdesk_config::SelectionMode;
use campusdesk_core::weekday::day_order_sql;
use campusdesk_core::{AppError, compute_start_time_key, day_rank, normalize_day};

use crate::modules::timetable::model::{
    CreateTimetableEntryDto, TimetableEntry, UpdateTimetableEntryDto,
};
use crate::utils::selection::{Selection, enforce_record_scope};

const COLUMNS: &str = "id, semester, branch, section, day, time_range, start_time, subject, classroom, created_at, updated_at";

pub struct TimetableService;

impl TimetableService {
    /// Entries for a selection in week order, then by start time.
    ///
    /// `branch`/`section` of `None` match every row of the semester.
    #[instrument(skip(conn))]
    pub async fn list(
        conn: &mut PgConnection,
        selection: &Selection,
    ) -> Result<Vec<TimetableEntry>, AppError> {
        let sql = format!(
            r#"SELECT {COLUMNS}
               FROM timetable
               WHERE semester = $1
                 AND ($2::text IS NULL OR branch = $2)
                 AND ($3::text IS NULL OR section = $3)
               ORDER BY {}, start_time, subject"#,
            day_order_sql("day")
        );

        let entries = sqlx::query_as::<_, TimetableEntry>(&sql)
            .bind(selection.semester)
            .bind(selection.branch.as_deref())
            .bind(selection.section.as_deref())
            .fetch_all(&mut *conn)
            .await?;

        Ok(entries)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<TimetableEntry, AppError> {
        sqlx::query_as::<_, TimetableEntry>(&format!(
            "SELECT {COLUMNS} FROM timetable WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Timetable entry not found")))
    }

    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        dto: CreateTimetableEntryDto,
    ) -> Result<TimetableEntry, AppError> {
        let day = canonical_day(&dto.day)?;
        let start_time = compute_start_time_key(&dto.time_range);

        let entry = sqlx::query_as::<_, TimetableEntry>(&format!(
            r#"INSERT INTO timetable (semester, branch, section, day, time_range, start_time, subject, classroom)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester)
        .bind(&dto.branch)
        .bind(&dto.section)
        .bind(day)
        .bind(&dto.time_range)
        .bind(&start_time)
        .bind(&dto.subject)
        .bind(&dto.classroom)
        .fetch_one(db)
        .await?;

        Ok(entry)
    }

    /// Applies the present fields and re-derives `start_time` from the
    /// resulting `time_range`. The merged branch/section must satisfy `mode`.
    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTimetableEntryDto,
        mode: SelectionMode,
    ) -> Result<TimetableEntry, AppError> {
        let existing = Self::get(db, id).await?;
        let (branch, section) = enforce_record_scope(
            mode,
            dto.branch.or(existing.branch),
            dto.section.or(existing.section),
        )?;

        let day = match dto.day.as_deref() {
            Some(day) => canonical_day(day)?.to_string(),
            None => existing.day,
        };
        let time_range = dto.time_range.unwrap_or(existing.time_range);
        let start_time = compute_start_time_key(&time_range);

        let entry = sqlx::query_as::<_, TimetableEntry>(&format!(
            r#"UPDATE timetable
               SET semester = $1, branch = $2, section = $3, day = $4, time_range = $5,
                   start_time = $6, subject = $7, classroom = $8, updated_at = NOW()
               WHERE id = $9
               RETURNING {COLUMNS}"#
        ))
        .bind(dto.semester.unwrap_or(existing.semester))
        .bind(&branch)
        .bind(&section)
        .bind(&day)
        .bind(&time_range)
        .bind(&start_time)
        .bind(dto.subject.unwrap_or(existing.subject))
        .bind(dto.classroom.unwrap_or(existing.classroom))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Timetable entry not found")))?;

        Ok(entry)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM timetable WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Timetable entry not found")));
        }

        Ok(())
    }
}

fn canonical_day(day: &str) -> Result<&'static str, AppError> {
    normalize_day(day)
        .ok_or_else(|| AppError::unprocessable(anyhow!("day must be a weekday name such as Monday")))
}

/// Stable sort into (week position, start time) order.
pub fn sort_by_week(entries: &mut [TimetableEntry]) {
    entries.sort_by(|a, b| {
        day_rank(&a.day)
            .cmp(&day_rank(&b.day))
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(day: &str, time_range: &str, subject: &str) -> TimetableEntry {
        TimetableEntry {
            id: Uuid::new_v4(),
            semester: 3,
            branch: None,
            section: None,
            day: day.to_string(),
            time_range: time_range.to_string(),
            start_time: compute_start_time_key(time_range),
            subject: subject.to_string(),
            classroom: "LH-1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn seed(pool: &PgPool, day: &str, time_range: &str, subject: &str) -> TimetableEntry {
        TimetableService::create(
            pool,
            CreateTimetableEntryDto {
                semester: 3,
                branch: None,
                section: None,
                day: day.to_string(),
                time_range: time_range.to_string(),
                subject: subject.to_string(),
                classroom: "LH-201".to_string(),
            },
        )
        .await
        .unwrap()
    }

    #[test]
    fn test_sort_by_week_orders_days_then_times() {
        let mut entries = vec![
            entry("Friday", "9:00 AM - 10:00 AM", "Physics"),
            entry("Monday", "1:55 PM - 2:55 PM", "Maths"),
            entry("Holiday", "8:00 AM - 9:00 AM", "Sports"),
            entry("Monday", "8:55 AM - 9:55 AM", "Chemistry"),
        ];
        sort_by_week(&mut entries);

        let order: Vec<&str> = entries.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(order, vec!["Chemistry", "Maths", "Physics", "Sports"]);
    }

    #[test]
    fn test_unparseable_time_sorts_first_within_day() {
        let mut entries = vec![
            entry("Tuesday", "10:00 AM - 11:00 AM", "Late"),
            entry("Tuesday", "whenever", "Typo"),
        ];
        sort_by_week(&mut entries);
        assert_eq!(entries[0].subject, "Typo");
        assert_eq!(entries[0].start_time, "00:00");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_derives_start_time_and_normalizes_day(pool: PgPool) {
        let created = seed(&pool, "wed", "1:55 PM - 2:55 PM", "DBMS").await;

        assert_eq!(created.day, "Wednesday");
        assert_eq!(created.start_time, "13:55");
        assert_eq!(created.time_range, "1:55 PM - 2:55 PM");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_with_garbage_time_uses_sentinel(pool: PgPool) {
        let created = seed(&pool, "Monday", "garbage", "Lab").await;
        assert_eq!(created.start_time, "00:00");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_orders_by_week_and_start_time(pool: PgPool) {
        seed(&pool, "Friday", "9:00 AM - 10:00 AM", "Physics").await;
        seed(&pool, "Monday", "1:55 PM - 2:55 PM", "Maths").await;
        seed(&pool, "Monday", "8:55 AM - 9:55 AM", "Chemistry").await;
        seed(&pool, "Tuesday", "10:00 - 11:00", "English").await;

        let mut conn = pool.acquire().await.unwrap();
        let entries = TimetableService::list(&mut conn, &Selection::semester(3))
            .await
            .unwrap();

        let order: Vec<&str> = entries.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(order, vec!["Chemistry", "Maths", "English", "Physics"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_filters_by_semester(pool: PgPool) {
        seed(&pool, "Monday", "9:00 AM - 10:00 AM", "Maths").await;

        let mut conn = pool.acquire().await.unwrap();
        let entries = TimetableService::list(&mut conn, &Selection::semester(5))
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_rederives_start_time(pool: PgPool) {
        let created = seed(&pool, "Monday", "8:55 AM - 9:55 AM", "Maths").await;

        let updated = TimetableService::update(
            &pool,
            created.id,
            UpdateTimetableEntryDto {
                time_range: Some("2.10PM-3.10PM".to_string()),
                ..Default::default()
            },
            SelectionMode::Semester,
        )
        .await
        .unwrap();

        assert_eq!(updated.start_time, "14:10");
        assert_eq!(updated.subject, "Maths");
        assert_eq!(updated.day, "Monday");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_missing_entry_is_not_found(pool: PgPool) {
        let err = TimetableService::update(
            &pool,
            Uuid::new_v4(),
            UpdateTimetableEntryDto::default(),
            SelectionMode::Semester,
        )
        .await
        .unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_semester_mode_update_drops_branch_and_section(pool: PgPool) {
        let created = seed(&pool, "Monday", "8:55 AM - 9:55 AM", "Maths").await;

        let updated = TimetableService::update(
            &pool,
            created.id,
            UpdateTimetableEntryDto {
                branch: Some("CSE".to_string()),
                section: Some("A".to_string()),
                ..Default::default()
            },
            SelectionMode::Semester,
        )
        .await
        .unwrap();

        assert_eq!(updated.branch, None);
        assert_eq!(updated.section, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_branch_mode_update_needs_complete_scope(pool: PgPool) {
        let created = seed(&pool, "Monday", "8:55 AM - 9:55 AM", "Maths").await;

        let err = TimetableService::update(
            &pool,
            created.id,
            UpdateTimetableEntryDto {
                branch: Some("CSE".to_string()),
                ..Default::default()
            },
            SelectionMode::BranchSection,
        )
        .await
        .unwrap_err();
        assert_eq!(err.status.as_u16(), 422);

        let unchanged = TimetableService::get(&pool, created.id).await.unwrap();
        assert_eq!(unchanged.branch, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete(pool: PgPool) {
        let created = seed(&pool, "Monday", "8:55 AM - 9:55 AM", "Maths").await;

        TimetableService::delete(&pool, created.id).await.unwrap();
        let err = TimetableService::delete(&pool, created.id).await.unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
    }
}
