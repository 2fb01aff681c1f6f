use std::future::Future;

use sqlx::PgConnection;

use campusdesk_core::AppError;

use crate::modules::courses::{CourseEntry, service::CourseService};
use crate::modules::exams::{ExamEntry, service::ExamService};
use crate::modules::seating::{SeatingEntry, service::SeatingService};
use crate::modules::timetable::{TimetableEntry, service::TimetableService};
use crate::utils::selection::{CourseScope, Selection};

/// Read-only access to portal records, already ordered for display.
pub trait RecordSource {
    fn timetable(
        &mut self,
        selection: &Selection,
    ) -> impl Future<Output = Result<Vec<TimetableEntry>, AppError>> + Send;

    fn exams(
        &mut self,
        selection: &Selection,
    ) -> impl Future<Output = Result<Vec<ExamEntry>, AppError>> + Send;

    fn courses(
        &mut self,
        scope: &CourseScope,
    ) -> impl Future<Output = Result<Vec<CourseEntry>, AppError>> + Send;

    fn seating(
        &mut self,
        semester: i32,
    ) -> impl Future<Output = Result<Vec<SeatingEntry>, AppError>> + Send;
}

/// Reads over one borrowed connection. The caller owns the pooled
/// connection, so it goes back to the pool when the caller drops it.
pub struct PgRecordSource<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgRecordSource<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

impl RecordSource for PgRecordSource<'_> {
    fn timetable(
        &mut self,
        selection: &Selection,
    ) -> impl Future<Output = Result<Vec<TimetableEntry>, AppError>> + Send {
        TimetableService::list(&mut *self.conn, selection)
    }

    fn exams(
        &mut self,
        selection: &Selection,
    ) -> impl Future<Output = Result<Vec<ExamEntry>, AppError>> + Send {
        ExamService::list(&mut *self.conn, selection)
    }

    fn courses(
        &mut self,
        scope: &CourseScope,
    ) -> impl Future<Output = Result<Vec<CourseEntry>, AppError>> + Send {
        CourseService::list(&mut *self.conn, scope)
    }

    fn seating(
        &mut self,
        semester: i32,
    ) -> impl Future<Output = Result<Vec<SeatingEntry>, AppError>> + Send {
        SeatingService::list(&mut *self.conn, semester)
    }
}
