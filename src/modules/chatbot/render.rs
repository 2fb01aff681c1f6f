//! Reply fragments. Every interpolated value passes through askama's HTML
//! escaper, the plain-text templates included, because the chat widget
//! inserts replies as markup.

use askama::Template;

use campusdesk_config::SelectionMode;
use campusdesk_core::{AppError, normalize_day};

use crate::modules::courses::CourseEntry;
use crate::modules::exams::ExamEntry;
use crate::modules::seating::SeatingEntry;
use crate::modules::timetable::TimetableEntry;

const MISSING_VALUE: &str = "-";

/// Consecutive timetable rows sharing one day label.
pub struct DayGroup<'a> {
    pub day: &'a str,
    pub rows: Vec<&'a TimetableEntry>,
}

pub struct CourseRow<'a> {
    pub name: &'a str,
    pub duration: &'a str,
    pub fee: &'a str,
}

impl<'a> From<&'a CourseEntry> for CourseRow<'a> {
    fn from(course: &'a CourseEntry) -> Self {
        Self {
            name: &course.course_name,
            duration: course.duration.as_deref().unwrap_or(MISSING_VALUE),
            fee: course.fee.as_deref().unwrap_or(MISSING_VALUE),
        }
    }
}

#[derive(Template)]
#[template(path = "chat/timetable.html")]
struct TimetableTable<'a> {
    context: &'a str,
    groups: Vec<DayGroup<'a>>,
}

#[derive(Template)]
#[template(path = "chat/exams.html")]
struct ExamsTable<'a> {
    context: &'a str,
    exams: &'a [ExamEntry],
}

#[derive(Template)]
#[template(path = "chat/exams.txt", escape = "html")]
struct ExamsText<'a> {
    context: &'a str,
    exams: &'a [ExamEntry],
}

#[derive(Template)]
#[template(path = "chat/courses.html")]
struct CoursesTable<'a> {
    context: &'a str,
    courses: Vec<CourseRow<'a>>,
}

#[derive(Template)]
#[template(path = "chat/courses.txt", escape = "html")]
struct CoursesText<'a> {
    context: &'a str,
    courses: Vec<CourseRow<'a>>,
}

#[derive(Template)]
#[template(path = "chat/seating.html")]
struct SeatingTable<'a> {
    context: &'a str,
    seats: &'a [SeatingEntry],
}

#[derive(Template)]
#[template(source = "No {{ what }} found for {{ context }}.", ext = "html")]
struct NotFound<'a> {
    what: &'a str,
    context: &'a str,
}

#[derive(Template)]
#[template(
    source = "Sorry, something went wrong while answering your question. Please try again later.\
{% if let Some(detail) = detail %} ({{ detail }}){% endif %}",
    ext = "html"
)]
struct Fault<'a> {
    detail: Option<&'a str>,
}

pub const NO_COURSES: &str = "No course details found.";

fn finish(rendered: askama::Result<String>) -> Result<String, AppError> {
    rendered
        .map(|s| s.trim_end().to_string())
        .map_err(AppError::internal)
}

/// Canonical weekday name, or the stored text when it is not a weekday.
fn day_label(day: &str) -> &str {
    normalize_day(day).unwrap_or_else(|| day.trim())
}

/// Semester mode merges consecutive rows of the same day under one label;
/// branch_section mode gives every row its own day cell.
pub fn group_by_day(entries: &[TimetableEntry], mode: SelectionMode) -> Vec<DayGroup<'_>> {
    let merge = match mode {
        SelectionMode::Semester => true,
        SelectionMode::BranchSection => false,
    };
    let mut groups: Vec<DayGroup<'_>> = Vec::new();

    for entry in entries {
        let day = day_label(&entry.day);
        match groups.last_mut() {
            Some(group) if merge && group.day == day => group.rows.push(entry),
            _ => groups.push(DayGroup {
                day,
                rows: vec![entry],
            }),
        }
    }

    groups
}

pub fn timetable(
    context: &str,
    entries: &[TimetableEntry],
    mode: SelectionMode,
) -> Result<String, AppError> {
    finish(
        TimetableTable {
            context,
            groups: group_by_day(entries, mode),
        }
        .render(),
    )
}

pub fn exams(context: &str, exams: &[ExamEntry], mode: SelectionMode) -> Result<String, AppError> {
    match mode {
        SelectionMode::Semester => finish(ExamsTable { context, exams }.render()),
        SelectionMode::BranchSection => finish(ExamsText { context, exams }.render()),
    }
}

pub fn courses(
    context: &str,
    courses: &[CourseEntry],
    mode: SelectionMode,
) -> Result<String, AppError> {
    let rows = || courses.iter().map(CourseRow::from).collect::<Vec<_>>();
    match mode {
        SelectionMode::Semester => finish(
            CoursesTable {
                context,
                courses: rows(),
            }
            .render(),
        ),
        SelectionMode::BranchSection => finish(
            CoursesText {
                context,
                courses: rows(),
            }
            .render(),
        ),
    }
}

pub fn seating(context: &str, seats: &[SeatingEntry]) -> Result<String, AppError> {
    finish(SeatingTable { context, seats }.render())
}

/// `No <what> found for <context>.`
pub fn not_found(what: &str, context: &str) -> Result<String, AppError> {
    finish(NotFound { what, context }.render())
}

/// Generic apology, optionally followed by the escaped fault text.
pub fn fault(detail: Option<&str>) -> String {
    Fault { detail }.render().unwrap_or_else(|_| {
        "Sorry, something went wrong while answering your question. Please try again later."
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdesk_core::compute_start_time_key;
    use chrono::Utc;
    use uuid::Uuid;

    fn slot(day: &str, time_range: &str, subject: &str) -> TimetableEntry {
        TimetableEntry {
            id: Uuid::new_v4(),
            semester: 3,
            branch: None,
            section: None,
            day: day.to_string(),
            time_range: time_range.to_string(),
            start_time: compute_start_time_key(time_range),
            subject: subject.to_string(),
            classroom: "LH-201".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn exam(subject: &str) -> ExamEntry {
        ExamEntry {
            id: Uuid::new_v4(),
            semester: 3,
            branch: Some("CSE".to_string()),
            section: Some("A".to_string()),
            subject: subject.to_string(),
            date: "2025-06-10".to_string(),
            time: "10:00 AM".to_string(),
            classroom: "EX-1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn week() -> Vec<TimetableEntry> {
        vec![
            slot("Monday", "8:55 AM - 9:55 AM", "Maths"),
            slot("Monday", "10:00 AM - 11:00 AM", "Physics"),
            slot("Monday", "1:55 PM - 2:55 PM", "Chemistry"),
            slot("Tuesday", "8:55 AM - 9:55 AM", "English"),
        ]
    }

    #[test]
    fn test_grouping_merges_consecutive_days_in_semester_mode() {
        let entries = week();
        let groups = group_by_day(&entries, SelectionMode::Semester);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, "Monday");
        assert_eq!(groups[0].rows.len(), 3);
        assert_eq!(groups[1].rows.len(), 1);
    }

    #[test]
    fn test_grouping_keeps_rows_separate_in_branch_mode() {
        let entries = week();
        let groups = group_by_day(&entries, SelectionMode::BranchSection);
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.rows.len() == 1));
    }

    #[test]
    fn test_timetable_labels_each_day_once() {
        let html = timetable("Semester 3", &week(), SelectionMode::Semester).unwrap();

        assert!(html.starts_with("<h3>📅 Timetable for Semester 3</h3>"));
        assert_eq!(html.matches(">Monday</td>").count(), 1);
        assert_eq!(html.matches(">Tuesday</td>").count(), 1);
        assert!(html.contains(r#"rowspan="3""#));
        assert!(html.contains(r#"rowspan="1""#));
        assert_eq!(html.matches("<tr>").count(), 4);
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_day_spellings_share_one_label() {
        let entries = vec![
            slot("Monday", "8:00 AM - 9:00 AM", "Maths"),
            slot("monday", "9:00 AM - 10:00 AM", "Physics"),
            slot(" MON ", "10:00 AM - 11:00 AM", "Chemistry"),
            slot("Funday", "11:00 AM - 12:00 PM", "Sports"),
        ];

        let groups = group_by_day(&entries, SelectionMode::Semester);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, "Monday");
        assert_eq!(groups[0].rows.len(), 3);
        assert_eq!(groups[1].day, "Funday");

        let html = timetable("Semester 3", &entries, SelectionMode::Semester).unwrap();
        assert_eq!(html.matches(">Monday</td>").count(), 1);
        assert!(!html.contains(">monday</td>"));
    }

    #[test]
    fn test_branch_mode_timetable_repeats_day_cells() {
        let html = timetable("CSE Semester 3 Section A", &week(), SelectionMode::BranchSection)
            .unwrap();
        assert_eq!(html.matches(">Monday</td>").count(), 3);
        assert!(!html.contains(r#"rowspan="3""#));
    }

    #[test]
    fn test_stored_values_are_escaped() {
        let mut entries = week();
        entries[0].subject = "<script>alert('x')</script>".to_string();
        let html = timetable("Semester 3", &entries, SelectionMode::Semester).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;alert(&#39;x&#39;)&#60;/script&#62;"));
    }

    #[test]
    fn test_plain_text_exams_are_escaped_too() {
        let text = exams(
            "CSE Semester 3 Section A",
            &[exam("Networks & <b>Security</b>")],
            SelectionMode::BranchSection,
        )
        .unwrap();

        assert!(text.starts_with("📝 Exams for CSE Semester 3 Section A:"));
        assert!(text.contains("Networks &#38; &#60;b&#62;Security&#60;/b&#62;"));
        assert!(!text.contains("<table"));
    }

    #[test]
    fn test_plain_text_exams_one_line_each() {
        let text = exams(
            "CSE Semester 3 Section A",
            &[exam("Networks"), exam("Compilers")],
            SelectionMode::BranchSection,
        )
        .unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_courses_fill_missing_columns() {
        let course = CourseEntry {
            id: Uuid::new_v4(),
            semester: Some(1),
            branch: None,
            course_name: "Physics".to_string(),
            duration: None,
            fee: Some("25,000".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let html = courses("Semester 1", &[course], SelectionMode::Semester).unwrap();
        assert!(html.contains(r#"<td style="padding:6px">-</td>"#));
        assert!(html.contains("25,000"));
    }

    #[test]
    fn test_not_found_escapes_context() {
        assert_eq!(
            not_found("exams", "Semester 2").unwrap(),
            "No exams found for Semester 2."
        );
        let reply = not_found("timetable", "<i>CSE</i> Semester 1 Section A").unwrap();
        assert!(reply.contains("&#60;i&#62;CSE&#60;/i&#62;"));
        assert!(!reply.contains("<i>"));
    }

    #[test]
    fn test_fault_reply() {
        assert_eq!(
            fault(None),
            "Sorry, something went wrong while answering your question. Please try again later."
        );
        assert!(fault(Some("pool <timed> out")).ends_with("(pool &#60;timed&#62; out)"));
    }
}
