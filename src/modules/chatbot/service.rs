use tracing::instrument;

use campusdesk_config::SelectionMode;
use campusdesk_core::AppError;

use crate::metrics::track_chat_query;
use crate::modules::chatbot::intent::{
    Lookup, MISSING_CONTEXT_WARNING, detect_intent, help_message, plan_lookup,
};
use crate::modules::chatbot::render;
use crate::modules::chatbot::source::RecordSource;
use crate::modules::timetable::service::sort_by_week;
use crate::utils::selection::{CourseScope, Selection};

pub struct ChatbotService;

impl ChatbotService {
    /// Answers one chat message for a selection.
    ///
    /// Reads at most one record collection and never writes. Missing
    /// branch/section in branch_section mode is answered before `source` is
    /// touched.
    #[instrument(skip(source, message), fields(intent = tracing::field::Empty))]
    pub async fn answer_query<S>(
        source: &mut S,
        message: &str,
        selection: &Selection,
        mode: SelectionMode,
    ) -> Result<String, AppError>
    where
        S: RecordSource + Send,
    {
        let Some(intent) = detect_intent(message, mode) else {
            track_chat_query("help");
            return Ok(help_message(mode).to_string());
        };
        tracing::Span::current().record("intent", intent.as_str());

        let Some(lookup) = plan_lookup(intent, selection.clone(), mode) else {
            track_chat_query("missing_context");
            return Ok(MISSING_CONTEXT_WARNING.to_string());
        };

        track_chat_query(intent.as_str());
        let context = selection.describe(mode);

        match lookup {
            Lookup::Timetable(selection) => {
                let mut entries = source.timetable(&selection).await?;
                if entries.is_empty() {
                    return render::not_found("timetable", &context);
                }
                sort_by_week(&mut entries);
                render::timetable(&context, &entries, mode)
            }
            Lookup::Exams(selection) => {
                let exams = source.exams(&selection).await?;
                if exams.is_empty() {
                    return render::not_found("exams", &context);
                }
                render::exams(&context, &exams, mode)
            }
            Lookup::Courses(scope) => {
                let courses = source.courses(&scope).await?;
                if courses.is_empty() {
                    return Ok(render::NO_COURSES.to_string());
                }
                render::courses(&course_label(&scope), &courses, mode)
            }
            Lookup::Seating(semester) => {
                let seats = source.seating(semester).await?;
                if seats.is_empty() {
                    return render::not_found("seating", &context);
                }
                render::seating(&context, &seats)
            }
        }
    }
}

fn course_label(scope: &CourseScope) -> String {
    match scope {
        CourseScope::Semester(semester) => format!("Semester {}", semester),
        CourseScope::Branch(branch) => branch.clone(),
    }
}
