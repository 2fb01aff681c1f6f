use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{Admin, LoginRequest, LoginResponse};
use crate::modules::chatbot::model::{ChatReply, ChatRequest};
use crate::modules::courses::model::{
    CourseEntry, CourseFilterParams, CreateCourseEntryDto, UpdateCourseEntryDto,
};
use crate::modules::exams::model::{CreateExamEntryDto, ExamEntry, UpdateExamEntryDto};
use crate::modules::seating::model::{
    CreateSeatingEntryDto, SeatingEntry, SeatingFilterParams, UpdateSeatingEntryDto,
};
use crate::modules::timetable::model::{
    CreateTimetableEntryDto, TimetableEntry, UpdateTimetableEntryDto,
};
use crate::utils::selection::SelectionParams;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::get_current_admin,
        crate::modules::chatbot::controller::chat,
        crate::modules::timetable::controller::get_timetable,
        crate::modules::timetable::controller::admin_list_timetable,
        crate::modules::timetable::controller::create_timetable_entry,
        crate::modules::timetable::controller::update_timetable_entry,
        crate::modules::timetable::controller::delete_timetable_entry,
        crate::modules::exams::controller::get_exams,
        crate::modules::exams::controller::admin_list_exams,
        crate::modules::exams::controller::create_exam,
        crate::modules::exams::controller::update_exam,
        crate::modules::exams::controller::delete_exam,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::admin_list_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::seating::controller::get_seating,
        crate::modules::seating::controller::admin_list_seating,
        crate::modules::seating::controller::create_seating_entry,
        crate::modules::seating::controller::update_seating_entry,
        crate::modules::seating::controller::delete_seating_entry,
    ),
    components(
        schemas(
            Admin,
            LoginRequest,
            LoginResponse,
            ChatRequest,
            ChatReply,
            SelectionParams,
            TimetableEntry,
            CreateTimetableEntryDto,
            UpdateTimetableEntryDto,
            ExamEntry,
            CreateExamEntryDto,
            UpdateExamEntryDto,
            CourseEntry,
            CourseFilterParams,
            CreateCourseEntryDto,
            UpdateCourseEntryDto,
            SeatingEntry,
            SeatingFilterParams,
            CreateSeatingEntryDto,
            UpdateSeatingEntryDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin login"),
        (name = "Chatbot", description = "Keyword chatbot for students"),
        (name = "Timetable", description = "Weekly class timetable"),
        (name = "Exams", description = "Exam schedule"),
        (name = "Courses", description = "Courses, durations and fees"),
        (name = "Seating", description = "Exam seating (semester mode only)"),
        (name = "Admin", description = "Record management for administrators")
    ),
    info(
        title = "CampusDesk API",
        version = "0.1.0",
        description = "College information portal: timetable, exams, courses, seating and a keyword chatbot.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
