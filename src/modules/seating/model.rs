use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use campusdesk_core::serde::deserialize_optional_semester;

use crate::utils::selection::DEFAULT_SEMESTER;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SeatingEntry {
    pub id: Uuid,
    pub semester: i32,
    pub subject: String,
    pub student_name: String,
    /// University seat number
    pub usn: String,
    pub classroom: String,
    pub seat_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeatingFilterParams {
    /// Semester number, defaults to 1
    #[serde(default, deserialize_with = "deserialize_optional_semester")]
    pub semester: Option<i32>,
}

impl SeatingFilterParams {
    pub fn semester(&self) -> i32 {
        self.semester.unwrap_or(DEFAULT_SEMESTER)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSeatingEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: i32,
    #[validate(length(min = 1, max = 200, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 200, message = "student_name is required"))]
    pub student_name: String,
    #[validate(length(min = 1, max = 32, message = "usn is required"))]
    pub usn: String,
    #[validate(length(min = 1, max = 64, message = "classroom is required"))]
    pub classroom: String,
    #[validate(length(min = 1, max = 16, message = "seat_number is required"))]
    pub seat_number: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSeatingEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub student_name: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub usn: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub classroom: Option<String>,
    #[validate(length(min = 1, max = 16))]
    pub seat_number: Option<String>,
}
