use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use campusdesk_core::normalize_day;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TimetableEntry {
    pub id: Uuid,
    pub semester: i32,
    pub branch: Option<String>,
    pub section: Option<String>,
    /// Canonical weekday name, `Monday` .. `Sunday`
    pub day: String,
    /// Display string as entered, e.g. `8:55 AM - 9:55 AM`
    pub time_range: String,
    /// Sort key derived from `time_range`, `HH:MM` 24-hour
    pub start_time: String,
    pub subject: String,
    pub classroom: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTimetableEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: i32,
    #[validate(length(min = 1, max = 32))]
    pub branch: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub section: Option<String>,
    #[validate(custom(function = "validate_day"))]
    pub day: String,
    #[validate(length(min = 1, max = 64, message = "time_range is required"))]
    pub time_range: String,
    #[validate(length(min = 1, max = 200, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 64, message = "classroom is required"))]
    pub classroom: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTimetableEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, max = 32))]
    pub branch: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub section: Option<String>,
    #[validate(custom(function = "validate_day"))]
    pub day: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub time_range: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub classroom: Option<String>,
}

pub fn validate_day(day: &str) -> Result<(), ValidationError> {
    match normalize_day(day) {
        Some(_) => Ok(()),
        None => {
            let mut error = ValidationError::new("day");
            error.message = Some("day must be a weekday name such as Monday".into());
            Err(error)
        }
    }
}
