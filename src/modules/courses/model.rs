use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use campusdesk_core::serde::{deserialize_optional_semester, deserialize_optional_trimmed};

/// A course offering. Keyed by `semester` or by `branch` depending on the
/// deployment's selection mode; at least one is always present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseEntry {
    pub id: Uuid,
    pub semester: Option<i32>,
    pub branch: Option<String>,
    pub course_name: String,
    pub duration: Option<String>,
    pub fee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseFilterParams {
    /// Semester number (semester mode), defaults to 1
    #[serde(default, deserialize_with = "deserialize_optional_semester")]
    pub semester: Option<i32>,
    /// Branch code (branch_section mode)
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub branch: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, max = 32))]
    pub branch: Option<String>,
    #[validate(length(min = 1, max = 200, message = "course_name is required"))]
    pub course_name: String,
    #[validate(length(max = 64))]
    pub duration: Option<String>,
    #[validate(length(max = 64))]
    pub fee: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, max = 32))]
    pub branch: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub course_name: Option<String>,
    #[validate(length(max = 64))]
    pub duration: Option<String>,
    #[validate(length(max = 64))]
    pub fee: Option<String>,
}
