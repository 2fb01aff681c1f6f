use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One scheduled exam. `date` and `time` are display strings as entered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExamEntry {
    pub id: Uuid,
    pub semester: i32,
    pub branch: Option<String>,
    pub section: Option<String>,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub classroom: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExamEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: i32,
    #[validate(length(min = 1, max = 32))]
    pub branch: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub section: Option<String>,
    #[validate(length(min = 1, max = 200, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 32, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, max = 64, message = "time is required"))]
    pub time: String,
    #[validate(length(min = 1, max = 64, message = "classroom is required"))]
    pub classroom: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateExamEntryDto {
    #[validate(range(min = 1, max = 12, message = "semester must be between 1 and 12"))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, max = 32))]
    pub branch: Option<String>,
    #[validate(length(min = 1, max = 8))]
    pub section: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub date: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub time: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub classroom: Option<String>,
}
