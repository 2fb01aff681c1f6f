use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use campusdesk_core::serde::{deserialize_optional_semester, deserialize_optional_trimmed};

use crate::utils::selection::{DEFAULT_SEMESTER, Selection};

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(max = 1000, message = "message is too long"))]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_optional_semester")]
    pub semester: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub section: Option<String>,
}

impl ChatRequest {
    pub fn selection(&self) -> Selection {
        Selection {
            semester: self.semester.unwrap_or(DEFAULT_SEMESTER),
            branch: self.branch.clone(),
            section: self.section.clone(),
        }
    }
}

/// HTML or plain-text fragment for the chat widget.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}
