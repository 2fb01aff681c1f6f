//! Selection context: which semester (and branch/section) a request is about.

use anyhow::anyhow;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use campusdesk_config::SelectionMode;
use campusdesk_core::AppError;
use campusdesk_core::serde::{deserialize_optional_semester, deserialize_optional_trimmed};

/// Semester assumed when a request does not name one.
pub const DEFAULT_SEMESTER: i32 = 1;

/// Raw selection as it arrives in a query string.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SelectionParams {
    /// Semester number, defaults to 1
    #[serde(default, deserialize_with = "deserialize_optional_semester")]
    pub semester: Option<i32>,
    /// Branch code, e.g. `CSE` (branch_section mode)
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub branch: Option<String>,
    /// Section letter, e.g. `A` (branch_section mode)
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub section: Option<String>,
}

impl SelectionParams {
    pub fn into_selection(self) -> Selection {
        Selection {
            semester: self.semester.unwrap_or(DEFAULT_SEMESTER),
            branch: self.branch,
            section: self.section,
        }
    }

    /// Selection for timetable and exam listings; branch and section are
    /// mandatory in branch_section mode.
    pub fn resolve(self, mode: SelectionMode) -> Result<Selection, AppError> {
        let selection = self.into_selection().scoped(mode);
        if mode.requires_branch_section() && !selection.has_branch_section() {
            return Err(AppError::bad_request(anyhow!(
                "branch and section are required"
            )));
        }
        Ok(selection)
    }

    /// Scope for course listings.
    pub fn resolve_course_scope(self, mode: SelectionMode) -> Result<CourseScope, AppError> {
        self.into_selection()
            .course_scope(mode)
            .ok_or_else(|| AppError::bad_request(anyhow!("branch is required")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub semester: i32,
    pub branch: Option<String>,
    pub section: Option<String>,
}

impl Selection {
    pub fn semester(semester: i32) -> Self {
        Self {
            semester,
            branch: None,
            section: None,
        }
    }

    pub fn sectioned(semester: i32, branch: &str, section: &str) -> Self {
        Self {
            semester,
            branch: Some(branch.to_string()),
            section: Some(section.to_string()),
        }
    }

    pub fn has_branch(&self) -> bool {
        self.branch.as_deref().is_some_and(|b| !b.trim().is_empty())
    }

    pub fn has_branch_section(&self) -> bool {
        self.has_branch() && self.section.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Drops branch and section where the mode does not key records by them.
    pub fn scoped(self, mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Semester => Self::semester(self.semester),
            SelectionMode::BranchSection => self,
        }
    }

    pub fn course_scope(&self, mode: SelectionMode) -> Option<CourseScope> {
        match mode {
            SelectionMode::Semester => Some(CourseScope::Semester(self.semester)),
            SelectionMode::BranchSection => self
                .branch
                .as_deref()
                .filter(|_| self.has_branch())
                .map(|b| CourseScope::Branch(b.to_string())),
        }
    }

    /// Human readable label used in chatbot replies.
    pub fn describe(&self, mode: SelectionMode) -> String {
        match (mode, self.branch.as_deref(), self.section.as_deref()) {
            (SelectionMode::BranchSection, Some(branch), Some(section)) => {
                format!("{} Semester {} Section {}", branch, self.semester, section)
            }
            _ => format!("Semester {}", self.semester),
        }
    }
}

/// Normalizes the branch/section of a record being written.
///
/// Semester deployments store neither; branch_section deployments need both.
pub fn enforce_record_scope(
    mode: SelectionMode,
    branch: Option<String>,
    section: Option<String>,
) -> Result<(Option<String>, Option<String>), AppError> {
    match mode {
        SelectionMode::Semester => Ok((None, None)),
        SelectionMode::BranchSection => match (branch, section) {
            (Some(branch), Some(section))
                if !branch.trim().is_empty() && !section.trim().is_empty() =>
            {
                Ok((Some(branch), Some(section)))
            }
            _ => Err(AppError::unprocessable(anyhow!(
                "branch and section are required"
            ))),
        },
    }
}

/// Course records carry a semester in semester mode and a branch in
/// branch_section mode.
pub fn enforce_course_scope(
    mode: SelectionMode,
    semester: Option<i32>,
    branch: Option<String>,
) -> Result<(Option<i32>, Option<String>), AppError> {
    match mode {
        SelectionMode::Semester => semester
            .map(|semester| (Some(semester), None))
            .ok_or_else(|| AppError::unprocessable(anyhow!("semester is required"))),
        SelectionMode::BranchSection => branch
            .filter(|b| !b.trim().is_empty())
            .map(|branch| (semester, Some(branch)))
            .ok_or_else(|| AppError::unprocessable(anyhow!("branch is required"))),
    }
}

/// Courses are keyed by semester or, in branch_section mode, by branch alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseScope {
    Semester(i32),
    Branch(String),
}
