//! Selection mode and portal-wide settings.
//!
//! Two record layouts exist for the portal. Older deployments scope every
//! record by semester alone and keep an exam seating table; newer ones scope
//! by branch, semester and section and have no seating data. The database
//! schema holds both, and `SELECTION_MODE` decides which one a deployment
//! serves.
//!
//! # Environment Variables
//!
//! - `SELECTION_MODE`: `semester` (default) or `branch_section`; any other
//!   value is a startup error
//! - `CHATBOT_EXPOSE_ERRORS`: append internal fault text to chatbot replies
//!   (development only, default `false`)

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Records keyed by semester; seating available.
    #[default]
    Semester,
    /// Records keyed by branch + semester + section; courses by branch.
    BranchSection,
}

impl SelectionMode {
    pub fn has_seating(self) -> bool {
        matches!(self, SelectionMode::Semester)
    }

    pub fn requires_branch_section(self) -> bool {
        matches!(self, SelectionMode::BranchSection)
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "semester" => Ok(SelectionMode::Semester),
            "branch_section" | "branch" => Ok(SelectionMode::BranchSection),
            other => Err(format!("unknown selection mode: {}", other)),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Semester => f.write_str("semester"),
            SelectionMode::BranchSection => f.write_str("branch_section"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PortalConfig {
    pub selection_mode: SelectionMode,
    pub expose_chat_errors: bool,
}

impl PortalConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            selection_mode: selection_mode_from(env::var("SELECTION_MODE").ok().as_deref())?,
            expose_chat_errors: env::var("CHATBOT_EXPOSE_ERRORS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    pub fn with_mode(selection_mode: SelectionMode) -> Self {
        Self {
            selection_mode,
            expose_chat_errors: false,
        }
    }
}

/// Unset or blank falls back to the default; anything else must parse.
fn selection_mode_from(value: Option<&str>) -> Result<SelectionMode, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(SelectionMode::default()),
        Some(value) => value
            .parse()
            .map_err(|err| format!("SELECTION_MODE: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_mode() {
        assert_eq!("semester".parse(), Ok(SelectionMode::Semester));
        assert_eq!("Branch-Section".parse(), Ok(SelectionMode::BranchSection));
        assert_eq!(" branch_section ".parse(), Ok(SelectionMode::BranchSection));
        assert!("department".parse::<SelectionMode>().is_err());
    }

    #[test]
    fn test_mode_capabilities() {
        assert!(SelectionMode::Semester.has_seating());
        assert!(!SelectionMode::Semester.requires_branch_section());
        assert!(!SelectionMode::BranchSection.has_seating());
        assert!(SelectionMode::BranchSection.requires_branch_section());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for mode in [SelectionMode::Semester, SelectionMode::BranchSection] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn test_unset_selection_mode_defaults_to_semester() {
        assert_eq!(selection_mode_from(None), Ok(SelectionMode::Semester));
        assert_eq!(selection_mode_from(Some("  ")), Ok(SelectionMode::Semester));
        assert_eq!(
            selection_mode_from(Some("branch_section")),
            Ok(SelectionMode::BranchSection)
        );
    }

    #[test]
    fn test_misspelled_selection_mode_is_an_error() {
        let err = selection_mode_from(Some("branch_sectoin")).unwrap_err();
        assert!(err.starts_with("SELECTION_MODE"));
        assert!(err.contains("branch_sectoin"));
    }

    #[test]
    fn test_default_config_hides_chat_errors() {
        let config = PortalConfig::default();
        assert_eq!(config.selection_mode, SelectionMode::Semester);
        assert!(!config.expose_chat_errors);
    }
}
