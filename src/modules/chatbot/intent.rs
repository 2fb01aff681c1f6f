use campusdesk_config::SelectionMode;

use crate::utils::selection::{CourseScope, Selection};

pub const MISSING_CONTEXT_WARNING: &str = "⚠️ Please select Branch, Semester, and Section first.";

const SEMESTER_HELP: &str = "I can help with timetable, exams, courses, and seating. \
Try: 'timetable', 'exams', 'courses', 'seating'.";

const BRANCH_SECTION_HELP: &str = "I can help with timetable, exams, courses, and fees. \
Try: 'timetable', 'exams', 'courses', 'fees'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Timetable,
    Exams,
    Courses,
    Seating,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Timetable => "timetable",
            Intent::Exams => "exams",
            Intent::Courses => "courses",
            Intent::Seating => "seating",
        }
    }
}

pub struct IntentRule {
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

/// Evaluated top to bottom; the first rule with a keyword contained in the
/// message wins. Plurals are covered by their singular stem.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["timetable"],
        intent: Intent::Timetable,
    },
    IntentRule {
        keywords: &["exam"],
        intent: Intent::Exams,
    },
    IntentRule {
        keywords: &["course", "fee"],
        intent: Intent::Courses,
    },
    IntentRule {
        keywords: &["seat"],
        intent: Intent::Seating,
    },
];

/// Case-insensitive substring match against [`RULES`]. Seating only exists
/// in semester mode.
pub fn detect_intent(message: &str, mode: SelectionMode) -> Option<Intent> {
    let message = message.to_lowercase();

    RULES
        .iter()
        .filter(|rule| rule.intent != Intent::Seating || mode.has_seating())
        .find(|rule| rule.keywords.iter().any(|k| message.contains(k)))
        .map(|rule| rule.intent)
}

pub fn help_message(mode: SelectionMode) -> &'static str {
    match mode {
        SelectionMode::Semester => SEMESTER_HELP,
        SelectionMode::BranchSection => BRANCH_SECTION_HELP,
    }
}

/// The single read an intent performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Timetable(Selection),
    Exams(Selection),
    Courses(CourseScope),
    Seating(i32),
}

/// Resolves what `intent` reads for `selection`, or `None` when the
/// selection lacks what the mode requires. Nothing may be read on `None`.
pub fn plan_lookup(intent: Intent, selection: Selection, mode: SelectionMode) -> Option<Lookup> {
    let selection = selection.scoped(mode);
    let sectioned = !mode.requires_branch_section() || selection.has_branch_section();

    match intent {
        Intent::Timetable => sectioned.then_some(Lookup::Timetable(selection)),
        Intent::Exams => sectioned.then_some(Lookup::Exams(selection)),
        Intent::Courses => selection.course_scope(mode).map(Lookup::Courses),
        Intent::Seating => mode
            .has_seating()
            .then_some(Lookup::Seating(selection.semester)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEM: SelectionMode = SelectionMode::Semester;
    const BRANCH: SelectionMode = SelectionMode::BranchSection;

    #[test]
    fn test_keywords_map_to_intents() {
        assert_eq!(detect_intent("show my timetable", SEM), Some(Intent::Timetable));
        assert_eq!(detect_intent("when are the exams?", SEM), Some(Intent::Exams));
        assert_eq!(detect_intent("list courses", SEM), Some(Intent::Courses));
        assert_eq!(detect_intent("what is the fee", SEM), Some(Intent::Courses));
        assert_eq!(detect_intent("where is my seat", SEM), Some(Intent::Seating));
        assert_eq!(detect_intent("seating plan", SEM), Some(Intent::Seating));
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(detect_intent("TIMETABLE please", SEM), Some(Intent::Timetable));
        assert_eq!(detect_intent("Exam Dates", SEM), Some(Intent::Exams));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            detect_intent("exam timetable", SEM),
            Some(Intent::Timetable)
        );
        assert_eq!(detect_intent("exam fee", SEM), Some(Intent::Exams));
        assert_eq!(detect_intent("course seat", SEM), Some(Intent::Courses));
    }

    #[test]
    fn test_no_keyword_means_no_intent() {
        assert_eq!(detect_intent("hello", SEM), None);
        assert_eq!(detect_intent("", SEM), None);
    }

    #[test]
    fn test_seating_only_in_semester_mode() {
        assert_eq!(detect_intent("seating", BRANCH), None);
    }

    #[test]
    fn test_help_lists_intents_of_mode() {
        for word in ["timetable", "exams", "courses", "seating"] {
            assert!(help_message(SEM).contains(word));
        }
        assert!(!help_message(BRANCH).contains("seating"));
        assert!(help_message(BRANCH).contains("fees"));
    }

    #[test]
    fn test_lookup_needs_mode_context() {
        let bare = Selection::semester(3);
        let branch_only = Selection {
            semester: 3,
            branch: Some("CSE".to_string()),
            section: None,
        };
        let full = Selection::sectioned(3, "CSE", "A");

        assert_eq!(
            plan_lookup(Intent::Timetable, bare.clone(), SEM),
            Some(Lookup::Timetable(bare.clone()))
        );
        assert_eq!(plan_lookup(Intent::Timetable, branch_only.clone(), BRANCH), None);
        assert_eq!(
            plan_lookup(Intent::Timetable, full.clone(), BRANCH),
            Some(Lookup::Timetable(full.clone()))
        );
        assert_eq!(plan_lookup(Intent::Exams, branch_only.clone(), BRANCH), None);
        assert_eq!(
            plan_lookup(Intent::Courses, branch_only, BRANCH),
            Some(Lookup::Courses(CourseScope::Branch("CSE".to_string())))
        );
        assert_eq!(plan_lookup(Intent::Courses, bare.clone(), BRANCH), None);
        assert_eq!(plan_lookup(Intent::Seating, full, BRANCH), None);
    }

    #[test]
    fn test_semester_mode_lookup_drops_branch_and_section() {
        let full = Selection::sectioned(2, "CSE", "A");
        assert_eq!(
            plan_lookup(Intent::Exams, full.clone(), SEM),
            Some(Lookup::Exams(Selection::semester(2)))
        );
        assert_eq!(
            plan_lookup(Intent::Courses, full.clone(), SEM),
            Some(Lookup::Courses(CourseScope::Semester(2)))
        );
        assert_eq!(plan_lookup(Intent::Seating, full, SEM), Some(Lookup::Seating(2)));
    }
}
