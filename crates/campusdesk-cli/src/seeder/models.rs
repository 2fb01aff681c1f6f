//! Seed rows and their generation.
//!
//! Generation is pure so the shape of the sample data can be tested without
//! a database; only student names are random.

use fake::Fake;
use fake::faker::name::en::Name;

use campusdesk_core::compute_start_time_key;

const DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Mixed on purpose: the admin form accepts all of these spellings.
const SLOTS: [&str; 4] = [
    "8:55 AM - 9:55 AM",
    "10:00AM-11:00AM",
    "11.10AM - 12.10PM",
    "14:00 - 15:00",
];

const SUBJECTS: [&str; 10] = [
    "Engineering Mathematics",
    "Applied Physics",
    "Basic Electronics",
    "Data Structures",
    "Digital Design",
    "Operating Systems",
    "Computer Networks",
    "Database Systems",
    "Compiler Design",
    "Machine Learning",
];

const SUBJECTS_PER_SEMESTER: usize = 4;

#[derive(Debug, Clone)]
pub struct TimetableSeed {
    pub semester: i32,
    pub branch: Option<String>,
    pub section: Option<String>,
    pub day: String,
    pub time_range: String,
    pub start_time: String,
    pub subject: String,
    pub classroom: String,
}

#[derive(Debug, Clone)]
pub struct ExamSeed {
    pub semester: i32,
    pub branch: Option<String>,
    pub section: Option<String>,
    pub subject: String,
    pub date: String,
    pub time: String,
    pub classroom: String,
}

#[derive(Debug, Clone)]
pub struct CourseSeed {
    pub semester: Option<i32>,
    pub branch: Option<String>,
    pub course_name: String,
    pub duration: String,
    pub fee: String,
}

#[derive(Debug, Clone)]
pub struct SeatingSeed {
    pub semester: i32,
    pub subject: String,
    pub student_name: String,
    pub usn: String,
    pub classroom: String,
    pub seat_number: String,
}

/// Where a block of records belongs: a semester, optionally narrowed to a
/// branch and section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub semester: i32,
    pub branch: Option<String>,
    pub section: Option<String>,
}

impl Cohort {
    fn room_prefix(&self) -> String {
        match (&self.branch, &self.section) {
            (Some(branch), Some(section)) => format!("{}-{}", branch, section),
            _ => "LH".to_string(),
        }
    }
}

/// The subjects taught in a semester; rotates through [`SUBJECTS`].
pub fn semester_subjects(semester: i32) -> Vec<&'static str> {
    let offset = (semester.max(1) as usize - 1) * 2;
    (0..SUBJECTS_PER_SEMESTER)
        .map(|i| SUBJECTS[(offset + i) % SUBJECTS.len()])
        .collect()
}

/// One week, Monday to Saturday, one class per slot.
pub fn generate_timetable(cohort: &Cohort) -> Vec<TimetableSeed> {
    let subjects = semester_subjects(cohort.semester);
    let prefix = cohort.room_prefix();

    DAYS.iter()
        .enumerate()
        .flat_map(|(d, day)| {
            let subjects = subjects.clone();
            let prefix = prefix.clone();
            SLOTS.iter().enumerate().map(move |(s, slot)| TimetableSeed {
                semester: cohort.semester,
                branch: cohort.branch.clone(),
                section: cohort.section.clone(),
                day: day.to_string(),
                time_range: slot.to_string(),
                start_time: compute_start_time_key(slot),
                subject: subjects[(d + s) % subjects.len()].to_string(),
                classroom: format!("{}-{}{:02}", prefix, cohort.semester, s + 1),
            })
        })
        .collect()
}

pub fn generate_exams(cohort: &Cohort) -> Vec<ExamSeed> {
    semester_subjects(cohort.semester)
        .into_iter()
        .enumerate()
        .map(|(i, subject)| ExamSeed {
            semester: cohort.semester,
            branch: cohort.branch.clone(),
            section: cohort.section.clone(),
            subject: subject.to_string(),
            date: format!("2025-06-{:02}", 10 + i * 2),
            time: "10:00 AM - 1:00 PM".to_string(),
            classroom: format!("EX-{}", cohort.semester),
        })
        .collect()
}

pub fn generate_semester_courses(semester: i32) -> Vec<CourseSeed> {
    semester_subjects(semester)
        .into_iter()
        .map(|subject| CourseSeed {
            semester: Some(semester),
            branch: None,
            course_name: subject.to_string(),
            duration: "1 semester".to_string(),
            fee: format!("{}", 15_000 + semester * 1_000),
        })
        .collect()
}

pub fn generate_branch_courses(branch: &str) -> Vec<CourseSeed> {
    vec![
        CourseSeed {
            semester: None,
            branch: Some(branch.to_string()),
            course_name: format!("B.E. {}", branch),
            duration: "4 years".to_string(),
            fee: "1,20,000 per year".to_string(),
        },
        CourseSeed {
            semester: None,
            branch: Some(branch.to_string()),
            course_name: format!("M.Tech {}", branch),
            duration: "2 years".to_string(),
            fee: "90,000 per year".to_string(),
        },
    ]
}

/// Seats `students` fake students for every exam subject of the semester.
pub fn generate_seating(semester: i32, students: usize) -> Vec<SeatingSeed> {
    let names: Vec<String> = (0..students).map(|_| Name().fake()).collect();

    semester_subjects(semester)
        .into_iter()
        .flat_map(|subject| {
            names.iter().enumerate().map(move |(i, name)| SeatingSeed {
                semester,
                subject: subject.to_string(),
                student_name: name.clone(),
                usn: format!("4SD{:02}CS{:03}", 25 - semester.min(24), i + 1),
                classroom: format!("EX-{}", semester),
                seat_number: format!("{:02}", i + 1),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusdesk_core::UNPARSEABLE_START_TIME;

    fn semester_cohort(semester: i32) -> Cohort {
        Cohort {
            semester,
            branch: None,
            section: None,
        }
    }

    #[test]
    fn test_timetable_covers_week_with_parsed_times() {
        let rows = generate_timetable(&semester_cohort(3));

        assert_eq!(rows.len(), DAYS.len() * SLOTS.len());
        assert!(rows.iter().all(|r| r.start_time != UNPARSEABLE_START_TIME));

        let monday: Vec<&str> = rows
            .iter()
            .filter(|r| r.day == "Monday")
            .map(|r| r.start_time.as_str())
            .collect();
        assert_eq!(monday, vec!["08:55", "10:00", "11:10", "14:00"]);
    }

    #[test]
    fn test_branch_cohort_is_carried_into_rows() {
        let cohort = Cohort {
            semester: 5,
            branch: Some("CSE".to_string()),
            section: Some("B".to_string()),
        };
        let rows = generate_timetable(&cohort);
        assert!(rows.iter().all(|r| r.branch.as_deref() == Some("CSE")));
        assert!(rows[0].classroom.starts_with("CSE-B-5"));

        let exams = generate_exams(&cohort);
        assert!(exams.iter().all(|e| e.section.as_deref() == Some("B")));
    }

    #[test]
    fn test_subjects_rotate_between_semesters() {
        assert_ne!(semester_subjects(1), semester_subjects(2));
        assert_eq!(semester_subjects(1).len(), SUBJECTS_PER_SEMESTER);
    }

    #[test]
    fn test_exam_dates_are_sortable() {
        let exams = generate_exams(&semester_cohort(2));
        let mut dates: Vec<&str> = exams.iter().map(|e| e.date.as_str()).collect();
        let before = dates.clone();
        dates.sort();
        assert_eq!(dates, before);
    }

    #[test]
    fn test_seating_per_subject() {
        let seats = generate_seating(4, 5);
        assert_eq!(seats.len(), SUBJECTS_PER_SEMESTER * 5);
        assert!(seats.iter().all(|s| !s.student_name.is_empty()));
        assert_eq!(seats[0].seat_number, "01");
    }

    #[test]
    fn test_courses_per_mode() {
        assert!(
            generate_semester_courses(1)
                .iter()
                .all(|c| c.semester == Some(1) && c.branch.is_none())
        );
        assert!(
            generate_branch_courses("ECE")
                .iter()
                .all(|c| c.branch.as_deref() == Some("ECE") && c.semester.is_none())
        );
    }
}
