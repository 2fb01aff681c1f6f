//! Sample data for development databases.
//!
//! The layout follows the deployment's selection mode: semester mode gets
//! one block of records per semester plus exam seating; branch_section mode
//! gets one block per branch and section, and courses per branch.

pub mod models;

use std::time::Instant;

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

use campusdesk_config::SelectionMode;

use self::models::{
    Cohort, CourseSeed, ExamSeed, SeatingSeed, TimetableSeed, generate_branch_courses,
    generate_exams, generate_seating, generate_semester_courses, generate_timetable,
};

/// Postgres caps bind parameters at 65535 per statement.
const BATCH_SIZE: usize = 500;

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub mode: SelectionMode,
    pub semesters: i32,
    pub branches: Vec<String>,
    pub sections: Vec<String>,
    pub students_per_exam: usize,
}

impl SeedConfig {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            semesters: 4,
            branches: vec!["CSE".to_string(), "ECE".to_string()],
            sections: vec!["A".to_string(), "B".to_string()],
            students_per_exam: 20,
        }
    }

    pub fn with_semesters(mut self, semesters: i32) -> Self {
        self.semesters = semesters;
        self
    }

    pub fn with_branches(mut self, branches: Vec<String>) -> Self {
        self.branches = branches;
        self
    }

    pub fn with_sections(mut self, sections: Vec<String>) -> Self {
        self.sections = sections;
        self
    }

    /// Every semester, or every semester x branch x section.
    pub fn cohorts(&self) -> Vec<Cohort> {
        let semesters = 1..=self.semesters;
        match self.mode {
            SelectionMode::Semester => semesters
                .map(|semester| Cohort {
                    semester,
                    branch: None,
                    section: None,
                })
                .collect(),
            SelectionMode::BranchSection => semesters
                .flat_map(|semester| {
                    self.branches.iter().flat_map(move |branch| {
                        self.sections.iter().map(move |section| Cohort {
                            semester,
                            branch: Some(branch.clone()),
                            section: Some(section.clone()),
                        })
                    })
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub timetable: usize,
    pub exams: usize,
    pub courses: usize,
    pub seating: usize,
}

pub async fn seed_all(db: &PgPool, config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let start = Instant::now();
    println!(
        "🌱 Seeding {} semesters in {} mode...",
        config.semesters, config.mode
    );

    let cohorts = config.cohorts();
    let timetable: Vec<TimetableSeed> = cohorts.iter().flat_map(generate_timetable).collect();
    let exams: Vec<ExamSeed> = cohorts.iter().flat_map(generate_exams).collect();

    let (courses, seating): (Vec<CourseSeed>, Vec<SeatingSeed>) = match config.mode {
        SelectionMode::Semester => (
            (1..=config.semesters)
                .flat_map(generate_semester_courses)
                .collect(),
            (1..=config.semesters)
                .flat_map(|s| generate_seating(s, config.students_per_exam))
                .collect(),
        ),
        SelectionMode::BranchSection => (
            config
                .branches
                .iter()
                .flat_map(|b| generate_branch_courses(b))
                .collect(),
            Vec::new(),
        ),
    };

    let mut tx = db.begin().await?;
    insert_timetable(&mut tx, &timetable).await?;
    insert_exams(&mut tx, &exams).await?;
    insert_courses(&mut tx, &courses).await?;
    insert_seating(&mut tx, &seating).await?;
    tx.commit().await?;

    let summary = SeedSummary {
        timetable: timetable.len(),
        exams: exams.len(),
        courses: courses.len(),
        seating: seating.len(),
    };

    println!("   ✓ {} timetable rows", summary.timetable);
    println!("   ✓ {} exams", summary.exams);
    println!("   ✓ {} courses", summary.courses);
    println!("   ✓ {} seating rows", summary.seating);
    println!("✅ Seeding finished in {:?}", start.elapsed());

    Ok(summary)
}

async fn insert_timetable(
    tx: &mut Transaction<'_, Postgres>,
    rows: &[TimetableSeed],
) -> anyhow::Result<()> {
    for chunk in rows.chunks(BATCH_SIZE) {
        QueryBuilder::<Postgres>::new(
            "INSERT INTO timetable (semester, branch, section, day, time_range, start_time, subject, classroom) ",
        )
        .push_values(chunk, |mut b, row| {
            b.push_bind(row.semester)
                .push_bind(&row.branch)
                .push_bind(&row.section)
                .push_bind(&row.day)
                .push_bind(&row.time_range)
                .push_bind(&row.start_time)
                .push_bind(&row.subject)
                .push_bind(&row.classroom);
        })
        .build()
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_exams(tx: &mut Transaction<'_, Postgres>, rows: &[ExamSeed]) -> anyhow::Result<()> {
    for chunk in rows.chunks(BATCH_SIZE) {
        QueryBuilder::<Postgres>::new(
            "INSERT INTO exams (semester, branch, section, subject, date, time, classroom) ",
        )
        .push_values(chunk, |mut b, row| {
            b.push_bind(row.semester)
                .push_bind(&row.branch)
                .push_bind(&row.section)
                .push_bind(&row.subject)
                .push_bind(&row.date)
                .push_bind(&row.time)
                .push_bind(&row.classroom);
        })
        .build()
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_courses(
    tx: &mut Transaction<'_, Postgres>,
    rows: &[CourseSeed],
) -> anyhow::Result<()> {
    for chunk in rows.chunks(BATCH_SIZE) {
        QueryBuilder::<Postgres>::new(
            "INSERT INTO courses (semester, branch, course_name, duration, fee) ",
        )
        .push_values(chunk, |mut b, row| {
            b.push_bind(row.semester)
                .push_bind(&row.branch)
                .push_bind(&row.course_name)
                .push_bind(&row.duration)
                .push_bind(&row.fee);
        })
        .build()
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_seating(
    tx: &mut Transaction<'_, Postgres>,
    rows: &[SeatingSeed],
) -> anyhow::Result<()> {
    for chunk in rows.chunks(BATCH_SIZE) {
        QueryBuilder::<Postgres>::new(
            "INSERT INTO exam_seating (semester, subject, student_name, usn, classroom, seat_number) ",
        )
        .push_values(chunk, |mut b, row| {
            b.push_bind(row.semester)
                .push_bind(&row.subject)
                .push_bind(&row.student_name)
                .push_bind(&row.usn)
                .push_bind(&row.classroom)
                .push_bind(&row.seat_number);
        })
        .build()
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Deletes every portal record. Admin accounts are kept.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<u64> {
    let start = Instant::now();
    println!("🗑️  Clearing portal records...");

    let mut tx = db.begin().await?;
    let mut deleted = 0;
    for table in ["exam_seating", "courses", "exams", "timetable"] {
        let rows = sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        println!("   ✓ {}: {} rows", table, rows);
        deleted += rows;
    }
    tx.commit().await?;

    println!("✅ Cleared {} rows in {:?}", deleted, start.elapsed());
    Ok(deleted)
}
