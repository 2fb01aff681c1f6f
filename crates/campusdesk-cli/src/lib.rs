//! # CampusDesk CLI
//!
//! Administrative tooling behind the `campusdesk-cli` binary: admin account
//! creation and sample data seeding for development.
//!
//! ```ignore
//! use campusdesk_cli::seeder::{SeedConfig, seed_all};
//!
//! let config = SeedConfig::new(SelectionMode::Semester).with_semesters(4);
//! seed_all(&pool, &config).await?;
//! ```

pub mod admin;
pub mod seeder;
