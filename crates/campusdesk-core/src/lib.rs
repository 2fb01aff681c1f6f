//! # CampusDesk Core
//!
//! Core types, errors, and utilities shared by every CampusDesk crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification for admin accounts
//! - [`serde`]: Lenient deserializers for query strings and chat payloads
//! - [`timekey`]: Derives the sortable `HH:MM` start-time key from a time range
//! - [`weekday`]: Canonical Monday-to-Sunday ordering of day names
//!
//! # Example
//!
//! ```ignore
//! use campusdesk_core::{AppError, compute_start_time_key};
//!
//! assert_eq!(compute_start_time_key("1:55 PM - 2:55 PM"), "13:55");
//!
//! let error = AppError::not_found(anyhow::anyhow!("Timetable entry not found"));
//! ```

pub mod errors;
pub mod password;
pub mod serde;
pub mod timekey;
pub mod weekday;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use timekey::{UNPARSEABLE_START_TIME, compute_start_time_key};
pub use weekday::{day_rank, normalize_day};
