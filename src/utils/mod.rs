//! Shared utilities for the CampusDesk server.
//!
//! - [`selection`]: Semester / branch / section selection context

pub mod selection;
