pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::*;
pub use router::{init_admin_timetable_router, init_timetable_router};
