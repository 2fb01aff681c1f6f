pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use router::{init_admin_profile_router, init_auth_router};
