//! Keyword chatbot.
//!
//! A message is matched against an ordered keyword table ([`intent`]), the
//! matching records are read through a [`source::RecordSource`] and rendered
//! into an HTML (or plain text) fragment by [`render`]. Everything a student
//! can get wrong (no keyword, missing branch/section, no records) is answered
//! with a reply string; only storage faults surface as errors.

pub mod controller;
pub mod intent;
pub mod model;
pub mod render;
pub mod router;
pub mod service;
pub mod source;

pub use router::init_chatbot_router;
