//! # CampusDesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: Admin token signing configuration
//! - [`portal`]: Selection mode (schema variant) and chatbot fault reporting
//! - [`server`]: Listener address
//!
//! # Example
//!
//! ```ignore
//! use campusdesk_config::{CorsConfig, JwtConfig, PortalConfig, ServerConfig};
//!
//! let portal_config = PortalConfig::from_env()?;
//! let jwt_config = JwtConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod portal;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use portal::{PortalConfig, SelectionMode};
pub use server::ServerConfig;
