//! # CampusDesk Auth
//!
//! Admin authentication types and JWT utilities.
//!
//! - [`claims`]: JWT claim structure carried by admin access tokens
//! - [`jwt`]: Token creation and verification
//!
//! Only administrators log in; public portal pages and the chatbot are
//! anonymous. An admin receives one short-lived access token from
//! `POST /api/auth/login` and sends it as `Authorization: Bearer <token>`.
//!
//! # Example
//!
//! ```ignore
//! use campusdesk_auth::{create_access_token, verify_token};
//! use campusdesk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(admin_id, "admin", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.username, "admin");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
