//! Request middleware and extractors.
//!
//! # Admin authentication flow
//!
//! 1. Client sends `Authorization: Bearer <token>` obtained from `/api/auth/login`
//! 2. [`auth::require_admin`] verifies the JWT for everything under `/api/admin`
//! 3. Handlers take [`auth::AdminUser`] to read the verified claims
//!
//! ```ignore
//! async fn handler(AdminUser(claims): AdminUser) -> impl IntoResponse {
//!     format!("hello {}", claims.username)
//! }
//! ```

pub mod auth;
