//! Request extractors enforcing authentication.
//!
//! - [`auth::AuthUser`] -- Resolves a JWT Bearer token to an active user and
//!   its project access scope.

pub mod auth;
