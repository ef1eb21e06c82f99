//! Domain rules for the design-review prototypes service.
//!
//! Everything here is pure: no database access and no HTTP types, so the
//! rules can be unit-tested directly and shared by the `db` and `api` crates.

pub mod access;
pub mod error;
pub mod listing;
pub mod prototype;
pub mod types;
pub mod validation;
