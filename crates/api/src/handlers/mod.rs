//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, delete) for a single resource. Handlers delegate to the
//! corresponding repository in `designdeck_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod prototype;
