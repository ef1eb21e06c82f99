//! User entity model and DTOs.

use designdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// `status` is `active` or `inactive`; `user_type` is `regular` or `super`
/// (see [`designdeck_core::access`]).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub status: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub user_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    /// Defaults to `inactive` if omitted.
    pub status: Option<String>,
    /// Defaults to `regular` if omitted.
    pub user_type: Option<String>,
}
