//! Screen entity model and DTOs.
//!
//! Screens are only exposed through prototype expansion.

use designdeck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A screen row from the `screens` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: DbId,
    pub prototype_id: DbId,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub title: String,
    /// `left`, `center`, or `right`.
    pub alignment: String,
    pub background: Option<String>,
    pub fixed_header: f64,
    pub fixed_footer: f64,
    pub file_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScreen {
    pub prototype_id: DbId,
    pub title: String,
    pub order: Option<i32>,
    pub alignment: Option<String>,
    pub background: Option<String>,
    pub file_path: Option<String>,
}
