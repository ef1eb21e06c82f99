//! Prototype entity model and DTOs.

use designdeck_core::prototype::PrototypeChanges;
use designdeck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A prototype row from the `prototypes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prototype {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    /// `desktop` or `mobile`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub prototype_type: String,
    pub width: f64,
    pub height: f64,
    pub scale_factor: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new prototype.
///
/// `project_id` and `title` must be set by validation before insert.
/// Omitted `type`, `width`, `height` and `scaleFactor` take the defaults
/// from [`designdeck_core::prototype`].
#[derive(Debug, Clone, Default)]
pub struct CreatePrototype {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub prototype_type: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scale_factor: Option<f64>,
}

/// DTO for updating an existing prototype. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdatePrototype {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub prototype_type: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scale_factor: Option<f64>,
}

impl From<PrototypeChanges> for CreatePrototype {
    fn from(changes: PrototypeChanges) -> Self {
        Self {
            project_id: changes.project_id,
            title: changes.title,
            prototype_type: changes.prototype_type,
            width: changes.width,
            height: changes.height,
            scale_factor: changes.scale_factor,
        }
    }
}

impl From<PrototypeChanges> for UpdatePrototype {
    fn from(changes: PrototypeChanges) -> Self {
        Self {
            project_id: changes.project_id,
            title: changes.title,
            prototype_type: changes.prototype_type,
            width: changes.width,
            height: changes.height,
            scale_factor: changes.scale_factor,
        }
    }
}

/// Filter for listing prototypes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrototypeFilter {
    /// Equality filter on the owning project.
    pub project_id: Option<DbId>,
}
