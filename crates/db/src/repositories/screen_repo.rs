//! Repository for the `screens` table.

use designdeck_core::types::DbId;
use sqlx::PgPool;

use crate::models::screen::{CreateScreen, Screen};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, prototype_id, sort_order, title, alignment, background, \
                       fixed_header, fixed_footer, file_path, created_at, updated_at";

/// Provides screen queries used by prototype expansion.
pub struct ScreenRepo;

impl ScreenRepo {
    /// Insert a new screen, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateScreen) -> Result<Screen, sqlx::Error> {
        let query = format!(
            "INSERT INTO screens (prototype_id, title, sort_order, alignment, background, file_path)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 'center'), $5, COALESCE($6, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Screen>(&query)
            .bind(input.prototype_id)
            .bind(&input.title)
            .bind(input.order)
            .bind(&input.alignment)
            .bind(&input.background)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// List the screens of several prototypes at once, ordered by
    /// `sort_order` then id.
    pub async fn list_by_prototypes(
        pool: &PgPool,
        prototype_ids: &[DbId],
    ) -> Result<Vec<Screen>, sqlx::Error> {
        if prototype_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM screens
             WHERE prototype_id = ANY($1)
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Screen>(&query)
            .bind(prototype_ids)
            .fetch_all(pool)
            .await
    }
}
