//! Repository for the `prototypes` table.
//!
//! Every read and write takes an [`AccessScope`] and applies it in SQL, so a
//! prototype outside the caller's projects behaves exactly like a missing
//! one.

use designdeck_core::access::AccessScope;
use designdeck_core::listing::{Pagination, SortField, SortOrder};
use designdeck_core::prototype::{
    PrototypeType, DEFAULT_HEIGHT, DEFAULT_SCALE_FACTOR, DEFAULT_WIDTH,
};
use designdeck_core::types::DbId;
use sqlx::PgPool;

use super::project_scope_clause;
use crate::models::prototype::{CreatePrototype, Prototype, PrototypeFilter, UpdatePrototype};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, type, width, height, scale_factor, created_at, updated_at";

/// Provides scoped CRUD operations for prototypes.
pub struct PrototypeRepo;

impl PrototypeRepo {
    /// Insert a new prototype, returning the created row.
    ///
    /// Omitted optional fields take the documented defaults. The caller is
    /// responsible for validating the input and the project's accessibility.
    pub async fn create(pool: &PgPool, input: &CreatePrototype) -> Result<Prototype, sqlx::Error> {
        let query = format!(
            "INSERT INTO prototypes (project_id, title, type, width, height, scale_factor)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prototype>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(
                input
                    .prototype_type
                    .as_deref()
                    .unwrap_or(PrototypeType::default().as_str()),
            )
            .bind(input.width.unwrap_or(DEFAULT_WIDTH))
            .bind(input.height.unwrap_or(DEFAULT_HEIGHT))
            .bind(input.scale_factor.unwrap_or(DEFAULT_SCALE_FACTOR))
            .fetch_one(pool)
            .await
    }

    /// Find a prototype by ID within `scope`.
    pub async fn find_accessible(
        pool: &PgPool,
        scope: AccessScope,
        id: DbId,
    ) -> Result<Option<Prototype>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prototypes WHERE id = $1 AND {}",
            project_scope_clause("project_id", 2)
        );
        sqlx::query_as::<_, Prototype>(&query)
            .bind(id)
            .bind(scope.owner_filter())
            .fetch_optional(pool)
            .await
    }

    /// List one page of the prototypes visible within `scope`.
    ///
    /// The filter narrows the set, `sort` orders it (ties broken by id), and
    /// `page` slices it.
    pub async fn list_accessible(
        pool: &PgPool,
        scope: AccessScope,
        filter: PrototypeFilter,
        sort: SortOrder,
        page: Pagination,
    ) -> Result<Vec<Prototype>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prototypes
             WHERE {} AND ($2::BIGINT IS NULL OR project_id = $2)
             ORDER BY {}
             LIMIT $3 OFFSET $4",
            project_scope_clause("project_id", 1),
            order_clause(sort),
        );
        sqlx::query_as::<_, Prototype>(&query)
            .bind(scope.owner_filter())
            .bind(filter.project_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all prototypes matching `filter` within `scope`.
    pub async fn count_accessible(
        pool: &PgPool,
        scope: AccessScope,
        filter: PrototypeFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM prototypes
             WHERE {} AND ($2::BIGINT IS NULL OR project_id = $2)",
            project_scope_clause("project_id", 1),
        );
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(scope.owner_filter())
            .bind(filter.project_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a prototype within `scope`. Only non-`None` fields in `input`
    /// are applied.
    ///
    /// Returns `None` if no accessible row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        scope: AccessScope,
        id: DbId,
        input: &UpdatePrototype,
    ) -> Result<Option<Prototype>, sqlx::Error> {
        let query = format!(
            "UPDATE prototypes SET
                project_id = COALESCE($3, project_id),
                title = COALESCE($4, title),
                type = COALESCE($5, type),
                width = COALESCE($6, width),
                height = COALESCE($7, height),
                scale_factor = COALESCE($8, scale_factor)
             WHERE id = $1 AND {}
             RETURNING {COLUMNS}",
            project_scope_clause("project_id", 2),
        );
        sqlx::query_as::<_, Prototype>(&query)
            .bind(id)
            .bind(scope.owner_filter())
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.prototype_type)
            .bind(input.width)
            .bind(input.height)
            .bind(input.scale_factor)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a prototype within `scope`. Its screens are
    /// removed by the foreign-key cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, scope: AccessScope, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM prototypes WHERE id = $1 AND {}",
            project_scope_clause("project_id", 2),
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(scope.owner_filter())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the `ORDER BY` body for a sort order. Column names come from a
/// fixed match, never from user input.
///
/// Text columns sort with `COLLATE "C"` so the order is byte-lexicographic
/// whatever the database locale.
fn order_clause(sort: SortOrder) -> String {
    let column = match sort.field {
        SortField::Id => "id",
        SortField::Title => r#"title COLLATE "C""#,
        SortField::Type => r#"type COLLATE "C""#,
        SortField::Width => "width",
        SortField::Height => "height",
        SortField::ScaleFactor => "scale_factor",
        SortField::CreatedAt => "created_at",
        SortField::UpdatedAt => "updated_at",
    };
    let direction = sort.direction.as_sql();

    if sort.field == SortField::Id {
        format!("id {direction}")
    } else {
        format!("{column} {direction}, id ASC")
    }
}
