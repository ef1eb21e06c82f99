//! Repository for the `projects` and `user_project_rels` tables.

use designdeck_core::access::AccessScope;
use designdeck_core::types::DbId;
use sqlx::PgPool;

use super::project_scope_clause;
use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, archived, created_at, updated_at";

/// Provides project lookups and ownership grants.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, archived)
             VALUES ($1, COALESCE($2, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.archived)
            .fetch_one(pool)
            .await
    }

    /// Find a project the caller may access.
    ///
    /// Returns `None` both when the project does not exist and when it is
    /// outside `scope`.
    pub async fn find_accessible(
        pool: &PgPool,
        scope: AccessScope,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE id = $1 AND {}",
            project_scope_clause("id", 2)
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(scope.owner_filter())
            .fetch_optional(pool)
            .await
    }

    /// Grant `user_id` access to `project_id`. Granting twice is a no-op.
    pub async fn link_user(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_project_rels (user_id, project_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_user_project_rels_user_project DO NOTHING",
        )
        .bind(user_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
