//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod prototype_repo;
pub mod screen_repo;
pub mod user_repo;

pub use project_repo::ProjectRepo;
pub use prototype_repo::PrototypeRepo;
pub use screen_repo::ScreenRepo;
pub use user_repo::UserRepo;

/// SQL predicate restricting `column` (a project id) to the projects a
/// caller may access.
///
/// Parameter `$param` must be bound to
/// [`AccessScope::owner_filter`](designdeck_core::access::AccessScope::owner_filter):
/// `NULL` for unrestricted access, otherwise the user id whose
/// `user_project_rels` grants apply.
pub(crate) fn project_scope_clause(column: &str, param: usize) -> String {
    format!(
        "(${param}::BIGINT IS NULL OR {column} IN \
         (SELECT upr.project_id FROM user_project_rels upr WHERE upr.user_id = ${param}))"
    )
}
