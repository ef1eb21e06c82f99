//! Route definitions for the `/prototypes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::prototype;
use crate::state::AppState;

/// Routes mounted at `/prototypes`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prototype::list).post(prototype::create))
        .route(
            "/{id}",
            get(prototype::get_by_id)
                .put(prototype::update)
                .delete(prototype::delete),
        )
}
