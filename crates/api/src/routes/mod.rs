pub mod health;
pub mod prototype;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prototypes                 list, create (auth required)
/// /prototypes/{id}            get, update, delete (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/prototypes", prototype::router())
}
