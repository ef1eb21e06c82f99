//! Handlers for the `/prototypes` resource.
//!
//! Every handler resolves the caller's [`AccessScope`] first and passes it to
//! the repository. Prototypes outside the scope are reported as 404, the
//! same as ids that do not exist.

use std::collections::HashMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::Json;
use designdeck_core::access::AccessScope;
use designdeck_core::error::CoreError;
use designdeck_core::prototype::{
    PrototypeInput, ValidationMode, FIELD_PROJECT_ID, PROJECT_ID_INVALID_MESSAGE,
};
use designdeck_core::types::DbId;
use designdeck_core::validation::FieldErrors;
use designdeck_db::models::prototype::{Prototype, PrototypeFilter};
use designdeck_db::models::screen::Screen;
use designdeck_db::repositories::{ProjectRepo, PrototypeRepo, ScreenRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{ExpandParams, ListPrototypesParams};
use crate::state::AppState;

pub const HEADER_TOTAL_COUNT: &str = "x-pagination-total-count";
pub const HEADER_PAGE_COUNT: &str = "x-pagination-page-count";
pub const HEADER_CURRENT_PAGE: &str = "x-pagination-current-page";
pub const HEADER_PER_PAGE: &str = "x-pagination-per-page";

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Prototype representation, with `screens` only when expanded.
#[derive(Debug, Serialize)]
pub struct PrototypeResponse {
    #[serde(flatten)]
    pub prototype: Prototype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screens: Option<Vec<Screen>>,
}

impl From<Prototype> for PrototypeResponse {
    fn from(prototype: Prototype) -> Self {
        Self {
            prototype,
            screens: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Prototype",
        id,
    })
}

/// Load a prototype visible to `scope`, or 404.
async fn ensure_prototype_accessible(
    pool: &PgPool,
    scope: AccessScope,
    id: DbId,
) -> AppResult<Prototype> {
    PrototypeRepo::find_accessible(pool, scope, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Record a `projectId` error unless the project exists within `scope`.
async fn check_project_id(
    pool: &PgPool,
    scope: AccessScope,
    project_id: DbId,
    errors: &mut FieldErrors,
) -> AppResult<()> {
    if ProjectRepo::find_accessible(pool, scope, project_id)
        .await?
        .is_none()
    {
        errors.add(FIELD_PROJECT_ID, PROJECT_ID_INVALID_MESSAGE);
    }
    Ok(())
}

/// Convert rows to responses, loading screens in one query when requested.
async fn with_screens(
    pool: &PgPool,
    prototypes: Vec<Prototype>,
    expand: bool,
) -> AppResult<Vec<PrototypeResponse>> {
    if !expand {
        return Ok(prototypes.into_iter().map(PrototypeResponse::from).collect());
    }

    let ids: Vec<DbId> = prototypes.iter().map(|p| p.id).collect();
    let mut by_prototype: HashMap<DbId, Vec<Screen>> = HashMap::new();
    for screen in ScreenRepo::list_by_prototypes(pool, &ids).await? {
        by_prototype
            .entry(screen.prototype_id)
            .or_default()
            .push(screen);
    }

    Ok(prototypes
        .into_iter()
        .map(|prototype| {
            let screens = by_prototype.remove(&prototype.id).unwrap_or_default();
            PrototypeResponse {
                prototype,
                screens: Some(screens),
            }
        })
        .collect())
}

/// Only bodies that are not a JSON object reach here; field-level type
/// errors are collected by [`PrototypeInput::validate`].
fn body_or_bad_request<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn query_or_bad_request<T>(params: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

// ---------------------------------------------------------------------------
// GET /prototypes
// ---------------------------------------------------------------------------

/// List prototypes visible to the caller.
///
/// Supports `search[projectId]`, `sort`, `page`, `per-page` and `expand`.
/// Pagination totals are returned in `X-Pagination-*` headers.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    params: Result<Query<ListPrototypesParams>, QueryRejection>,
) -> AppResult<(HeaderMap, Json<Vec<PrototypeResponse>>)> {
    let params = query_or_bad_request(params)?;
    let scope = auth.scope();
    let filter = PrototypeFilter {
        project_id: params.project_id,
    };
    let page = params.pagination();

    let total = PrototypeRepo::count_accessible(&state.pool, scope, filter).await?;
    let items =
        PrototypeRepo::list_accessible(&state.pool, scope, filter, params.sort_order(), page)
            .await?;
    tracing::debug!(
        user_id = auth.user_id,
        unrestricted = scope.is_unrestricted(),
        count = items.len(),
        total,
        "Listed prototypes"
    );

    let mut headers = HeaderMap::new();
    headers.insert(HEADER_TOTAL_COUNT, HeaderValue::from(total));
    headers.insert(HEADER_PAGE_COUNT, HeaderValue::from(page.page_count(total)));
    headers.insert(HEADER_CURRENT_PAGE, HeaderValue::from(page.page));
    headers.insert(HEADER_PER_PAGE, HeaderValue::from(page.per_page));

    let items = with_screens(&state.pool, items, params.expand_screens()).await?;
    Ok((headers, Json(items)))
}

// ---------------------------------------------------------------------------
// POST /prototypes
// ---------------------------------------------------------------------------

/// Create a prototype in a project the caller can access.
///
/// Responds 200 with the created representation.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    payload: Result<Json<PrototypeInput>, JsonRejection>,
) -> AppResult<Json<PrototypeResponse>> {
    let input = body_or_bad_request(payload)?;
    let scope = auth.scope();

    let (changes, mut errors) = input.validate(ValidationMode::Create);
    if let Some(project_id) = changes.project_id {
        check_project_id(&state.pool, scope, project_id, &mut errors).await?;
    }
    errors.into_result()?;

    let created = PrototypeRepo::create(&state.pool, &changes.into()).await?;
    tracing::info!(
        id = created.id,
        project_id = created.project_id,
        user_id = auth.user_id,
        "Prototype created"
    );
    Ok(Json(created.into()))
}

// ---------------------------------------------------------------------------
// GET /prototypes/{id}
// ---------------------------------------------------------------------------

/// Get a single prototype. `?expand=screens` includes its screens.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    params: Result<Query<ExpandParams>, QueryRejection>,
) -> AppResult<Json<PrototypeResponse>> {
    let params = query_or_bad_request(params)?;
    let found = ensure_prototype_accessible(&state.pool, auth.scope(), id).await?;
    let mut items = with_screens(&state.pool, vec![found], params.screens()).await?;
    let item = items.pop().ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

// ---------------------------------------------------------------------------
// PUT /prototypes/{id}
// ---------------------------------------------------------------------------

/// Partially update a prototype. Omitted fields keep their values.
///
/// Visibility is checked before the body is parsed or validated.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<PrototypeInput>, JsonRejection>,
) -> AppResult<Json<PrototypeResponse>> {
    let scope = auth.scope();
    ensure_prototype_accessible(&state.pool, scope, id).await?;

    let input = body_or_bad_request(payload)?;
    let (changes, mut errors) = input.validate(ValidationMode::Update);
    if let Some(project_id) = changes.project_id {
        check_project_id(&state.pool, scope, project_id, &mut errors).await?;
    }
    errors.into_result()?;

    let updated = PrototypeRepo::update(&state.pool, scope, id, &changes.into())
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, user_id = auth.user_id, "Prototype updated");
    Ok(Json(updated.into()))
}

// ---------------------------------------------------------------------------
// DELETE /prototypes/{id}
// ---------------------------------------------------------------------------

/// Permanently delete a prototype and its screens.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PrototypeRepo::delete(&state.pool, auth.scope(), id).await?;
    if deleted {
        tracing::info!(id, user_id = auth.user_id, "Prototype deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
