//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use designdeck_core::access::{is_active_status, AccessScope, UserType};
use designdeck_core::error::CoreError;
use designdeck_core::types::DbId;
use designdeck_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// The token must be valid and its subject must be an existing user whose
/// status is `active`; anything else is rejected with 401 before the
/// handler runs.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// Role loaded from the `users` row.
    pub user_type: UserType,
}

impl AuthUser {
    /// Projects this user may read and write.
    pub fn scope(&self) -> AccessScope {
        AccessScope::for_user(self.user_id, self.user_type)
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        let user = UserRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .filter(|u| is_active_status(&u.status))
            .ok_or_else(|| {
                tracing::warn!(user_id = claims.sub, "Token subject is missing or inactive");
                unauthorized("Invalid or expired token")
            })?;

        Ok(AuthUser {
            user_id: user.id,
            user_type: UserType::parse(&user.user_type)?,
        })
    }
}
