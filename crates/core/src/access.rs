//! User roles and the project access scope derived from them.
//!
//! Regular users see only the projects linked to them through
//! `user_project_rels`; super users see every project. Every query that
//! touches prototypes binds [`AccessScope::owner_filter`] into the same SQL
//! predicate, so list filtering and single-item lookups cannot drift apart.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

pub const USER_TYPE_REGULAR: &str = "regular";
pub const USER_TYPE_SUPER: &str = "super";

pub const USER_STATUS_ACTIVE: &str = "active";
pub const USER_STATUS_INACTIVE: &str = "inactive";

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Regular,
    Super,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => USER_TYPE_REGULAR,
            Self::Super => USER_TYPE_SUPER,
        }
    }

    /// Parse the value stored in `users.type`.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            USER_TYPE_REGULAR => Ok(Self::Regular),
            USER_TYPE_SUPER => Ok(Self::Super),
            other => Err(CoreError::Internal(format!("Unknown user type '{other}'"))),
        }
    }
}

/// Which projects a caller may read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Unrestricted (super users).
    All,
    /// Only projects linked to this user id.
    Projects(DbId),
}

impl AccessScope {
    pub fn for_user(user_id: DbId, user_type: UserType) -> Self {
        match user_type {
            UserType::Super => Self::All,
            UserType::Regular => Self::Projects(user_id),
        }
    }

    /// Value bound as the owner parameter of the access predicate.
    ///
    /// `None` disables the ownership join entirely.
    pub fn owner_filter(&self) -> Option<DbId> {
        match self {
            Self::All => None,
            Self::Projects(user_id) => Some(*user_id),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Whether a user with the given stored status may authenticate.
pub fn is_active_status(status: &str) -> bool {
    status == USER_STATUS_ACTIVE
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn super_user_scope_is_unrestricted() {
        let scope = AccessScope::for_user(7, UserType::Super);
        assert_eq!(scope, AccessScope::All);
        assert_eq!(scope.owner_filter(), None);
        assert!(scope.is_unrestricted());
    }

    #[test]
    fn regular_user_scope_filters_by_owner() {
        let scope = AccessScope::for_user(1002, UserType::Regular);
        assert_eq!(scope.owner_filter(), Some(1002));
        assert!(!scope.is_unrestricted());
    }

    #[test]
    fn user_type_round_trips_stored_values() {
        assert_eq!(UserType::parse("regular").unwrap(), UserType::Regular);
        assert_eq!(UserType::parse("super").unwrap().as_str(), "super");
    }

    #[test]
    fn unknown_user_type_is_internal_error() {
        assert_matches!(UserType::parse("admin"), Err(CoreError::Internal(_)));
    }

    #[test]
    fn only_active_status_authenticates() {
        assert!(is_active_status(USER_STATUS_ACTIVE));
        assert!(!is_active_status(USER_STATUS_INACTIVE));
        assert!(!is_active_status(""));
    }
}
