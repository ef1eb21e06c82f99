//! Shared query parameter types for API handlers.
//!
//! Parameter names follow the public URL contract (`per-page`,
//! `search[projectId]`) rather than Rust naming. Structs stay flat because
//! `#[serde(flatten)]` breaks numeric parsing of URL-encoded values.

use designdeck_core::listing::{expand_requests, Pagination, SortOrder, EXPAND_SCREENS};
use designdeck_core::types::DbId;
use serde::Deserialize;

/// `?expand=` relation list (comma-separated).
#[derive(Debug, Default, Deserialize)]
pub struct ExpandParams {
    pub expand: Option<String>,
}

impl ExpandParams {
    pub fn screens(&self) -> bool {
        expand_requests(self.expand.as_deref(), EXPAND_SCREENS)
    }
}

/// Query parameters accepted by `GET /prototypes`.
#[derive(Debug, Default, Deserialize)]
pub struct ListPrototypesParams {
    /// 1-based page number.
    pub page: Option<i64>,
    #[serde(rename = "per-page")]
    pub per_page: Option<i64>,
    /// `search[projectId]` equality filter.
    #[serde(rename = "search[projectId]")]
    pub project_id: Option<DbId>,
    /// `title` or `-title` style sort attribute.
    pub sort: Option<String>,
    pub expand: Option<String>,
}

impl ListPrototypesParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_params(self.page, self.per_page)
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(self.sort.as_deref())
    }

    pub fn expand_screens(&self) -> bool {
        expand_requests(self.expand.as_deref(), EXPAND_SCREENS)
    }
}
