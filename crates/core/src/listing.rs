//! Sort, pagination, and expansion parameters for list endpoints.

/// Default page size when `per-page` is omitted.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Largest accepted page size.
pub const MAX_PER_PAGE: i64 = 100;

/// Name of the expandable screens relation.
pub const EXPAND_SCREENS: &str = "screens";

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn from_params(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            per_page: clamp_limit(per_page, DEFAULT_PER_PAGE, MAX_PER_PAGE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Number of pages needed for `total` items (0 when there are none).
    pub fn page_count(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.per_page - 1) / self.per_page
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Prototype attributes a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Type,
    Width,
    Height,
    ScaleFactor,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse a wire attribute name (camelCase, as in the JSON representation).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "type" => Some(Self::Type),
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "scaleFactor" => Some(Self::ScaleFactor),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl SortOrder {
    /// Parse `field` or `-field`. Unknown or empty values yield the default order.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        let (direction, name) = match raw.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, raw),
        };

        match SortField::parse(name) {
            Some(field) => Self { field, direction },
            None => Self::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Whether a comma-separated `expand` value requests `relation`.
pub fn expand_requests(expand: Option<&str>, relation: &str) -> bool {
    expand
        .map(|e| e.split(',').any(|part| part.trim() == relation))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp ---------------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 20, 100), 20);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 20, 100), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 20, 100), 1);
        assert_eq!(clamp_limit(Some(-3), 20, 100), 1);
    }

    #[test]
    fn clamp_page_floors_at_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(4)), 4);
    }

    // -- pagination ----------------------------------------------------------

    #[test]
    fn offset_is_zero_based_slice_start() {
        let p = Pagination::from_params(Some(2), Some(2));
        assert_eq!(p.limit(), 2);
        assert_eq!(p.offset(), 2);

        let p = Pagination::from_params(Some(2), Some(1));
        assert_eq!(p.offset(), 1);
    }

    #[test]
    fn page_count_rounds_up() {
        let p = Pagination::from_params(None, Some(4));
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(4), 1);
        assert_eq!(p.page_count(5), 2);
    }

    // -- sort ----------------------------------------------------------------

    #[test]
    fn sort_defaults_to_id_ascending() {
        assert_eq!(SortOrder::parse(None), SortOrder::default());
        assert_eq!(SortOrder::parse(Some("")), SortOrder::default());
    }

    #[test]
    fn leading_dash_means_descending() {
        let order = SortOrder::parse(Some("-title"));
        assert_eq!(order.field, SortField::Title);
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn camel_case_attribute_names() {
        let order = SortOrder::parse(Some("scaleFactor"));
        assert_eq!(order.field, SortField::ScaleFactor);
        assert_eq!(order.direction, SortDirection::Asc);
    }

    #[test]
    fn unknown_sort_attribute_falls_back_to_default() {
        assert_eq!(SortOrder::parse(Some("-projectSecret")), SortOrder::default());
        assert_eq!(SortOrder::parse(Some("-")), SortOrder::default());
    }

    // -- expand --------------------------------------------------------------

    #[test]
    fn expand_matches_listed_relation() {
        assert!(expand_requests(Some("screens"), EXPAND_SCREENS));
        assert!(expand_requests(Some("comments, screens"), EXPAND_SCREENS));
        assert!(!expand_requests(Some("comments"), EXPAND_SCREENS));
        assert!(!expand_requests(None, EXPAND_SCREENS));
    }
}
