//! Page-number pagination for directory queries.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In GraphQL query resolver
//! let args = PageArgs { search_string: Some("alpha".into()), ..Default::default() };
//! let validated = args.validate();
//!
//! // In model
//! let items = Community::find_page(&validated, pool).await?;
//! let total = Community::count_matching(&validated, pool).await?;
//!
//! let is_next = validated.has_next(total, items.len());
//! ```
//!
//! The page fetch and the total count are two independent queries with no
//! shared snapshot, so `has_next` can be stale under concurrent writes.

/// Sort direction applied to the creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction, for interpolation into ORDER BY.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Input arguments for page-number pagination.
///
/// All fields optional; `validate` applies defaults and bounds.
#[derive(Debug, Clone, Default)]
pub struct PageArgs {
    /// Case-insensitive substring filter (name or handle).
    pub search_string: Option<String>,
    /// 1-based page number.
    pub page_number: Option<i32>,
    /// Items per page.
    pub page_size: Option<i32>,
    /// Sort direction for the creation timestamp.
    pub sort_by: Option<SortOrder>,
}

impl PageArgs {
    /// Normalize arguments: defaults (page 1, size 20, newest first),
    /// bounds (page >= 1, size 1-100), and search trimming.
    ///
    /// The size bound is a deliberate cap this layer imposes; callers
    /// asking for more than 100 rows get 100, not an error.
    pub fn validate(&self) -> ValidatedPageArgs {
        let page_number = self.page_number.unwrap_or(1).max(1);
        let page_size = self.page_size.unwrap_or(20).clamp(1, 100);

        // An all-whitespace search means "match everything"
        let search = self
            .search_string
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        ValidatedPageArgs {
            search,
            page_number,
            page_size,
            sort_by: self.sort_by.unwrap_or_default(),
        }
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone)]
pub struct ValidatedPageArgs {
    /// Trimmed search string; `None` matches all records.
    pub search: Option<String>,
    /// 1-based page number (>= 1).
    pub page_number: i32,
    /// Items per page (1-100, default 20).
    pub page_size: i32,
    /// Sort direction.
    pub sort_by: SortOrder,
}

impl ValidatedPageArgs {
    /// Number of records to skip: `(page_number - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page_number as i64 - 1) * self.page_size as i64
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    /// SQL ILIKE pattern for the search filter, if any.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| format!("%{}%", s))
    }

    /// Whether records exist beyond the returned page.
    ///
    /// `total_count` comes from a separate COUNT query over the same filter.
    pub fn has_next(&self, total_count: i64, returned: usize) -> bool {
        total_count > self.offset() + returned as i64
    }
}
