//! Pagination bounds and search-term handling for list queries.

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a list query will return.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a requested page size into `0..=MAX_LIMIT`, defaulting to
/// [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative, defaulting to zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// A filtered, windowed read over one entity table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of matching rows to skip.
    pub skip: Option<i64>,
    /// Maximum number of rows to return.
    pub limit: Option<i64>,
    /// Case-insensitive substring filter on the table's search column.
    pub search: Option<String>,
}

impl PageRequest {
    pub fn new(skip: Option<i64>, limit: Option<i64>, search: Option<String>) -> Self {
        Self {
            skip,
            limit,
            search,
        }
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.skip)
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit)
    }

    /// The `ILIKE` pattern for the search term, or `None` when the term is
    /// absent or empty (no filtering).
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(contains_pattern)
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere in the column.
///
/// `%`, `_` and `\` in the term are escaped so they match literally
/// (PostgreSQL's default `LIKE` escape character is the backslash).
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
