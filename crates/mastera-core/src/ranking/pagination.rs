//! Offset pagination

/// Upper bound on page size when none is configured
pub const DEFAULT_MAX_LIMIT: u32 = 100;

/// Normalized page request (1-based page, clamped limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Build a request from optional caller input.
    ///
    /// Missing values fall back to page 1 and `default_limit`; `limit` is
    /// clamped to `1..=max_limit` and `page` to at least 1.
    pub fn new(page: Option<u32>, limit: Option<u32>, default_limit: u32, max_limit: u32) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).clamp(1, max_limit),
        }
    }

    /// Rows to skip
    #[inline]
    pub fn skip(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    /// Rows to take
    #[inline]
    pub fn take(&self) -> i64 {
        i64::from(self.limit)
    }
}

/// Pagination metadata returned alongside a page of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl PageInfo {
    pub fn new(request: &PageRequest, total: i64) -> Self {
        let limit = i64::from(request.limit);
        let total_pages = if total <= 0 { 0 } else { (total + limit - 1) / limit };
        Self {
            page: request.page,
            limit: request.limit,
            total: total.max(0),
            total_pages,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: PageInfo) -> Self {
        Self { items, pagination }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
