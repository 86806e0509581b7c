//! Page arithmetic for paginated listings.
//!
//! Listing endpoints are always paginated: callers that omit `page`/`limit`
//! get the first page with the default size. Out-of-range values are
//! normalised rather than rejected.

use serde::Serialize;

/// Page number used when the caller omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller omits `limit` or passes a non-positive one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on the page size.
pub const MAX_LIMIT: i64 = 100;

/// A normalised page request (1-based `page`, `limit` in `1..=MAX_LIMIT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from optional raw query values.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        Self { page, limit }
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata returned next to a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageMeta {
    /// Compute metadata for `request` given the total number of matches.
    pub fn new(total: i64, request: PageRequest) -> Self {
        let total_pages = (total + request.limit - 1) / request.limit;
        Self {
            total,
            page: request.page,
            limit: request.limit,
            total_pages,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let req = PageRequest::new(None, None);
        assert_eq!(req, PageRequest { page: 1, limit: 10 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn non_positive_values_fall_back_to_defaults() {
        let req = PageRequest::new(Some(0), Some(-5));
        assert_eq!(req, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn limit_is_capped() {
        let req = PageRequest::new(Some(2), Some(10_000));
        assert_eq!(req.limit, MAX_LIMIT);
        assert_eq!(req.offset(), MAX_LIMIT);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(Some(3), Some(7)).offset(), 14);
    }

    #[test]
    fn total_pages_rounds_up() {
        let meta = PageMeta::new(21, PageRequest::new(Some(1), Some(10)));
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        let meta = PageMeta::new(20, PageRequest::new(Some(2), Some(10)));
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let meta = PageMeta::new(0, PageRequest::default());
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn page_past_the_end_keeps_requested_number() {
        let meta = PageMeta::new(5, PageRequest::new(Some(4), Some(2)));
        assert_eq!(meta.page, 4);
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn serializes_camel_case() {
        let meta = PageMeta::new(11, PageRequest::new(Some(1), Some(5)));
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["total"], 11);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPrevPage"], false);
    }
}
