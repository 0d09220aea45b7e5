//! Offset pagination: request normalization and page arithmetic.
//!
//! All arithmetic lives here as pure functions so the storage gateway
//! only has to run a count query and a slice query.

use serde::{Deserialize, Serialize};

/// A 1-based page request. Not persisted; constructed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageRequest {
    /// Apply defaults: `page < 1` becomes 1, `limit == 0` becomes 10.
    pub fn normalized(self) -> Self {
        Self {
            page: if self.page < 1 { 1 } else { self.page },
            limit: if self.limit == 0 { 10 } else { self.limit },
        }
    }

    /// Rows to skip for this page: `(page - 1) * limit`.
    ///
    /// Both values arrive from client query params, so the arithmetic
    /// saturates instead of overflowing. Callers must normalize first;
    /// a zero page would underflow.
    pub const fn offset(self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// A single page of results with navigation metadata, computed fresh per
/// request from the row slice and an independent total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub total_records: u64,
    pub total_pages: u64,
    pub records: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub page: u64,
    pub prev_page: u64,
    pub next_page: u64,
}

impl<T> Page<T> {
    /// Assemble a page from a normalized request, the row slice, and the
    /// total live-row count.
    ///
    /// `prev_page` floors at the current page when already at page 1;
    /// `next_page` is `page + 1` unconditionally, even past the last
    /// page. The asymmetry is deliberate and callers must detect
    /// past-the-end themselves.
    pub fn assemble(request: PageRequest, records: Vec<T>, total_records: u64) -> Self {
        Self {
            total_records,
            total_pages: total_pages(total_records, request.limit),
            records,
            offset: request.offset(),
            limit: request.limit,
            page: request.page,
            prev_page: prev_page(request.page),
            next_page: request.page.saturating_add(1),
        }
    }
}

/// `ceil(total / limit)`; an empty table has zero pages.
const fn total_pages(total: u64, limit: u64) -> u64 {
    total.div_ceil(limit)
}

const fn prev_page(page: u64) -> u64 {
    if page > 1 {
        page - 1
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u64, limit: u64) -> PageRequest {
        PageRequest { page, limit }
    }

    #[test]
    fn test_normalize_applies_defaults() {
        let normalized = request(0, 0).normalized();
        assert_eq!(normalized, request(1, 10));
    }

    #[test]
    fn test_normalize_keeps_explicit_values() {
        let normalized = request(3, 25).normalized();
        assert_eq!(normalized, request(3, 25));
    }

    #[test]
    fn test_offset_first_page_is_zero() {
        assert_eq!(request(1, 10).offset(), 0);
    }

    #[test]
    fn test_offset_skips_prior_pages() {
        assert_eq!(request(3, 10).offset(), 20);
        assert_eq!(request(4, 7).offset(), 21);
    }

    #[test]
    fn test_first_page_of_twenty_five() {
        let page = Page::assemble(request(1, 10), vec![0; 10], 25);
        assert_eq!(page.offset, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.prev_page, 1);
        assert_eq!(page.next_page, 2);
    }

    #[test]
    fn test_last_page_of_twenty_five() {
        let page = Page::assemble(request(3, 10), vec![0; 5], 25);
        assert_eq!(page.offset, 20);
        assert_eq!(page.prev_page, 2);
        // next_page runs past total_pages by design; callers detect
        // past-the-end themselves.
        assert_eq!(page.next_page, 4);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_huge_page_value_saturates_instead_of_overflowing() {
        let normalized = request(u64::MAX, 10).normalized();
        assert_eq!(normalized.offset(), u64::MAX);

        let page = Page::<i64>::assemble(normalized, vec![], 0);
        assert_eq!(page.next_page, u64::MAX);
        assert_eq!(page.prev_page, u64::MAX - 1);
    }

    #[test]
    fn test_empty_table_has_zero_pages() {
        let page = Page::<i64>::assemble(request(1, 10), vec![], 0);
        assert_eq!(page.total_records, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.prev_page, 1);
        assert_eq!(page.next_page, 2);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let page = Page::assemble(request(2, 10), vec![0; 10], 20);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_serializes_all_navigation_fields() -> serde_json::Result<()> {
        let page = Page::assemble(request(2, 5), vec![1, 2, 3, 4, 5], 12);
        let json = serde_json::to_value(&page)?;
        assert_eq!(json["total_records"], 12);
        assert_eq!(json["total_pages"], 3);
        assert_eq!(json["offset"], 5);
        assert_eq!(json["prev_page"], 1);
        assert_eq!(json["next_page"], 3);
        Ok(())
    }
}
