//! Pagination metadata.

use serde::{Deserialize, Serialize};

/// A pointer to an adjacent page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub page: u32,
    pub limit: u32,
}

/// Pagination metadata for a listing response.
///
/// `next`/`prev` are present only when a further page exists in that
/// direction, computed from the filtered record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total matching records.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Next page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    /// Previous page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
}

impl Pagination {
    /// Build pagination metadata for a window over `total` records.
    pub fn build(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            (total.div_ceil(u64::from(limit))).min(u64::from(u32::MAX)) as u32
        };

        let next = (u64::from(page) * u64::from(limit) < total).then_some(PageRef {
            page: page + 1,
            limit,
        });
        let prev = (page > 1).then_some(PageRef {
            page: page - 1,
            limit,
        });

        Self {
            page,
            limit,
            total,
            total_pages,
            next,
            prev,
        }
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page_has_both_links() {
        let pagination = Pagination::build(2, 10, 25);
        assert_eq!(pagination.next, Some(PageRef { page: 3, limit: 10 }));
        assert_eq!(pagination.prev, Some(PageRef { page: 1, limit: 10 }));
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn test_last_page_has_only_prev() {
        let pagination = Pagination::build(3, 10, 25);
        assert_eq!(pagination.next, None);
        assert_eq!(pagination.prev, Some(PageRef { page: 2, limit: 10 }));
        assert!(pagination.is_last());
    }

    #[test]
    fn test_first_page_has_only_next() {
        let pagination = Pagination::build(1, 10, 25);
        assert_eq!(pagination.next, Some(PageRef { page: 2, limit: 10 }));
        assert_eq!(pagination.prev, None);
        assert!(pagination.is_first());
    }

    #[test]
    fn test_single_page_has_neither() {
        let pagination = Pagination::build(1, 10, 5);
        assert_eq!(pagination.next, None);
        assert_eq!(pagination.prev, None);
    }

    #[test]
    fn test_empty_total_still_one_page() {
        let pagination = Pagination::build(1, 10, 0);
        assert_eq!(pagination.total_pages, 1);
        assert_eq!(pagination.next, None);
    }

    #[test]
    fn test_links_omitted_from_json_when_absent() {
        let json = serde_json::to_value(Pagination::build(1, 10, 5)).unwrap();
        assert!(json.get("next").is_none());
        assert!(json.get("prev").is_none());
    }
}
