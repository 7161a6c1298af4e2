//! Offset-based pagination for list endpoints.
//!
//! The movie listing slices its filtered result set by page number and
//! page size and reports the total page count alongside the data.

use crate::common::ApiError;

/// Default page size for the movie listing
pub const DEFAULT_PAGE_SIZE: i64 = 2;

/// A validated page request: 1-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
    size: i64,
}

impl Page {
    /// Validate raw `page`/`limit` query values, applying defaults.
    pub fn new(number: Option<i64>, size: Option<i64>) -> Result<Self, ApiError> {
        let number = number.unwrap_or(1);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

        if number < 1 {
            return Err(ApiError::Validation(
                "page must be a positive integer".to_string(),
            ));
        }
        if size < 1 {
            return Err(ApiError::Validation(
                "limit must be a positive integer".to_string(),
            ));
        }

        Ok(Page { number, size })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.size
    }

    /// Total page count for `total` matching rows: ceil(total / size).
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.size - 1) / self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Page::new(None, None).unwrap();
        assert_eq!(page.number(), 1);
        assert_eq!(page.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_offset_for_second_page() {
        let page = Page::new(Some(2), Some(2)).unwrap();
        assert_eq!(page.offset(), 2);
        assert_eq!(page.limit(), 2);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        // 5 matching movies at limit=2 span 3 pages
        let page = Page::new(Some(2), Some(2)).unwrap();
        assert_eq!(page.total_pages(5), 3);
        assert_eq!(page.total_pages(4), 2);
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(Page::new(Some(0), None).is_err());
        assert!(Page::new(Some(-1), None).is_err());
        assert!(Page::new(None, Some(0)).is_err());
    }
}
