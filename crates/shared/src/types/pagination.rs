//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted page size.
pub const MAX_LIMIT: u64 = 100;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u64 = 5;

/// Error for out-of-range pagination parameters.
///
/// Out-of-range values are rejected, not clamped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Page number below 1.
    #[error("page must be at least 1")]
    PageOutOfRange,
    /// Limit outside [1, {MAX_LIMIT}].
    #[error("limit must be between 1 and {MAX_LIMIT}")]
    LimitOutOfRange,
}

/// Validated parameters for paginated queries (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number.
    pub page: u32,
    /// Number of items per page.
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Builds a page request from optional query parameters, applying
    /// defaults and bounds (page >= 1, limit in [1, 100]).
    ///
    /// # Errors
    ///
    /// Returns `PageError` if either supplied value is out of range.
    pub fn from_params(page: Option<u32>, limit: Option<u64>) -> Result<Self, PageError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(PageError::PageOutOfRange);
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 || limit > MAX_LIMIT {
            return Err(PageError::LimitOutOfRange);
        }

        Ok(Self { page, limit })
    }

    /// Calculates the offset for database queries.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::from_params(None, None).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 5);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_offset_for_later_pages() {
        // limit=5, page=2 over 12 rows selects rows 5..10.
        let req = PageRequest::from_params(Some(2), Some(5)).unwrap();
        assert_eq!(req.offset(), 5);

        let req = PageRequest::from_params(Some(3), Some(50)).unwrap();
        assert_eq!(req.offset(), 100);
    }

    #[test]
    fn test_page_zero_rejected() {
        assert_eq!(
            PageRequest::from_params(Some(0), None),
            Err(PageError::PageOutOfRange)
        );
    }

    #[test]
    fn test_limit_bounds() {
        assert_eq!(
            PageRequest::from_params(None, Some(0)),
            Err(PageError::LimitOutOfRange)
        );
        assert_eq!(
            PageRequest::from_params(None, Some(101)),
            Err(PageError::LimitOutOfRange)
        );
        assert!(PageRequest::from_params(None, Some(100)).is_ok());
        assert!(PageRequest::from_params(None, Some(1)).is_ok());
    }
}
