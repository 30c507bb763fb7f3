//! Pagination types for remote listing calls.
//!
//! The remote API pages from 0. Browsing requests use one large page so a
//! listing is a single snapshot; true incremental paging is out of scope.

use serde::{Deserialize, Serialize};

/// Page size used for browse/search snapshots.
pub const SNAPSHOT_PAGE_SIZE: u32 = 1000;

/// Request parameters for paginated remote queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based, remote convention).
    pub page: u32,
    /// Maximum number of results per page.
    pub max_results: u32,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u32, max_results: u32) -> Self {
        Self { page, max_results }
    }

    /// One large page covering a whole listing snapshot.
    pub fn snapshot() -> Self {
        Self {
            page: 0,
            max_results: SNAPSHOT_PAGE_SIZE,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_page() {
        let page = PageRequest::snapshot();
        assert_eq!(page.page, 0);
        assert_eq!(page.max_results, 1000);
    }
}
