//! The normalized listing envelope.
//!
//! The backend wraps list responses in several inconsistent shapes. Every
//! consumer of this workspace sees exactly one: [`Page`].

use serde::{Deserialize, Serialize};

/// Pagination metadata in the normalized envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Total items across all pages.
    pub total: u64,
    /// Total number of pages.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            total: 0,
            total_pages: 1,
        }
    }
}

/// A page of listing data plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// An empty page with default pagination.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}
