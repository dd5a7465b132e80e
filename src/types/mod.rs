//! Common types used throughout the crate.

use crate::error::Result;
use crate::pager::Pager;
use serde::{Deserialize, Serialize};

/// Page size used when none is given (10 items)
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The first page number. Page numbers are 1-based.
pub const FIRST_PAGE: usize = 1;

/// Which page to show and how large pages are.
///
/// This is the caller-facing request; the derived metadata lives on
/// [`Pager`], built once the total item count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// One-based page number
    pub page_number: usize,
    /// Maximum items per page
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a request for the given page with the default page size
    pub fn new(page_number: usize) -> Self {
        Self {
            page_number,
            ..Self::default()
        }
    }

    /// Set page number
    pub fn page_number(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    /// Set page size
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build a pager over a superset of `total_item_count` items
    pub fn pager(&self, total_item_count: usize) -> Result<Pager> {
        Pager::new(self.page_number, self.page_size, total_item_count)
    }
}

impl From<&Pager> for PageRequest {
    fn from(pager: &Pager) -> Self {
        Self {
            page_number: pager.page_number(),
            page_size: pager.page_size(),
        }
    }
}
