//! Pager: page count arithmetic and clamped navigation.
//!
//! This module provides the [`Pager`] value that supports:
//! - Validated construction from a page number, page size and item total
//! - Re-derivation from another pager over a new total
//! - Clamped navigation (next, previous, first, last, jumps)

mod metadata;
mod navigation;
mod state;

pub use metadata::PageMetadata;
pub(crate) use state::PagerData;
pub use state::Pager;
