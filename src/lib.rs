//! # Paging
//!
//! Page arithmetic and clamped page navigation over any sequence of items.
//!
//! ## Architecture
//!
//! - **Pager** (`pager`): page count, navigation flags and clamped moves
//! - **Collections** (`collections`): the items of one page, built from any iterable
//! - **Types** (`types`): page requests and shared constants
//!
//! ## Usage
//!
//! ```rust
//! use paging::{PageMetadata, Paginate, Pager};
//!
//! # fn main() -> paging::Result<()> {
//! let mut pager = Pager::new(1, 10, 95)?;
//! assert_eq!(pager.page_count(), 10);
//!
//! // Navigation clamps instead of failing
//! pager.move_forward(25);
//! assert!(pager.is_last_page());
//!
//! // Slice a source at the pager's position
//! let page = (0..95).paginate_with(&pager)?;
//! assert_eq!(page.items(), &[90, 91, 92, 93, 94]);
//! assert!(!page.has_next_page());
//! # Ok(())
//! # }
//! ```

pub mod collections;
pub mod error;
pub mod pager;
pub mod types;

pub use error::{PagingError, Result};
pub use types::{PageRequest, DEFAULT_PAGE_SIZE, FIRST_PAGE};

// Re-export main public API
pub use collections::{PagedList, Paginate};
pub use pager::{PageMetadata, Pager};
