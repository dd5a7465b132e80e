//! Paged collections.
//!
//! A [`PagedList`] holds one page of a source sequence together with the
//! [`Pager`](crate::Pager) that selected it. [`Paginate`] builds one from
//! any iterable.

mod paged_list;
mod paginate;

pub use paged_list::PagedList;
pub use paginate::Paginate;
