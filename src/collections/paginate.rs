//! `paginate` on anything iterable.

use super::PagedList;
use crate::error::Result;
use crate::pager::Pager;

/// Extension for paginating any [`IntoIterator`].
///
/// The mapping variants run the selector only on the items of the page.
pub trait Paginate: IntoIterator + Sized {
    fn paginate(self, page_number: usize, page_size: usize) -> Result<PagedList<Self::Item>> {
        PagedList::new(self, page_number, page_size)
    }

    fn paginate_with(self, pager: &Pager) -> Result<PagedList<Self::Item>> {
        PagedList::from_pager(self, pager)
    }

    fn paginate_map<U, F>(self, page_number: usize, page_size: usize, f: F) -> Result<PagedList<U>>
    where
        F: FnMut(Self::Item) -> U,
    {
        Ok(self.paginate(page_number, page_size)?.map(f))
    }

    fn paginate_map_with<U, F>(self, pager: &Pager, f: F) -> Result<PagedList<U>>
    where
        F: FnMut(Self::Item) -> U,
    {
        Ok(self.paginate_with(pager)?.map(f))
    }
}

impl<I: IntoIterator> Paginate for I {}
