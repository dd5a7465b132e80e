//! Paged list: the items of one page plus the pager that selected them.

use crate::error::{PagingError, Result};
use crate::pager::{PageMetadata, Pager, PagerData};
use crate::types::{PageRequest, FIRST_PAGE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::trace;

/// The items of a single page of a superset, with the page's metadata.
///
/// Built by counting the whole source once and keeping the items of the
/// requested page. The list never re-paginates; navigate a [`Pager`] and
/// build a new list instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    try_from = "PagedListData<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct PagedList<T> {
    #[serde(flatten)]
    pager: Pager,
    items: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedListData<T> {
    #[serde(flatten)]
    pager: PagerData,
    items: Vec<T>,
}

impl<T> TryFrom<PagedListData<T>> for PagedList<T> {
    type Error = PagingError;

    fn try_from(data: PagedListData<T>) -> Result<Self> {
        let pager = Pager::try_from(data.pager)?;
        // Items must be exactly what skip-then-take would select
        if data.items.len() != pager.page_range().len() {
            return Err(PagingError::invalid_argument(
                "items",
                i64::try_from(data.items.len()).unwrap_or(i64::MAX),
                "Items must match the current page of the superset.",
            ));
        }
        Ok(Self {
            pager,
            items: data.items,
        })
    }
}

impl<T> PagedList<T> {
    /// Paginate `source`, keeping the items of `page_number`.
    ///
    /// The whole source is consumed to count it. A page past the end yields
    /// an empty list rather than an error.
    pub fn new<I>(source: I, page_number: usize, page_size: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        // Validate before touching the source
        let probe = Pager::new(page_number, page_size, 0)?;
        let skip = probe.offset();

        let source = source.into_iter();
        let (lower, _) = source.size_hint();
        let mut items = Vec::with_capacity(lower.saturating_sub(skip).min(page_size));
        let mut total_item_count = 0usize;

        for item in source {
            if total_item_count >= skip && items.len() < page_size {
                items.push(item);
            }
            total_item_count += 1;
        }

        let pager = Pager::from_pager(&probe, Some(total_item_count))?;
        trace!(
            page_number,
            page_size,
            total_item_count,
            items = items.len(),
            "paginated source"
        );

        Ok(Self { pager, items })
    }

    /// Like [`PagedList::new`], for callers holding an optional source.
    ///
    /// Page parameters are validated before the source is checked.
    pub fn try_new<I>(source: Option<I>, page_number: usize, page_size: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Pager::new(page_number, page_size, 0)?;
        let source = source.ok_or(PagingError::AbsentSource)?;
        Self::new(source, page_number, page_size)
    }

    /// Paginate `source` at the page number and size of `pager`.
    ///
    /// The pager's total is ignored; the source is counted again.
    pub fn from_pager<I>(source: I, pager: &Pager) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(source, pager.page_number(), pager.page_size())
    }

    /// Paginate `source` as described by a [`PageRequest`]
    pub fn from_request<I>(source: I, request: &PageRequest) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(source, request.page_number, request.page_size)
    }

    /// An empty first page of the given size
    pub fn empty(page_size: usize) -> Result<Self> {
        Self::new(std::iter::empty(), FIRST_PAGE, page_size)
    }

    /// An empty list at the page number and size of `pager`
    pub fn empty_for(pager: &Pager) -> Result<Self> {
        Self::from_pager(std::iter::empty(), pager)
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the superset has no items.
    ///
    /// This looks at the total, not at this page: a page past the end of a
    /// non-empty superset has `len() == 0` but is not empty.
    pub fn is_empty(&self) -> bool {
        self.pager.total_item_count() == 0
    }

    /// Item at `index` within this page
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| PagingError::index_out_of_range(index, self.items.len()))
    }

    /// Items on this page, in source order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the items on this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Take the items, dropping the metadata
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Copy of the metadata this list was built with
    pub fn pager_data(&self) -> Pager {
        self.pager
    }

    /// Transform every item, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            pager: self.pager,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T: Serialize> PagedList<T> {
    /// Encode as JSON: page metadata followed by the items
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> PagedList<T> {
    /// Decode from JSON, deriving the metadata again from the page triple
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T> PageMetadata for PagedList<T> {
    fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl<T> Index<usize> for PagedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
