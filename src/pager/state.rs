//! Pager state: the page triple, its derived page count, and the four
//! navigation flags.

use crate::error::{PagingError, Result};
use crate::types::FIRST_PAGE;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// One page's position within a virtual superset of items.
///
/// A pager owns `(page_number, page_size, total_item_count)` and keeps the
/// derived page count and flags in sync with it. It is a plain value: copy it
/// freely, mutate it only through the navigation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PagerData")]
pub struct Pager {
    page_number: usize,
    page_size: usize,
    total_item_count: usize,
    page_count: usize,
    has_previous_page: bool,
    has_next_page: bool,
    is_first_page: bool,
    is_last_page: bool,
}

/// Fields a pager is rebuilt from when decoding.
///
/// Signed so that negative counts coming off the wire are reported as
/// invalid arguments rather than as type mismatches.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PagerData {
    pub page_number: i64,
    pub page_size: i64,
    pub total_item_count: i64,
}

impl TryFrom<PagerData> for Pager {
    type Error = PagingError;

    fn try_from(data: PagerData) -> Result<Self> {
        Pager::checked(data.page_number, data.page_size, data.total_item_count)
    }
}

impl Pager {
    /// Create a pager for `page_number` of a superset of `total_item_count`
    /// items split into pages of `page_size`.
    ///
    /// The page number is not clamped: a pager may point past the last page,
    /// in which case all four flags are `false`.
    pub fn new(page_number: usize, page_size: usize, total_item_count: usize) -> Result<Self> {
        if page_number < FIRST_PAGE {
            return Err(reject("pageNumber", 0, "PageNumber cannot be below 1."));
        }
        if page_size < 1 {
            return Err(reject("pageSize", 0, "PageSize cannot be less than 1."));
        }

        Ok(Self::derive(page_number, page_size, total_item_count))
    }

    /// Create a pager from signed raw values, as read from a wire format or
    /// a command line.
    pub fn checked(page_number: i64, page_size: i64, total_item_count: i64) -> Result<Self> {
        if page_number < 1 {
            return Err(reject("pageNumber", page_number, "PageNumber cannot be below 1."));
        }
        if page_size < 1 {
            return Err(reject("pageSize", page_size, "PageSize cannot be less than 1."));
        }
        if total_item_count < 0 {
            return Err(reject(
                "totalItemCount",
                total_item_count,
                "TotalItemCount cannot be less than 0.",
            ));
        }

        Self::new(
            to_usize("pageNumber", page_number)?,
            to_usize("pageSize", page_size)?,
            to_usize("totalItemCount", total_item_count)?,
        )
    }

    /// Rebuild a pager from another one, optionally over a different total.
    ///
    /// Page count and flags are derived again, so they may differ from the
    /// source's. Fails if the source sits on page 0, which only a navigated
    /// zero-item pager can do.
    pub fn from_pager(source: &Pager, total_item_count: Option<usize>) -> Result<Self> {
        Self::new(
            source.page_number,
            source.page_size,
            total_item_count.unwrap_or(source.total_item_count),
        )
    }

    /// Like [`Pager::from_pager`], for callers holding an optional source
    pub fn try_from_pager(source: Option<&Pager>, total_item_count: Option<usize>) -> Result<Self> {
        let source = source.ok_or(PagingError::NullSource)?;
        Self::from_pager(source, total_item_count)
    }

    fn derive(page_number: usize, page_size: usize, total_item_count: usize) -> Self {
        let page_count = if total_item_count > 0 {
            total_item_count.div_ceil(page_size)
        } else {
            0
        };

        let mut pager = Self {
            page_number,
            page_size,
            total_item_count,
            page_count,
            has_previous_page: false,
            has_next_page: false,
            is_first_page: false,
            is_last_page: false,
        };

        // Flags stay false unless the page number points at an existing page
        if pager.page_count > 0 && pager.page_number <= pager.page_count {
            pager.update_flags();
        }
        pager
    }

    /// Set the page number and recompute every flag without the validity
    /// gate used at construction. Callers clamp first.
    pub(super) fn move_to(&mut self, page_number: usize) {
        self.page_number = page_number;
        self.update_flags();
    }

    fn update_flags(&mut self) {
        self.has_previous_page = self.page_number > FIRST_PAGE;
        self.has_next_page = self.page_number < self.page_count;
        self.is_first_page = self.page_number == FIRST_PAGE;
        self.is_last_page = self.page_number == self.page_count;
    }

    /// One-based index of the current page, zero only after navigating a
    /// pager over an empty superset
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Maximum number of items on any page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items in the whole superset
    pub fn total_item_count(&self) -> usize {
        self.total_item_count
    }

    /// Number of pages in the superset
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether a page precedes the current one
    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Whether a page follows the current one
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Whether the current page is page 1
    pub fn is_first_page(&self) -> bool {
        self.is_first_page
    }

    /// Whether the current page is the last page
    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    /// Number of superset items before the current page
    pub fn offset(&self) -> usize {
        self.page_number
            .saturating_sub(FIRST_PAGE)
            .saturating_mul(self.page_size)
    }

    /// Superset indices covered by the current page, clipped to the total.
    ///
    /// Empty when the page number points past the last page.
    pub fn page_range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_item_count);
        let end = self
            .offset()
            .saturating_add(self.page_size)
            .min(self.total_item_count);
        start..end
    }

    /// Encode as JSON, derived fields included
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON. Only the page triple is read; everything else is
    /// derived again.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn reject(name: &'static str, value: i64, constraint: &'static str) -> PagingError {
    debug!(name, value, "rejected pager parameter");
    PagingError::invalid_argument(name, value, constraint)
}

fn to_usize(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| reject(name, value, "Value does not fit the platform's index range."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_many_pages() -> Result<()> {
        let pager = Pager::new(1, 10, 100)?;
        assert_eq!(pager.page_count(), 10);
        assert!(pager.is_first_page());
        assert!(pager.has_next_page());
        assert!(!pager.has_previous_page());
        assert!(!pager.is_last_page());
        Ok(())
    }

    #[test]
    fn test_middle_page() -> Result<()> {
        let pager = Pager::new(2, 10, 50)?;
        assert_eq!(pager.page_count(), 5);
        assert!(pager.has_previous_page());
        assert!(pager.has_next_page());
        assert!(!pager.is_first_page());
        assert!(!pager.is_last_page());
        Ok(())
    }

    #[test]
    fn test_single_page_is_first_and_last() -> Result<()> {
        let pager = Pager::new(1, 10, 7)?;
        assert_eq!(pager.page_count(), 1);
        assert!(pager.is_first_page());
        assert!(pager.is_last_page());
        assert!(!pager.has_previous_page());
        assert!(!pager.has_next_page());
        Ok(())
    }

    #[test]
    fn test_page_count_rounds_up() -> Result<()> {
        assert_eq!(Pager::new(1, 10, 101)?.page_count(), 11);
        assert_eq!(Pager::new(1, 10, 100)?.page_count(), 10);
        assert_eq!(Pager::new(1, 1, 1)?.page_count(), 1);
        assert_eq!(Pager::new(1, usize::MAX, usize::MAX)?.page_count(), 1);
        Ok(())
    }

    #[test]
    fn test_empty_superset_has_no_flags() -> Result<()> {
        let pager = Pager::new(1, 10, 0)?;
        assert_eq!(pager.page_count(), 0);
        assert_eq!(pager.page_number(), 1);
        assert!(!pager.has_previous_page());
        assert!(!pager.has_next_page());
        assert!(!pager.is_first_page());
        assert!(!pager.is_last_page());
        Ok(())
    }

    #[test]
    fn test_page_past_end_is_kept_but_flagless() -> Result<()> {
        let pager = Pager::new(8, 10, 50)?;
        assert_eq!(pager.page_number(), 8);
        assert_eq!(pager.page_count(), 5);
        assert!(!pager.has_previous_page());
        assert!(!pager.has_next_page());
        assert!(!pager.is_first_page());
        assert!(!pager.is_last_page());
        assert!(pager.page_range().is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Pager::new(0, 10, 10).unwrap_err().is_invalid_argument());
        assert!(Pager::new(1, 0, 10).unwrap_err().is_invalid_argument());

        let err = Pager::checked(1, 10, -1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "totalItemCount = -1. TotalItemCount cannot be less than 0."
        );
        assert!(Pager::checked(-3, 10, 10).unwrap_err().is_invalid_argument());
        assert!(Pager::checked(1, -10, 10).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_checked_matches_new() -> Result<()> {
        assert_eq!(Pager::checked(3, 7, 40)?, Pager::new(3, 7, 40)?);
        Ok(())
    }

    #[test]
    fn test_copy_rederives() -> Result<()> {
        let source = Pager::new(1, 10, 100)?;
        let copy = Pager::from_pager(&source, None)?;
        assert_eq!(copy, source);

        // Shrinking the total turns page 1 into the only page
        let shrunk = Pager::from_pager(&source, Some(5))?;
        assert_eq!(shrunk.page_count(), 1);
        assert!(shrunk.is_last_page());
        assert!(!shrunk.has_next_page());

        let emptied = Pager::from_pager(&source, Some(0))?;
        assert_eq!(emptied.page_count(), 0);
        assert!(!emptied.is_first_page());
        Ok(())
    }

    #[test]
    fn test_copy_of_page_zero_fails() -> Result<()> {
        let mut source = Pager::new(1, 10, 0)?;
        source.move_forward(2);
        assert_eq!(source.page_number(), 0);
        assert!(Pager::from_pager(&source, None).unwrap_err().is_invalid_argument());
        Ok(())
    }

    #[test]
    fn test_copy_from_absent_source() {
        let err = Pager::try_from_pager(None, None).unwrap_err();
        assert!(matches!(err, PagingError::NullSource));
    }

    #[test]
    fn test_offset_and_range() -> Result<()> {
        let pager = Pager::new(3, 10, 25)?;
        assert_eq!(pager.offset(), 20);
        assert_eq!(pager.page_range(), 20..25);

        let pager = Pager::new(2, 10, 50)?;
        assert_eq!(pager.page_range(), 10..20);
        Ok(())
    }

    #[test]
    fn test_json_roundtrip() -> Result<()> {
        let pager = Pager::new(2, 10, 50)?;
        let json = pager.to_json()?;
        assert!(json.contains(r#""pageCount":5"#));
        assert!(json.contains(r#""hasPreviousPage":true"#));

        let decoded = Pager::from_json(&json)?;
        assert_eq!(decoded, pager);
        assert_eq!(decoded.page_count(), 5);
        assert!(decoded.has_previous_page());
        assert!(decoded.has_next_page());
        assert!(!decoded.is_first_page());
        assert!(!decoded.is_last_page());
        Ok(())
    }

    #[test]
    fn test_json_derived_fields_are_ignored() -> Result<()> {
        let json = r#"{"pageNumber":1,"pageSize":10,"totalItemCount":30,"pageCount":99,"isLastPage":true}"#;
        let pager = Pager::from_json(json)?;
        assert_eq!(pager.page_count(), 3);
        assert!(!pager.is_last_page());
        Ok(())
    }

    #[test]
    fn test_json_rederives_navigated_empty_pager() -> Result<()> {
        let mut pager = Pager::new(1, 10, 0)?;
        pager.first();
        assert!(pager.is_first_page());

        // Decoding applies the construction rule, which gates every flag
        let decoded = Pager::from_json(&pager.to_json()?)?;
        assert_eq!(decoded.page_number(), 1);
        assert!(!decoded.is_first_page());
        assert_eq!(decoded, Pager::new(1, 10, 0)?);
        Ok(())
    }

    #[test]
    fn test_json_rejects_negative_total() {
        let json = r#"{"pageNumber":1,"pageSize":10,"totalItemCount":-4}"#;
        let err = Pager::from_json(json).unwrap_err();
        assert!(matches!(err, PagingError::Json(_)));
        assert!(err.to_string().contains("TotalItemCount cannot be less than 0."));
    }
}
