//! Read-only page metadata shared by pagers and paged lists.

use super::Pager;

/// Anything that can report where it sits within a paged superset.
///
/// Implementors only hand out their [`Pager`]; every query is answered by it.
pub trait PageMetadata {
    /// The pager describing this value's page
    fn pager(&self) -> &Pager;

    fn page_number(&self) -> usize {
        self.pager().page_number()
    }

    fn page_size(&self) -> usize {
        self.pager().page_size()
    }

    fn total_item_count(&self) -> usize {
        self.pager().total_item_count()
    }

    fn page_count(&self) -> usize {
        self.pager().page_count()
    }

    fn has_previous_page(&self) -> bool {
        self.pager().has_previous_page()
    }

    fn has_next_page(&self) -> bool {
        self.pager().has_next_page()
    }

    fn is_first_page(&self) -> bool {
        self.pager().is_first_page()
    }

    fn is_last_page(&self) -> bool {
        self.pager().is_last_page()
    }
}

impl PageMetadata for Pager {
    fn pager(&self) -> &Pager {
        self
    }
}
