//! Page navigation.
//!
//! Every move goes through [`Pager::go_to_page`], which clamps the target to
//! `[1, page_count]` instead of failing. With zero pages the upper bound wins
//! for any target of 1 or more, leaving the pager on page 0.

use super::Pager;
use crate::types::FIRST_PAGE;
use tracing::trace;

impl Pager {
    /// Move to `page_number`, clamped to the available pages
    pub fn go_to_page(&mut self, page_number: usize) {
        let page_count = self.page_count();
        let target = if page_number < FIRST_PAGE {
            FIRST_PAGE
        } else if page_number > page_count {
            page_count
        } else {
            page_number
        };

        if target != page_number {
            trace!(requested = page_number, target, page_count, "clamped page navigation");
        }
        self.move_to(target);
    }

    /// Move to the following page
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.move_forward(1);
    }

    /// Move `pages` pages forward
    pub fn move_forward(&mut self, pages: usize) {
        self.go_to_page(self.page_number().saturating_add(pages));
    }

    /// Move to the preceding page
    pub fn previous(&mut self) {
        self.move_backward(1);
    }

    /// Move `pages` pages back. Going below the first page lands on it.
    pub fn move_backward(&mut self, pages: usize) {
        self.go_to_page(self.page_number().saturating_sub(pages));
    }

    /// Move to the first page
    pub fn first(&mut self) {
        self.go_to_page(FIRST_PAGE);
    }

    /// Move to the last page. With zero pages this clamps to page 1.
    pub fn last(&mut self) {
        self.go_to_page(self.page_count());
    }
}
