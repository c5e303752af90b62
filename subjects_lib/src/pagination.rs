//! Pagination cursor for the subjects list.

use crate::messages::Messages;

/// Number of pages needed to show `total_items` rows, `page_size` at a time.
///
/// Never less than 1, so an empty list still reads "Page 1 of 1".
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_items.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The `(current_page, page_size, total_pages)` cursor owned by one controller.
///
/// `current_page` is never clamped after a reload: if rows disappear the
/// cursor may point past `total_pages` until the user navigates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_pages: u32,
}

impl PaginationState {
    /// Starts on page 1 of 1. A zero page size is bumped to 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Moves back one page. Returns `false` (and does nothing) on page 1.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Moves forward one page. Returns `false` (and does nothing) on the last page.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Rewinds to page 1.
    pub fn rewind(&mut self) {
        self.current_page = 1;
    }

    /// Switches page size and rewinds to page 1.
    pub fn resize(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.rewind();
    }

    /// Recomputes `total_pages` from a fresh item count.
    pub fn apply_total(&mut self, total_items: u64) {
        self.total_pages = total_pages(total_items, self.page_size);
    }

    /// Localized "Page X of Y" text.
    pub fn indicator(&self, messages: &Messages) -> String {
        messages.page_indicator(self.current_page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{load_messages, Locale};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(1, 5), 1);
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(0, 1), 1);
    }

    #[test]
    fn total_pages_matches_ceiling_division() {
        for total in 0u64..60 {
            for size in 1u32..12 {
                let expected = std::cmp::max(1, (total as f64 / size as f64).ceil() as u32);
                assert_eq!(total_pages(total, size), expected, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn total_pages_saturates() {
        assert_eq!(total_pages(u64::MAX, 1), u32::MAX);
    }

    #[test]
    fn new_state_starts_on_page_one() {
        let state = PaginationState::new(5);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page_size(), 5);
    }

    #[test]
    fn retreat_is_noop_on_first_page() {
        let mut state = PaginationState::new(5);
        assert!(!state.retreat());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn advance_is_noop_on_last_page() {
        let mut state = PaginationState::new(5);
        state.apply_total(10);
        assert!(state.advance());
        assert_eq!(state.current_page(), 2);
        assert!(!state.advance());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn resize_rewinds() {
        let mut state = PaginationState::new(5);
        state.apply_total(30);
        state.advance();
        state.advance();
        state.resize(10);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn apply_total_does_not_clamp_current_page() {
        let mut state = PaginationState::new(5);
        state.apply_total(15);
        state.advance();
        state.advance();
        state.apply_total(4);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.total_pages(), 1);
        assert!(!state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn indicator_is_localized() {
        let mut state = PaginationState::new(5);
        state.apply_total(12);
        let en = load_messages(Locale::En).unwrap();
        let es = load_messages(Locale::Es).unwrap();
        assert_eq!(state.indicator(&en), "Page 1 of 3");
        assert_eq!(state.indicator(&es), "Página 1 de 3");
    }
}
