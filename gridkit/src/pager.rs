//! Page state over the filtered row set.

use std::ops::Range;

use crate::error::TableError;

/// Rows per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page index and page size.
///
/// The pager does not own rows; every method that depends on the row count
/// takes the current filtered count so it always reflects the latest filter.
///
/// # Example
///
/// ```
/// use gridkit::Pager;
///
/// let mut pager = Pager::new(10).unwrap();
/// assert_eq!(pager.page_count(25), 3);
/// assert!(pager.next_page(25));
/// assert!(pager.next_page(25));
/// assert!(!pager.next_page(25));
/// assert_eq!(pager.page_range(25), 20..25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    /// Create a pager on the first page.
    pub fn new(page_size: usize) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        Ok(Self {
            page_index: 0,
            page_size,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero rows means zero pages.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    /// Advance one page. Returns `false` (and does nothing) on the last page.
    pub fn next_page(&mut self, total: usize) -> bool {
        if !self.can_next(total) {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Go back one page. Returns `false` (and does nothing) on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Jump to the first page.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        let first_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.page_index = first_row / page_size;
        Ok(())
    }

    /// Pull the index back inside `[0, page_count-1]` after the row count shrank.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        if self.page_index > last {
            self.page_index = last;
        }
    }

    /// Range of filtered rows on the current page.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(Pager::new(0), Err(TableError::InvalidPageSize));
        let mut pager = Pager::default();
        assert_eq!(pager.set_page_size(0), Err(TableError::InvalidPageSize));
    }

    #[test]
    fn test_empty_set_has_no_navigation() {
        let mut pager = Pager::default();
        assert_eq!(pager.page_count(0), 0);
        assert!(!pager.can_next(0));
        assert!(!pager.can_previous());
        assert!(!pager.next_page(0));
        assert_eq!(pager.page_range(0), 0..0);
    }

    #[test]
    fn test_previous_at_first_page_is_noop() {
        let mut pager = Pager::default();
        assert!(!pager.previous_page());
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pager = Pager::new(2).unwrap();
        pager.next_page(6);
        pager.next_page(6);
        assert_eq!(pager.page_index(), 2);
        pager.clamp(3);
        assert_eq!(pager.page_index(), 1);
        pager.clamp(0);
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn test_set_page_size_keeps_first_row() {
        let mut pager = Pager::new(5).unwrap();
        pager.next_page(30);
        pager.next_page(30);
        pager.set_page_size(4).unwrap();
        assert_eq!(pager.page_index(), 2);
        assert_eq!(pager.page_range(30), 8..12);
    }
}
