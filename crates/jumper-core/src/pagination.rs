//! Page stepping for the articles board.
//!
//! Pages are 1-based as in the CMS pagination metadata.

use serde::Serialize;

use crate::navigation::{Direction, next_index};

/// Number of placeholder dots shown while the first page loads.
pub const SKELETON_PAGES: usize = 4;

/// Step from `page` in `direction`, wrapping at both ends.
///
/// Returns `None` when there are no pages. A page of `0` is treated as the
/// first page.
#[must_use]
pub fn step_page(direction: Direction, page: u32, page_count: u32) -> Option<u32> {
    let index = page.saturating_sub(1) as usize;
    next_index(direction, index, page_count as usize).and_then(|i| u32::try_from(i + 1).ok())
}

/// One numbered button in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageLink {
    /// 1-based page number.
    pub page: u32,
    /// Whether this is the current page.
    pub active: bool,
}

/// Render model for the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Current page.
    pub page: u32,
    /// Total number of pages.
    pub page_count: u32,
}

impl PageWindow {
    /// Create a window for `page` of `page_count`.
    pub fn new(page: u32, page_count: u32) -> Self {
        Self { page, page_count }
    }

    /// Numbered links `1..=page_count`.
    pub fn links(&self) -> Vec<PageLink> {
        (1..=self.page_count)
            .map(|page| PageLink {
                page,
                active: page == self.page,
            })
            .collect()
    }

    /// Whether the previous arrow is drawn muted.
    pub fn prev_muted(&self) -> bool {
        self.page <= 1
    }

    /// Whether the next arrow is drawn muted.
    pub fn next_muted(&self) -> bool {
        self.page >= self.page_count
    }

    /// Page reached by an arrow click.
    pub fn step(&self, direction: Direction) -> Option<u32> {
        step_page(direction, self.page, self.page_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_page_forward_and_wrap() {
        assert_eq!(step_page(Direction::Next, 1, 3), Some(2));
        assert_eq!(step_page(Direction::Next, 3, 3), Some(1));
    }

    #[test]
    fn test_step_page_backward_and_wrap() {
        assert_eq!(step_page(Direction::Previous, 2, 3), Some(1));
        assert_eq!(step_page(Direction::Previous, 1, 3), Some(3));
    }

    #[test]
    fn test_step_page_empty() {
        assert_eq!(step_page(Direction::Next, 1, 0), None);
    }

    #[test]
    fn test_step_page_zero_is_first() {
        assert_eq!(step_page(Direction::Next, 0, 4), Some(2));
        assert_eq!(step_page(Direction::Previous, 0, 4), Some(4));
    }

    #[test]
    fn test_window_links() {
        let window = PageWindow::new(2, 3);
        let links = window.links();
        assert_eq!(links.len(), 3);
        assert!(links[1].active);
        assert!(!links[0].active);
        assert_eq!(links[2].page, 3);
    }

    #[test]
    fn test_window_arrows() {
        let first = PageWindow::new(1, 3);
        assert!(first.prev_muted());
        assert!(!first.next_muted());
        assert_eq!(first.step(Direction::Previous), Some(3));

        let last = PageWindow::new(3, 3);
        assert!(last.next_muted());
        assert_eq!(last.step(Direction::Next), Some(1));
    }
}
