//! Scroll state for the notes grid.
//!
//! The grid scrolls by whole card rows. [`Viewport`] tracks how many rows
//! fit on screen, how many exist, and which row is at the top.

use std::ops::Range;

/// Visible window over the grid's card rows.
///
/// # Example
///
/// ```
/// use noteboard::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(3, 10);
/// assert_eq!(vp.visible_range(), 0..3);
///
/// vp.scroll_down(4);
/// assert_eq!(vp.visible_range(), 4..7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    offset: usize,
    total_rows: usize,
}

impl Viewport {
    /// Create a viewport showing `height` rows out of `total_rows`.
    pub const fn new(height: usize, total_rows: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_rows,
        }
    }

    /// First visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows that fit on screen.
    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Range of visible rows, clamped to the grid.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_rows);
        let end = (self.offset + self.height).min(self.total_rows);
        start..end
    }

    pub const fn can_scroll_up(&self) -> bool {
        self.offset > 0
    }

    pub const fn can_scroll_down(&self) -> bool {
        self.offset < self.max_offset()
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll the minimum amount needed for `row` to be on screen.
    pub const fn ensure_visible(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if self.height > 0 && row >= self.offset + self.height {
            self.offset = row + 1 - self.height;
        }
    }

    pub fn resize(&mut self, height: usize) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the row count (e.g. after notes were added or removed).
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(2, 10);
        assert_eq!(vp.offset(), 0);
        assert!(!vp.can_scroll_up());
        assert!(vp.can_scroll_down());
    }

    #[test]
    fn test_scroll_down_clamps_to_last_page() {
        let mut vp = Viewport::new(3, 5);
        vp.scroll_down(100);
        assert_eq!(vp.offset(), 2);
        assert!(!vp.can_scroll_down());
    }

    #[test]
    fn test_ensure_visible_scrolls_both_ways() {
        let mut vp = Viewport::new(2, 10);
        vp.ensure_visible(5);
        assert_eq!(vp.offset(), 4);
        vp.ensure_visible(1);
        assert_eq!(vp.offset(), 1);
        vp.ensure_visible(2);
        assert_eq!(vp.offset(), 1);
    }

    #[test]
    fn test_shrinking_total_clamps_offset() {
        let mut vp = Viewport::new(2, 10);
        vp.scroll_down(8);
        vp.set_total_rows(3);
        assert_eq!(vp.offset(), 1);
        vp.set_total_rows(0);
        assert_eq!(vp.visible_range(), 0..0);
    }

    #[test]
    fn test_resize_keeps_valid_offset() {
        let mut vp = Viewport::new(2, 10);
        vp.scroll_down(8);
        vp.resize(6);
        assert_eq!(vp.offset(), 4);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scroll_never_exceeds_bounds(
                total in 0..500usize,
                height in 1..50usize,
                amount in 0..1000usize,
            ) {
                let mut vp = Viewport::new(height, total);
                vp.scroll_down(amount);
                prop_assert!(vp.offset() <= total.saturating_sub(height));
            }

            #[test]
            fn ensure_visible_puts_row_on_screen(
                total in 1..500usize,
                height in 1..50usize,
                row in 0..500usize,
            ) {
                let row = row % total;
                let mut vp = Viewport::new(height, total);
                vp.ensure_visible(row);
                prop_assert!(vp.visible_range().contains(&row));
            }
        }
    }
}
