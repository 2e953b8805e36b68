//! Terminal layout arithmetic for the results grid.
//!
//! Shared by the view model (paging) and the grid component (placement) so
//! both agree on how many cards fit on screen.

/// Width of one product card in columns.
pub const CARD_WIDTH: usize = 34;

/// Horizontal gap between cards.
pub const CARD_GAP: usize = 2;

/// Height of one product card in rows, including its trailing blank line.
pub const CARD_HEIGHT: usize = 6;

/// Rows used by everything except the grid.
///
/// Blank line, title, tagline, border, search box (3), results header,
/// footer border, footer and input prompt.
pub const CHROME_ROWS: usize = 11;

/// First terminal row available to the body (1-indexed).
pub const BODY_START_ROW: usize = 8;

/// How many product cards fit in a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Cards per grid row.
    pub columns: usize,
    /// Grid rows per page.
    pub rows: usize,
}

impl GridLayout {
    /// Computes the grid for a terminal of `rows` x `cols` cells.
    ///
    /// Always fits at least one card, even on tiny terminals.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wealthwagon::ui::layout::GridLayout;
    ///
    /// let grid = GridLayout::for_viewport(41, 110);
    /// assert_eq!(grid.columns, 3);
    /// assert_eq!(grid.rows, 5);
    /// ```
    #[must_use]
    pub fn for_viewport(rows: usize, cols: usize) -> Self {
        let columns = ((cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1);
        let rows = (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);
        Self { columns, rows }
    }

    /// Number of cards shown on one page.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Number of pages needed for `items` cards. Never less than one.
    #[must_use]
    pub fn page_count(&self, items: usize) -> usize {
        items.div_ceil(self.per_page()).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_still_fits_one_card() {
        let grid = GridLayout::for_viewport(5, 10);
        assert_eq!(grid, GridLayout { columns: 1, rows: 1 });
        assert_eq!(grid.per_page(), 1);
    }

    #[test]
    fn page_count_rounds_up() {
        let grid = GridLayout { columns: 2, rows: 2 };
        assert_eq!(grid.page_count(0), 1);
        assert_eq!(grid.page_count(4), 1);
        assert_eq!(grid.page_count(5), 2);
    }
}
