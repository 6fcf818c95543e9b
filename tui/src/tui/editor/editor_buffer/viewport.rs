// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

/// Terminal dimensions, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub col_width: usize,
    pub row_height: usize,
}

impl Size {
    #[must_use]
    pub fn new(col_width: usize, row_height: usize) -> Self {
        Self {
            col_width,
            row_height,
        }
    }
}

impl From<(u16, u16)> for Size {
    /// From crossterm's `(columns, rows)`.
    fn from((columns, rows): (u16, u16)) -> Self {
        Self::new(usize::from(columns), usize::from(rows))
    }
}

/// Which document rows are on screen. Rows `[scroll_row, scroll_row + text_height)` are
/// visible, the remaining `chrome_rows` of the window hold the tab bar and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    scroll_row: usize,
    window_size: Size,
    chrome_rows: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(window_size: Size, chrome_rows: usize) -> Self {
        Self {
            scroll_row: 1,
            window_size,
            chrome_rows,
        }
    }

    /// 1 based document row shown at the top of the text area.
    #[must_use]
    pub fn scroll_row(&self) -> usize { self.scroll_row }

    #[must_use]
    pub fn window_size(&self) -> Size { self.window_size }

    #[must_use]
    pub fn chrome_rows(&self) -> usize { self.chrome_rows }

    /// Number of document rows that fit. Never 0, so that a caret always has a place.
    #[must_use]
    pub fn text_area_height(&self) -> usize {
        self.window_size
            .row_height
            .saturating_sub(self.chrome_rows)
            .max(1)
    }

    /// Document rows currently on screen.
    #[must_use]
    pub fn visible_rows(&self) -> Range<usize> {
        self.scroll_row..self.scroll_row + self.text_area_height()
    }

    #[must_use]
    pub fn is_row_visible(&self, row: usize) -> bool { self.visible_rows().contains(&row) }

    /// 0 based offset of `row` inside the text area, when it is on screen.
    #[must_use]
    pub fn text_area_offset(&self, row: usize) -> Option<usize> {
        self.is_row_visible(row).then(|| row - self.scroll_row)
    }

    pub fn set_window_size(&mut self, window_size: Size) { self.window_size = window_size; }

    /// Adjust `scroll_row` so that `row` is inside the visible band. Moving down past the
    /// bottom scrolls just enough to show `row` as the last text row, moving up past the
    /// top shows it as the first. Returns whether `scroll_row` changed.
    pub fn scroll_to_show(&mut self, row: usize) -> bool {
        let old = self.scroll_row;
        let height = self.text_area_height();
        if row < self.scroll_row {
            self.scroll_row = row.max(1);
        } else if row >= self.scroll_row + height {
            self.scroll_row = row + 1 - height;
        }
        old != self.scroll_row
    }
}
