// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{RenderOp, TerminalDriver};
use crate::{CommonResult, ScreenPos, Size};

/// A [`TerminalDriver`] for tests. It keeps every batch of ops it was asked to paint,
/// and applies them to an in-memory grid of characters so tests can read back what the
/// screen would show. Colors and attributes are recorded but not applied to the grid.
#[derive(Debug, Clone)]
pub struct MockTerminalDriver {
    pub size: Size,
    pub painted: Vec<Vec<RenderOp>>,
    pub cursor: ScreenPos,
    pub cursor_visible: bool,
    screen: Vec<Vec<char>>,
}

impl MockTerminalDriver {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            painted: vec![],
            cursor: ScreenPos::new(1, 1),
            cursor_visible: true,
            screen: vec![vec![' '; size.col_width]; size.row_height],
        }
    }

    /// Change the reported size, like a terminal window being resized. The grid is
    /// resized and keeps what fits.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.screen.resize(size.row_height, vec![]);
        for row in &mut self.screen {
            row.resize(size.col_width, ' ');
        }
    }

    /// Text on 1 based `row`, trailing blanks removed.
    #[must_use]
    pub fn screen_row(&self, row: usize) -> String {
        row.checked_sub(1)
            .and_then(|index| self.screen.get(index))
            .map(|it| it.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Every op painted so far, flattened.
    #[must_use]
    pub fn all_ops(&self) -> Vec<RenderOp> { self.painted.iter().flatten().cloned().collect() }

    fn apply(&mut self, op: &RenderOp) {
        match op {
            RenderOp::ClearScreen => {
                for row in &mut self.screen {
                    row.fill(' ');
                }
            }
            RenderOp::ClearUntilNewLine => {
                let start = self.cursor.col.saturating_sub(1);
                if let Some(row) = self.screen.get_mut(self.cursor.row.saturating_sub(1))
                    && start < row.len()
                {
                    row[start..].fill(' ');
                }
            }
            RenderOp::MoveCursorPositionAbs(pos) => self.cursor = *pos,
            RenderOp::ShowCursor => self.cursor_visible = true,
            RenderOp::HideCursor => self.cursor_visible = false,
            RenderOp::PaintText(text) => {
                for ch in text.chars() {
                    let (row, col) = (self.cursor.row, self.cursor.col);
                    if let Some(cell) = row
                        .checked_sub(1)
                        .and_then(|row| self.screen.get_mut(row))
                        .and_then(|it| it.get_mut(col.wrapping_sub(1)))
                    {
                        *cell = ch;
                    }
                    self.cursor.col += 1;
                }
            }
            RenderOp::SetFgColor(_)
            | RenderOp::SetBgColor(_)
            | RenderOp::SetBold
            | RenderOp::ResetColor => {}
        }
    }
}

impl TerminalDriver for MockTerminalDriver {
    fn paint(&mut self, ops: &[RenderOp]) -> CommonResult<()> {
        for op in ops {
            self.apply(op);
        }
        self.painted.push(ops.to_vec());
        Ok(())
    }

    fn size(&self) -> CommonResult<Size> { Ok(self.size) }
}
