// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Caret, Viewport};
use crate::{DEBUG_TUI_MOD, LineList};

/// Mutable view of an [`super::EditorBuffer`], handed out by
/// [`super::EditorBuffer::get_mut`].
///
/// Dropping it re-establishes the caret invariants (`1 <= row <= line_count` and
/// `1 <= col <= line_length + 1`) and scrolls the viewport so the caret row is visible.
#[derive(Debug)]
pub struct EditorBufferMut<'a> {
    pub lines: &'a mut LineList,
    pub caret: &'a mut Caret,
    pub viewport: &'a mut Viewport,
    pub dirty: &'a mut bool,
}

impl EditorBufferMut<'_> {
    /// Length of the line at 1 based `row`, 0 if there is none.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        row.checked_sub(1)
            .and_then(|index| self.lines.nth(index))
            .and_then(|id| self.lines.get(id))
            .map_or(0, crate::GapBuffer::length)
    }

    pub fn validate(&mut self) {
        let line_count = self.lines.count().max(1);
        let before = *self.caret;

        self.caret.row = self.caret.row.clamp(1, line_count);
        let max_col = self.line_len(self.caret.row) + 1;
        self.caret.col = self.caret.col.clamp(1, max_col);
        self.viewport.scroll_to_show(self.caret.row);

        if before != *self.caret {
            DEBUG_TUI_MOD.then(|| {
                tracing::debug!(
                    message = "caret clamped",
                    before = %before,
                    after = %self.caret
                );
            });
        }
    }
}

impl Drop for EditorBufferMut<'_> {
    fn drop(&mut self) { self.validate(); }
}
