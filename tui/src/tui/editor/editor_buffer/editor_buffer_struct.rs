// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Caret, EditorBufferMut, Size, Viewport};
use crate::{CommonResult, DEBUG_TUI_MOD, EditorConfig, GapBuffer, LineId, LineList,
            LoadedFile, NewlineConvention, file_io};
use std::path::{Path, PathBuf};

/// One open file: its lines, where the caret is, what part is scrolled into view, and
/// whether there are unsaved changes.
///
/// Fields are only mutated through [`EditorBuffer::get_mut`], which re-validates the
/// caret and the scroll position when the returned [`EditorBufferMut`] is dropped.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    path: PathBuf,
    lines: LineList,
    caret: Caret,
    viewport: Viewport,
    newline: NewlineConvention,
    dirty: bool,
}

impl EditorBuffer {
    /// A buffer with a single empty line.
    #[must_use]
    pub fn new_empty(
        path: impl Into<PathBuf>,
        window_size: Size,
        config: &EditorConfig,
    ) -> Self {
        Self::new_from_loaded(path, LoadedFile::default(), window_size, config)
    }

    /// A buffer holding `loaded`'s lines. Lines longer than the configured capacity get
    /// the next multiple of it. The buffer is never empty, a missing line is added.
    #[must_use]
    pub fn new_from_loaded(
        path: impl Into<PathBuf>,
        loaded: LoadedFile,
        window_size: Size,
        config: &EditorConfig,
    ) -> Self {
        let mut lines = LineList::new();
        for text in &loaded.lines {
            lines.push_back(GapBuffer::new_fitting(text, config.line_capacity));
        }
        if lines.is_empty() {
            lines.push_back(GapBuffer::new(config.line_capacity));
        }

        Self {
            path: path.into(),
            lines,
            caret: Caret::default(),
            viewport: Viewport::new(window_size, config.chrome_rows),
            newline: loaded.newline,
            dirty: false,
        }
    }

    /// Load `path` from disk (a missing file opens empty).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read as UTF-8 text.
    pub fn open(
        path: impl Into<PathBuf>,
        window_size: Size,
        config: &EditorConfig,
    ) -> CommonResult<Self> {
        let path = path.into();
        let loaded = file_io::load(&path)?;
        Ok(Self::new_from_loaded(path, loaded, window_size, config))
    }

    /// Write the lines back with the buffer's newline convention and clear the dirty
    /// flag. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be written. The dirty flag is left as is.
    pub fn save(&mut self) -> CommonResult<usize> {
        let lines = self.line_strings();
        let bytes_written = file_io::save(
            &self.path,
            lines.iter().map(String::as_str),
            self.newline,
        )?;
        self.dirty = false;
        Ok(bytes_written)
    }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    #[must_use]
    pub fn lines(&self) -> &LineList { &self.lines }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.count() }

    /// Handle of the line at 1 based `row`.
    #[must_use]
    pub fn line_id(&self, row: usize) -> Option<LineId> {
        row.checked_sub(1).and_then(|index| self.lines.nth(index))
    }

    /// The line at 1 based `row`.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&GapBuffer> {
        self.line_id(row).and_then(|id| self.lines.get(id))
    }

    /// Length of the line at 1 based `row`, 0 if there is no such line.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize { self.line(row).map_or(0, GapBuffer::length) }

    #[must_use]
    pub fn current_line(&self) -> Option<&GapBuffer> { self.line(self.caret.row) }

    #[must_use]
    pub fn current_line_len(&self) -> usize { self.line_len(self.caret.row) }

    #[must_use]
    pub fn line_strings(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn caret(&self) -> Caret { self.caret }

    #[must_use]
    pub fn viewport(&self) -> Viewport { self.viewport }

    #[must_use]
    pub fn newline(&self) -> NewlineConvention { self.newline }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.dirty }

    /// Track the new terminal size. The scroll position is fixed up on drop of the
    /// mutable view, so the caret stays visible.
    pub fn set_window_size(&mut self, window_size: Size) {
        let mut buffer_mut = self.get_mut();
        buffer_mut.viewport.set_window_size(window_size);
    }

    /// Mutable access to the fields. When the returned struct is dropped, the caret is
    /// clamped back into the document and the viewport is scrolled to show it.
    pub fn get_mut(&mut self) -> EditorBufferMut<'_> {
        DEBUG_TUI_MOD.then(|| {
            tracing::trace!(message = "EditorBuffer::get_mut", caret = %self.caret);
        });
        EditorBufferMut {
            lines: &mut self.lines,
            caret: &mut self.caret,
            viewport: &mut self.viewport,
            dirty: &mut self.dirty,
        }
    }
}
