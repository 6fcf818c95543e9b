// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, EditorBuffer, EditorConfig, Size, ok};
use std::path::PathBuf;

/// The open buffers, in the order they were opened, and which one has focus.
///
/// `active` always indexes into `buffers` unless there are none. Navigation does not
/// wrap around.
#[derive(Debug, Clone, Default)]
pub struct TabManager {
    buffers: Vec<EditorBuffer>,
    active: usize,
}

impl TabManager {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Open `path` in a new tab after the existing ones. The new tab becomes active.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be loaded.
    pub fn add_tab(
        &mut self,
        path: impl Into<PathBuf>,
        window_size: Size,
        config: &EditorConfig,
    ) -> CommonResult<()> {
        let buffer = EditorBuffer::open(path, window_size, config)?;
        self.add_buffer(buffer);
        ok!()
    }

    /// Add an already built buffer as the last tab and focus it.
    pub fn add_buffer(&mut self, buffer: EditorBuffer) {
        self.buffers.push(buffer);
        self.active = self.buffers.len() - 1;
    }

    /// Close the active tab. The tab before it gets focus, or the one after it when the
    /// first tab was closed. Returns `false` once no tabs remain.
    pub fn delete_active_tab(&mut self) -> bool {
        if self.buffers.is_empty() {
            return false;
        }
        let removed = self.buffers.remove(self.active);
        tracing::debug!(
            message = "TabManager::delete_active_tab",
            path = %removed.path().display(),
            remaining = self.buffers.len()
        );
        self.active = self.active.saturating_sub(1);
        !self.buffers.is_empty()
    }

    /// Focus the next tab. `false` when the last tab already has focus.
    pub fn next_tab(&mut self) -> bool {
        if self.active + 1 >= self.buffers.len() {
            return false;
        }
        self.active += 1;
        true
    }

    /// Focus the previous tab. `false` when the first tab already has focus.
    pub fn prev_tab(&mut self) -> bool {
        if self.active == 0 || self.buffers.is_empty() {
            return false;
        }
        self.active -= 1;
        true
    }

    /// Focus the tab at `index`. `false` if there is no such tab.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if index >= self.buffers.len() {
            return false;
        }
        self.active = index;
        true
    }

    #[must_use]
    pub fn active_index(&self) -> usize { self.active }

    #[must_use]
    pub fn len(&self) -> usize { self.buffers.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffers.is_empty() }

    #[must_use]
    pub fn active_editor(&self) -> Option<&EditorBuffer> { self.buffers.get(self.active) }

    pub fn active_editor_mut(&mut self) -> Option<&mut EditorBuffer> {
        self.buffers.get_mut(self.active)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditorBuffer> { self.buffers.iter() }

    /// Every buffer tracks the window size, so switching tabs needs no resize.
    pub fn set_window_size(&mut self, window_size: Size) {
        for buffer in &mut self.buffers {
            buffer.set_window_size(window_size);
        }
    }
}
