// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EditorConfig;

/// Applies [`crate::EditorEvent`]s to [`crate::EditorBuffer`]s. The engine holds no
/// per document state, only the [`EditorConfig`] shared by every tab, so one engine
/// serves all of them.
#[derive(Debug, Clone, Default)]
pub struct EditorEngine {
    pub config: EditorConfig,
}

impl EditorEngine {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self { Self { config } }
}
