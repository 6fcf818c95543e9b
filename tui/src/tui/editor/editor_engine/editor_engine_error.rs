// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::GapBufferError;
use miette::Diagnostic;

/// Why an edit had no effect. These never reach the user, the keystroke is dropped
/// and the reason is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum EditorEngineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    GapBuffer(#[from] GapBufferError),

    #[error("No line at row {row}")]
    #[diagnostic(code(gapline_tui::editor_engine::line_not_found))]
    LineNotFound { row: usize },

    #[error("Nothing to delete before the start of the document")]
    #[diagnostic(code(gapline_tui::editor_engine::nothing_to_delete))]
    NothingToDelete,
}
