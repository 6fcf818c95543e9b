// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Where the caret is relative to the edges of the document and of its line. Pure
//! predicates, used to gate navigation.

use super::EditorBuffer;

impl EditorBuffer {
    #[must_use]
    pub fn is_first_row(&self) -> bool { self.caret().row == 1 }

    #[must_use]
    pub fn is_last_row(&self) -> bool { self.caret().row >= self.line_count() }

    #[must_use]
    pub fn is_first_col(&self) -> bool { self.caret().col == 1 }

    /// The caret is past the last code point of its line.
    #[must_use]
    pub fn is_last_col(&self) -> bool { self.caret().col > self.current_line_len() }
}
