// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

pub const DEFAULT_TAB_WIDTH: usize = 4;
/// Code points a line can hold, unless it was loaded longer than that.
pub const DEFAULT_LINE_CAPACITY: usize = 512;
/// Tab bar on top, status bar at the bottom.
pub const DEFAULT_CHROME_ROWS: usize = 2;
pub const DEFAULT_COMMENT_PREFIX: &str = "// ";
pub const DEFAULT_AUTO_CLOSE_PAIRS: [(char, char); 6] = [
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('"', '"'),
    ('\'', '\''),
    ('`', '`'),
];

/// Settings for the [`super::EditorEngine`]. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub tab_width: usize,
    pub line_capacity: usize,
    pub chrome_rows: usize,
    comment_prefix: Vec<char>,
    auto_close_pairs: HashMap<char, char>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            line_capacity: DEFAULT_LINE_CAPACITY,
            chrome_rows: DEFAULT_CHROME_ROWS,
            comment_prefix: DEFAULT_COMMENT_PREFIX.chars().collect(),
            auto_close_pairs: DEFAULT_AUTO_CLOSE_PAIRS.into_iter().collect(),
        }
    }
}

impl EditorConfig {
    /// Default settings with a different tab width. A width of 0 is treated as 1.
    #[must_use]
    pub fn with_tab_width(self, tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
            ..self
        }
    }

    #[must_use]
    pub fn with_line_capacity(self, line_capacity: usize) -> Self {
        Self {
            line_capacity: line_capacity.max(1),
            ..self
        }
    }

    #[must_use]
    pub fn comment_prefix(&self) -> &[char] { &self.comment_prefix }

    /// The character auto inserted after `open`, if it is one of the pairs.
    #[must_use]
    pub fn closing_pair_for(&self, open: char) -> Option<char> {
        self.auto_close_pairs.get(&open).copied()
    }
}
