// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TuiColor;
use std::collections::{HashMap, HashSet};

pub const GO_RESERVED_WORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
    "package", "range", "return", "select", "struct", "switch", "type", "var",
];

pub const RUST_RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while",
];

/// Yellow in the 256 color palette.
pub const DEFAULT_KEYWORD_COLOR: TuiColor = TuiColor::Ansi(3);

/// Background of the row holding the caret.
pub const DEFAULT_FOCUSED_BG_COLOR: TuiColor = TuiColor::Ansi(235);

/// Reserved words per file extension (with the leading dot, like `".go"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlighterConfig {
    reserved_words: HashMap<String, HashSet<String>>,
    pub keyword_color: TuiColor,
    pub focused_bg_color: TuiColor,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self::empty()
            .with_language(".go", GO_RESERVED_WORDS)
            .with_language(".rs", RUST_RESERVED_WORDS)
    }
}

impl HighlighterConfig {
    /// No languages at all, nothing gets highlighted.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            reserved_words: HashMap::new(),
            keyword_color: DEFAULT_KEYWORD_COLOR,
            focused_bg_color: DEFAULT_FOCUSED_BG_COLOR,
        }
    }

    #[must_use]
    pub fn with_language(mut self, extension: &str, words: &[&str]) -> Self {
        self.reserved_words.insert(
            extension.to_string(),
            words.iter().map(ToString::to_string).collect(),
        );
        self
    }

    #[must_use]
    pub fn is_reserved(&self, extension: &str, token: &str) -> bool {
        self.reserved_words
            .get(extension)
            .is_some_and(|words| words.contains(token))
    }

    #[must_use]
    pub fn knows_language(&self, extension: &str) -> bool {
        self.reserved_words.contains_key(extension)
    }
}
