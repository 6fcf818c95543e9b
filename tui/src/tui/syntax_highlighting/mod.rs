// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyword highlighting. Lines are split on spaces and tokens that are reserved words
//! of the file's language get the keyword color. Used only by the renderer.

// Attach.
pub mod highlighter;
pub mod highlighter_config;

// Re-export.
pub use highlighter::*;
pub use highlighter_config::*;
