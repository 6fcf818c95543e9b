// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gapline
//!
//! A small terminal text editor. Every file path given on the command line opens in its
//! own tab.
//!
//! ```text
//! gapline [file paths] [options]
//!
//!   -l, --enable-logging   log to `log.txt` in the current directory
//!       --tab-width <N>    spaces per tab stop (1 to 16, default 4)
//! ```
//!
//! | Key                 | Action                                  |
//! | ------------------- | --------------------------------------- |
//! | arrows              | move the caret                          |
//! | `Ctrl+A` / `Ctrl+E` | start / end of line                     |
//! | `Tab`               | spaces up to the next tab stop          |
//! | `Ctrl+/`            | toggle a `// ` comment                  |
//! | `Ctrl+S`            | save                                    |
//! | `Ctrl+N` / `Ctrl+P` | next / previous tab                     |
//! | `Ctrl+W`            | close tab, quits after the last one     |
//! | `Ctrl+Q`            | quit, unsaved changes are discarded     |
//!
//! The editor itself lives in the [`gapline_tui`] crate. This crate only parses the
//! command line, sets up logging and error reporting, and starts
//! [`gapline_tui::main_event_loop`].

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod gapline;

// Re-export.
pub use gapline::*;

pub const BIN_NAME: &str = "gapline";

/// Footer of error reports printed by `main()`.
pub const REPORT_FOOTER: &str =
    "If this looks like a bug, rerun with `--enable-logging` and attach `log.txt`.";
