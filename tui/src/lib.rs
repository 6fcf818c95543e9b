// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gapline_tui
//!
//! The engine behind the `gapline` terminal text editor.
//!
//! - [`GapBuffer`] stores one line of text as Unicode code points, with a movable gap at
//!   the edit point so that repeated typing in one place stays cheap.
//! - [`LineList`] is an arena of lines linked by stable [`LineId`] handles.
//! - [`EditorBuffer`] holds one open file (lines, [`Caret`], [`Viewport`], newline
//!   convention, dirty flag) and [`EditorEngine`] applies [`EditorEvent`]s to it.
//! - [`TabManager`] owns the open buffers and tracks which one is active.
//! - [`InputReaderThread`] decodes raw terminal bytes into [`KeyEvent`]s on a dedicated
//!   thread, while [`spawn_signal_task`] turns `SIGWINCH` and `SIGINT` into
//!   [`SignalEvent`]s. Both feed [`main_event_loop`], the only place that mutates editor
//!   state.
//! - [`Renderer`] turns a [`RedrawRequest`] into [`RenderOp`]s that a [`TerminalDriver`]
//!   paints.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use tui::*;
