// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// This is the global `DEBUG` const for the editor engine. It gates the per keystroke
/// logs (caret clamping, applied events). Module scoped consts below do the same for
/// their modules.
pub const DEBUG_TUI_MOD: bool = true;

pub const DEBUG_TUI_FILE_IO: bool = true;
pub const DEBUG_TUI_INPUT: bool = false;
pub const DEBUG_TUI_TERMINAL: bool = false;
pub const DEBUG_TUI_MAIN_EVENT_LOOP: bool = true;

// Attach sources.
pub mod editor;
pub mod file_io;
pub mod input;
pub mod render;
pub mod syntax_highlighting;
pub mod tab_manager;
pub mod terminal;
pub mod terminal_window;

// Re-export.
pub use editor::*;
pub use file_io::*;
pub use input::*;
pub use render::*;
pub use syntax_highlighting::*;
pub use tab_manager::*;
pub use terminal::*;
pub use terminal_window::*;
