// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_driver;
pub mod mock_terminal_driver;
pub mod raw_mode_guard;
pub mod render_op;
pub mod terminal_driver;
pub mod terminal_error;

// Re-export.
pub use crossterm_driver::*;
pub use mock_terminal_driver::*;
pub use raw_mode_guard::*;
pub use render_op::*;
pub use terminal_driver::*;
pub use terminal_error::*;
