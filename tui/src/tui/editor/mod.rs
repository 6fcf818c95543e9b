// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod editor_buffer;
pub mod editor_engine;
pub mod editor_event;
pub mod gap_buffer;
pub mod line_list;

// Re-export.
pub use editor_buffer::*;
pub use editor_engine::*;
pub use editor_event::*;
pub use gap_buffer::*;
pub use line_list::*;
