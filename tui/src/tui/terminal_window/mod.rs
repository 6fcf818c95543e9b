// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod editor_state;
pub mod main_event_loop;

// Re-export.
pub use editor_state::*;
pub use main_event_loop::*;
