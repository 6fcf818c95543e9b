// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod caret;
pub mod caret_locate;
pub mod editor_buffer_mut;
pub mod editor_buffer_struct;
pub mod viewport;

// Re-export.
pub use caret::*;
pub use caret_locate::*;
pub use editor_buffer_mut::*;
pub use editor_buffer_struct::*;
pub use viewport::*;
