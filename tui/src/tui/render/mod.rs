// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod redraw_request;
pub mod renderer;

// Re-export.
pub use redraw_request::*;
pub use renderer::*;
