// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod caret_mut;
pub mod content_mut;
pub mod editor_config;
pub mod editor_engine_error;
pub mod engine_public_api;
pub mod engine_struct;

// Re-export.
pub use editor_config::*;
pub use editor_engine_error::*;
pub use engine_public_api::*;
pub use engine_struct::*;
