// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod tab_manager_impl;

// Re-export.
pub use tab_manager_impl::*;
