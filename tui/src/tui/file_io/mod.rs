// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod file_io_error;
pub mod file_io_impl;
pub mod newline_convention;

// Re-export.
pub use file_io_error::*;
pub use file_io_impl::*;
pub use newline_convention::*;
