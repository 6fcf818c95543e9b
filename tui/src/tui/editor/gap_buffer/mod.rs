// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One line of text, stored as Unicode code points in a fixed capacity gap buffer.
//!
//! # Layout
//!
//! ```text
//! logical:    H e l l o W o r l d
//! physical:  [H e l l o _ _ _ _ W o r l d]
//!                       ^gap_start
//!                       |<----->| gap_length = 4
//! ```
//!
//! - The physical store always has exactly [`GapBuffer::capacity`] slots.
//! - Logical length is `capacity - gap_length`.
//! - Logical index `i` lives at physical index `i` when `i < gap_start`, otherwise at
//!   `i + gap_length`.
//!
//! # Moving the gap
//!
//! Every edit first moves the gap so that `gap_start` equals the edit index. Only the
//! code points between the old and new gap position are copied, so typing repeatedly at
//! the same spot touches nothing but the gap slots it consumes.
//!
//! # Fixed capacity
//!
//! The buffer never grows. An insert into a full buffer fails with
//! [`GapBufferError::CapacityExhausted`] and leaves the content untouched.

// Attach.
pub mod gap_buffer_error;
pub mod gap_buffer_ops;
pub mod gap_buffer_struct;

// Re-export.
pub use gap_buffer_error::*;
pub use gap_buffer_struct::*;
