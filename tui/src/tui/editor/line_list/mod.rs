// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The ordered lines of a document, kept in an arena and linked through [`LineId`]
//! handles instead of pointers.
//!
//! - A [`LineId`] stays valid until its line is removed. After that it is stale, and
//!   every lookup with it returns [None], even if the slot gets reused.
//! - [`LineId::SENTINEL`] stands for the root of the list. It is the `prev` of the first
//!   line and the `next` of the last one. Inserting after the sentinel prepends,
//!   inserting before it appends.
//! - A line's number is `1 +` the count of lines before it, which is what
//!   [`LineList::index_of`] returns (0 based) by walking from the front.

// Attach.
pub mod line_id;
pub mod line_list_impl;

// Re-export.
pub use line_id::*;
pub use line_list_impl::*;
