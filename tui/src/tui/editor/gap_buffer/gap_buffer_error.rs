// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum GapBufferError {
    #[error("Index {index} is out of bounds for a line of length {length}")]
    #[diagnostic(code(gapline_tui::gap_buffer::index_out_of_bounds))]
    IndexOutOfBounds { index: usize, length: usize },

    #[error("Line is full, it can't hold more than {capacity} code points")]
    #[diagnostic(
        code(gapline_tui::gap_buffer::capacity_exhausted),
        help("Line capacity is fixed when the line is created")
    )]
    CapacityExhausted { capacity: usize },

    #[error("Content of {length} code points does not fit in a capacity of {capacity}")]
    #[diagnostic(code(gapline_tui::gap_buffer::content_too_large))]
    ContentTooLarge { length: usize, capacity: usize },
}
