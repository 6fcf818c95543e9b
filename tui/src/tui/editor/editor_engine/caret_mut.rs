// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret navigation. Horizontal moves stay on the current line, vertical moves keep
//! the column when the new line is long enough. At a boundary nothing happens and
//! `false` is returned. Clamping and scrolling are done when the
//! [`crate::EditorBufferMut`] guard drops, so the caret and `scroll_row` always change
//! together.

use crate::{CaretDirection, EditorBuffer};

pub fn move_caret(buffer: &mut EditorBuffer, direction: CaretDirection) -> bool {
    match direction {
        CaretDirection::Up => up(buffer),
        CaretDirection::Down => down(buffer),
        CaretDirection::Left => left(buffer),
        CaretDirection::Right => right(buffer),
    }
}

pub fn up(buffer: &mut EditorBuffer) -> bool {
    if buffer.is_first_row() {
        return false;
    }
    buffer.get_mut().caret.row -= 1;
    true
}

pub fn down(buffer: &mut EditorBuffer) -> bool {
    if buffer.is_last_row() {
        return false;
    }
    buffer.get_mut().caret.row += 1;
    true
}

pub fn left(buffer: &mut EditorBuffer) -> bool {
    if buffer.is_first_col() {
        return false;
    }
    buffer.get_mut().caret.col -= 1;
    true
}

pub fn right(buffer: &mut EditorBuffer) -> bool {
    if buffer.is_last_col() {
        return false;
    }
    buffer.get_mut().caret.col += 1;
    true
}

/// Start of the line.
pub fn home(buffer: &mut EditorBuffer) -> bool {
    if buffer.is_first_col() {
        return false;
    }
    buffer.get_mut().caret.col = 1;
    true
}

/// Past the last code point of the line.
pub fn end(buffer: &mut EditorBuffer) -> bool {
    if buffer.is_last_col() {
        return false;
    }
    let col = buffer.current_line_len() + 1;
    buffer.get_mut().caret.col = col;
    true
}
