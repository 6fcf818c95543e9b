// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Colors from the 256 color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TuiColor {
    Ansi(u8),
}

/// Terminal positions, 1 based like the rest of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub col: usize,
    pub row: usize,
}

impl ScreenPos {
    #[must_use]
    pub fn new(col: usize, row: usize) -> Self { Self { col, row } }
}

/// One drawing instruction. The renderer produces a list of these and a
/// [`super::TerminalDriver`] executes them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    ClearScreen,
    /// Clear from the cursor to the end of the line.
    ClearUntilNewLine,
    MoveCursorPositionAbs(ScreenPos),
    ShowCursor,
    HideCursor,
    SetFgColor(TuiColor),
    SetBgColor(TuiColor),
    SetBold,
    /// Colors and attributes back to the terminal defaults.
    ResetColor,
    PaintText(String),
}
