// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Any printable code point.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Tab,
    Esc,
    /// Ctrl plus a lowercase letter, or `'/'`.
    Ctrl(char),
}
