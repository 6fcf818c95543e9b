// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::KeyEvent;

/// What a keystroke means to the editor.
///
/// By providing a conversion from [`KeyEvent`] to [`EditorEvent`] the main event loop
/// only deals with key bindings in one place. Events that touch a single buffer are
/// executed by [`crate::EditorEngine::apply_event`], the rest ([`EditorEvent::Save`],
/// [`EditorEvent::Quit`] and the tab events) by the loop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(char),
    InsertNewLine,
    Backspace,
    /// Spaces up to the next tab stop.
    InsertTab,
    MoveCaret(CaretDirection),
    Home,
    End,
    ToggleComment,
    Save,
    Quit,
    CloseTab,
    NextTab,
    PrevTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretDirection {
    Up,
    Down,
    Left,
    Right,
}

impl TryFrom<KeyEvent> for EditorEvent {
    /// Keys without a binding are handed back.
    type Error = KeyEvent;

    fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
        match key_event {
            KeyEvent::Char(ch) => Ok(Self::InsertChar(ch)),
            KeyEvent::Enter => Ok(Self::InsertNewLine),
            KeyEvent::Backspace => Ok(Self::Backspace),
            KeyEvent::Tab => Ok(Self::InsertTab),
            KeyEvent::Up => Ok(Self::MoveCaret(CaretDirection::Up)),
            KeyEvent::Down => Ok(Self::MoveCaret(CaretDirection::Down)),
            KeyEvent::Left => Ok(Self::MoveCaret(CaretDirection::Left)),
            KeyEvent::Right => Ok(Self::MoveCaret(CaretDirection::Right)),
            KeyEvent::Ctrl('a') => Ok(Self::Home),
            KeyEvent::Ctrl('e') => Ok(Self::End),
            KeyEvent::Ctrl('/') => Ok(Self::ToggleComment),
            KeyEvent::Ctrl('s') => Ok(Self::Save),
            KeyEvent::Ctrl('q') => Ok(Self::Quit),
            KeyEvent::Ctrl('w') => Ok(Self::CloseTab),
            KeyEvent::Ctrl('n') => Ok(Self::NextTab),
            KeyEvent::Ctrl('p') => Ok(Self::PrevTab),
            KeyEvent::Esc | KeyEvent::Ctrl(_) => Err(key_event),
        }
    }
}
