// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Event based interface of the editor engine. [`EditorEngine::apply_event`] runs one
//! [`EditorEvent`] against one [`EditorBuffer`] and works out what has to be repainted.

use super::{EditorEngine, EditorEngineError, caret_mut, content_mut};
use crate::{DEBUG_TUI_MOD, EditorBuffer, EditorEvent, RedrawRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEngineApplyEventResult {
    Applied(RedrawRequest),
    NotApplied,
}

impl EditorEngineApplyEventResult {
    /// What to repaint. [`RedrawRequest::Nothing`] when the event had no effect.
    #[must_use]
    pub fn redraw_request(self) -> RedrawRequest {
        match self {
            Self::Applied(it) => it,
            Self::NotApplied => RedrawRequest::Nothing,
        }
    }
}

impl EditorEngine {
    /// Apply `editor_event` to `buffer`.
    ///
    /// Edits that can't be applied (a full line, backspace at the start of the
    /// document) leave the buffer untouched and return
    /// [`EditorEngineApplyEventResult::NotApplied`]. So do events that are not about a
    /// single buffer, like [`EditorEvent::Save`], which the caller handles itself.
    pub fn apply_event(
        &self,
        buffer: &mut EditorBuffer,
        editor_event: EditorEvent,
    ) -> EditorEngineApplyEventResult {
        let caret_before = buffer.caret();
        let scroll_row_before = buffer.viewport().scroll_row();

        let result: Result<RedrawRequest, EditorEngineError> = match editor_event {
            EditorEvent::InsertChar(ch) => {
                content_mut::insert_char_at_caret(buffer, &self.config, ch)
            }
            EditorEvent::InsertTab => content_mut::insert_tab_at_caret(buffer, &self.config),
            EditorEvent::InsertNewLine => {
                content_mut::insert_new_line_at_caret(buffer, &self.config)
            }
            EditorEvent::Backspace => content_mut::backspace_at_caret(buffer),
            EditorEvent::ToggleComment => {
                content_mut::toggle_comment_at_caret(buffer, &self.config)
            }
            EditorEvent::MoveCaret(direction) => {
                Ok(navigation_redraw(caret_mut::move_caret(buffer, direction)))
            }
            EditorEvent::Home => Ok(navigation_redraw(caret_mut::home(buffer))),
            EditorEvent::End => Ok(navigation_redraw(caret_mut::end(buffer))),
            EditorEvent::Save
            | EditorEvent::Quit
            | EditorEvent::CloseTab
            | EditorEvent::NextTab
            | EditorEvent::PrevTab => return EditorEngineApplyEventResult::NotApplied,
        };

        match result {
            Ok(RedrawRequest::Nothing) => EditorEngineApplyEventResult::NotApplied,
            Ok(redraw_request) => {
                let caret_after = buffer.caret();
                let redraw_request = if buffer.viewport().scroll_row() != scroll_row_before {
                    RedrawRequest::TextArea
                } else if caret_after.row != caret_before.row {
                    // The focused row highlight moves.
                    redraw_request
                        .merge(RedrawRequest::rows([caret_before.row, caret_after.row]))
                } else {
                    redraw_request
                };

                DEBUG_TUI_MOD.then(|| {
                    tracing::debug!(
                        message = "EditorEngine::apply_event",
                        editor_event = ?editor_event,
                        caret = %caret_after,
                        redraw_request = ?redraw_request
                    );
                });
                EditorEngineApplyEventResult::Applied(redraw_request)
            }
            Err(error) => {
                tracing::debug!(
                    message = "EditorEngine::apply_event -> edit not applied",
                    editor_event = ?editor_event,
                    error = %error
                );
                EditorEngineApplyEventResult::NotApplied
            }
        }
    }
}

fn navigation_redraw(moved: bool) -> RedrawRequest {
    if moved {
        RedrawRequest::Cursor
    } else {
        RedrawRequest::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Caret, CaretDirection, EditorConfig, LoadedFile, NewlineConvention, Size,
                assert_eq2};

    fn buffer(lines: &[&str], rows: usize) -> EditorBuffer {
        let loaded = LoadedFile {
            lines: lines.iter().map(ToString::to_string).collect(),
            newline: NewlineConvention::Lf,
        };
        EditorBuffer::new_from_loaded(
            "test.txt",
            loaded,
            Size::new(80, rows),
            &EditorConfig::default(),
        )
    }

    fn apply_all(
        engine: &EditorEngine,
        buffer: &mut EditorBuffer,
        events: &[EditorEvent],
    ) -> Vec<EditorEngineApplyEventResult> {
        events
            .iter()
            .map(|it| engine.apply_event(buffer, *it))
            .collect()
    }

    #[test]
    fn test_type_split_and_join() {
        let engine = EditorEngine::default();
        let mut it = buffer(&[""], 24);

        apply_all(
            &engine,
            &mut it,
            &"HelloWorld".chars().map(EditorEvent::InsertChar).collect::<Vec<_>>(),
        );
        assert_eq2!(it.line_strings(), vec!["HelloWorld"]);
        assert_eq2!(it.caret(), Caret::new(1, 11));

        for _ in 0..5 {
            engine.apply_event(&mut it, EditorEvent::MoveCaret(CaretDirection::Left));
        }
        assert_eq2!(it.caret(), Caret::new(1, 6));

        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::InsertNewLine),
            EditorEngineApplyEventResult::Applied(RedrawRequest::TextArea)
        );
        assert_eq2!(it.line_strings(), vec!["Hello", "World"]);
        assert_eq2!(it.caret(), Caret::new(2, 1));

        engine.apply_event(&mut it, EditorEvent::Backspace);
        assert_eq2!(it.line_strings(), vec!["HelloWorld"]);
        assert_eq2!(it.caret(), Caret::new(1, 6));
    }

    #[test]
    fn test_redraw_requests() {
        let engine = EditorEngine::default();
        let mut it = buffer(&["abc", "def"], 24);

        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::InsertChar('x')),
            EditorEngineApplyEventResult::Applied(RedrawRequest::rows([1]))
        );
        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::MoveCaret(CaretDirection::Right)),
            EditorEngineApplyEventResult::Applied(RedrawRequest::Cursor)
        );
        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::MoveCaret(CaretDirection::Down)),
            EditorEngineApplyEventResult::Applied(RedrawRequest::rows([1, 2]))
        );
        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::MoveCaret(CaretDirection::Down)),
            EditorEngineApplyEventResult::NotApplied
        );
        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::Save),
            EditorEngineApplyEventResult::NotApplied
        );
    }

    #[test]
    fn test_scrolling_redraws_text_area() {
        let engine = EditorEngine::default();
        let lines = vec!["x"; 20];
        let mut it = buffer(&lines, 6);
        for _ in 0..3 {
            engine.apply_event(&mut it, EditorEvent::MoveCaret(CaretDirection::Down));
        }
        assert_eq2!(it.viewport().scroll_row(), 1);
        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::MoveCaret(CaretDirection::Down)),
            EditorEngineApplyEventResult::Applied(RedrawRequest::TextArea)
        );
        assert_eq2!(it.viewport().scroll_row(), 2);
    }

    #[test]
    fn test_failed_edits_are_not_applied() {
        let engine = EditorEngine::default();
        let mut it = buffer(&["abc"], 24);
        assert_eq2!(
            engine.apply_event(&mut it, EditorEvent::Backspace),
            EditorEngineApplyEventResult::NotApplied
        );
        assert!(!it.is_dirty());
        assert_eq2!(
            EditorEngineApplyEventResult::NotApplied.redraw_request(),
            RedrawRequest::Nothing
        );
    }

    #[test]
    fn test_comment_toggle_scenario() {
        let engine = EditorEngine::default();
        let mut it = buffer(&["func main() {"], 24);
        engine.apply_event(&mut it, EditorEvent::End);
        assert_eq2!(it.caret(), Caret::new(1, 14));

        engine.apply_event(&mut it, EditorEvent::ToggleComment);
        assert_eq2!(it.line_strings(), vec!["// func main() {"]);
        assert_eq2!(it.caret(), Caret::new(1, 17));

        engine.apply_event(&mut it, EditorEvent::ToggleComment);
        assert_eq2!(it.line_strings(), vec!["func main() {"]);
        assert_eq2!(it.caret(), Caret::new(1, 14));

        engine.apply_event(&mut it, EditorEvent::Home);
        assert_eq2!(it.caret(), Caret::new(1, 1));
    }
}
