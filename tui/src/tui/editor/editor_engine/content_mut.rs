// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Edits that change the content of a buffer. Each one either applies completely or
//! returns an error without touching the lines or the caret. Capacity is checked up
//! front for the whole edit, since [`GapBuffer::insert_all`] is not atomic.

use super::{EditorConfig, EditorEngineError};
use crate::{Caret, EditorBuffer, EditorBufferMut, GapBuffer, GapBufferError, LineId,
            RedrawRequest};

fn current_line_id(buffer_mut: &EditorBufferMut<'_>) -> Result<LineId, EditorEngineError> {
    let row = buffer_mut.caret.row;
    row.checked_sub(1)
        .and_then(|index| buffer_mut.lines.nth(index))
        .ok_or(EditorEngineError::LineNotFound { row })
}

fn ensure_room(line: &GapBuffer, needed: usize) -> Result<(), GapBufferError> {
    if line.remaining_capacity() < needed {
        return Err(GapBufferError::CapacityExhausted {
            capacity: line.capacity(),
        });
    }
    Ok(())
}

/// Insert `ch` before the caret and move past it. An opening bracket or quote also
/// gets its closing counterpart, placed after the caret.
///
/// # Errors
///
/// [`GapBufferError::CapacityExhausted`] if the line can't take the character (and its
/// pair).
pub fn insert_char_at_caret(
    buffer: &mut EditorBuffer,
    config: &EditorConfig,
    ch: char,
) -> Result<RedrawRequest, EditorEngineError> {
    let mut buffer_mut = buffer.get_mut();
    let caret = *buffer_mut.caret;
    let id = current_line_id(&buffer_mut)?;
    let line = buffer_mut
        .lines
        .get_mut(id)
        .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;

    let closing = config.closing_pair_for(ch);
    ensure_room(line, 1 + usize::from(closing.is_some()))?;

    line.insert(caret.col_index(), ch)?;
    if let Some(closing) = closing {
        line.insert(caret.col, closing)?;
    }

    buffer_mut.caret.col += 1;
    *buffer_mut.dirty = true;
    Ok(RedrawRequest::rows([caret.row]))
}

/// Insert spaces up to the next tab stop.
///
/// # Errors
///
/// [`GapBufferError::CapacityExhausted`] if not all of the spaces fit.
pub fn insert_tab_at_caret(
    buffer: &mut EditorBuffer,
    config: &EditorConfig,
) -> Result<RedrawRequest, EditorEngineError> {
    let tab_width = config.tab_width.max(1);
    let mut buffer_mut = buffer.get_mut();
    let caret = *buffer_mut.caret;
    let id = current_line_id(&buffer_mut)?;
    let line = buffer_mut
        .lines
        .get_mut(id)
        .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;

    let spaces = tab_width - caret.col_index() % tab_width;
    ensure_room(line, spaces)?;
    line.insert_all(caret.col_index(), std::iter::repeat_n(' ', spaces))?;

    buffer_mut.caret.col += spaces;
    *buffer_mut.dirty = true;
    Ok(RedrawRequest::rows([caret.row]))
}

/// Enter. Splits the line at the caret and puts the caret at the start of the new line
/// below. When the caret is at the start of a non empty line, an empty line is inserted
/// above instead and the content stays where it is.
///
/// # Errors
///
/// Only if the caret does not point at a line.
pub fn insert_new_line_at_caret(
    buffer: &mut EditorBuffer,
    config: &EditorConfig,
) -> Result<RedrawRequest, EditorEngineError> {
    let mut buffer_mut = buffer.get_mut();
    let caret = *buffer_mut.caret;
    let capacity = config.line_capacity;
    let id = current_line_id(&buffer_mut)?;
    let line = buffer_mut
        .lines
        .get(id)
        .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;
    let length = line.length();

    if caret.col == 1 && length > 0 {
        buffer_mut
            .lines
            .insert_before(id, GapBuffer::new(capacity))
            .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;
    } else {
        let tail = buffer_mut
            .lines
            .get_mut(id)
            .ok_or(EditorEngineError::LineNotFound { row: caret.row })?
            .split_off(caret.col_index().min(length))?;
        let tail = tail.into_iter().collect::<String>();
        buffer_mut
            .lines
            .insert_after(id, GapBuffer::new_fitting(&tail, capacity))
            .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;
        buffer_mut.caret.col = 1;
    }

    buffer_mut.caret.row += 1;
    *buffer_mut.dirty = true;
    Ok(RedrawRequest::TextArea)
}

/// Backspace. Inside a line, removes the code point before the caret. At the start of
/// a line, joins it onto the end of the previous line and puts the caret at the join
/// point.
///
/// # Errors
///
/// - [`EditorEngineError::NothingToDelete`] at the very start of the document.
/// - [`GapBufferError::CapacityExhausted`] if the joined line would not fit in the
///   previous line. Neither line is changed.
pub fn backspace_at_caret(
    buffer: &mut EditorBuffer,
) -> Result<RedrawRequest, EditorEngineError> {
    let mut buffer_mut = buffer.get_mut();
    let caret = *buffer_mut.caret;
    let id = current_line_id(&buffer_mut)?;

    if caret.col > 1 {
        let line = buffer_mut
            .lines
            .get_mut(id)
            .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;
        line.erase(caret.col - 2)?;
        buffer_mut.caret.col -= 1;
        *buffer_mut.dirty = true;
        return Ok(RedrawRequest::rows([caret.row]));
    }

    let Some(prev_id) = buffer_mut.lines.prev(id).filter(|it| !it.is_sentinel()) else {
        return Err(EditorEngineError::NothingToDelete);
    };
    let content = buffer_mut
        .lines
        .get(id)
        .map(GapBuffer::get_all)
        .unwrap_or_default();
    let prev_line = buffer_mut
        .lines
        .get_mut(prev_id)
        .ok_or(EditorEngineError::LineNotFound { row: caret.row - 1 })?;
    ensure_room(prev_line, content.len())?;

    let join_col = prev_line.length() + 1;
    prev_line.append_all(content)?;
    buffer_mut.lines.remove(id);

    *buffer_mut.caret = Caret::new(caret.row - 1, join_col);
    *buffer_mut.dirty = true;
    Ok(RedrawRequest::TextArea)
}

/// Remove the comment prefix from the start of the line if it is there, otherwise add
/// it. The caret shifts with the text.
///
/// # Errors
///
/// [`GapBufferError::CapacityExhausted`] if the prefix does not fit.
pub fn toggle_comment_at_caret(
    buffer: &mut EditorBuffer,
    config: &EditorConfig,
) -> Result<RedrawRequest, EditorEngineError> {
    let prefix = config.comment_prefix();
    let mut buffer_mut = buffer.get_mut();
    let caret = *buffer_mut.caret;
    let id = current_line_id(&buffer_mut)?;
    let line = buffer_mut
        .lines
        .get_mut(id)
        .ok_or(EditorEngineError::LineNotFound { row: caret.row })?;

    if line.check(0, prefix) {
        line.erase_range(0, prefix.len())?;
        buffer_mut.caret.col = caret.col.saturating_sub(prefix.len()).max(1);
    } else {
        ensure_room(line, prefix.len())?;
        line.insert_all(0, prefix.iter().copied())?;
        buffer_mut.caret.col += prefix.len();
    }

    *buffer_mut.dirty = true;
    Ok(RedrawRequest::rows([caret.row]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaretDirection, EditorEngine, EditorEvent, LoadedFile, NewlineConvention,
                Size, assert_eq2};
    use test_case::test_case;

    fn buffer(lines: &[&str]) -> EditorBuffer {
        let loaded = LoadedFile {
            lines: lines.iter().map(ToString::to_string).collect(),
            newline: NewlineConvention::Lf,
        };
        EditorBuffer::new_from_loaded(
            "test.txt",
            loaded,
            Size::new(80, 24),
            &EditorConfig::default(),
        )
    }

    fn with_caret(lines: &[&str], caret: Caret) -> EditorBuffer {
        let mut it = buffer(lines);
        *it.get_mut().caret = caret;
        it
    }

    #[test]
    fn test_insert_into_empty_line() {
        let config = EditorConfig::default();
        let mut it = buffer(&[""]);
        insert_char_at_caret(&mut it, &config, 'H').unwrap();
        insert_char_at_caret(&mut it, &config, 'i').unwrap();
        assert_eq2!(it.line_strings(), vec!["Hi"]);
        assert_eq2!(it.caret(), Caret::new(1, 3));
        assert!(it.is_dirty());
    }

    #[test_case('(', "f()", 3)]
    #[test_case('"', "f\"\"", 3)]
    #[test_case(')', "f)", 3)]
    fn test_insert_auto_closes_pairs(ch: char, expected: &str, expected_col: usize) {
        let config = EditorConfig::default();
        let mut it = with_caret(&["f"], Caret::new(1, 2));
        insert_char_at_caret(&mut it, &config, ch).unwrap();
        assert_eq2!(it.line_strings(), vec![expected]);
        assert_eq2!(it.caret(), Caret::new(1, expected_col));
    }

    #[test]
    fn test_insert_into_full_line_is_rejected() {
        let config = EditorConfig::default().with_line_capacity(4);
        let loaded = LoadedFile {
            lines: vec!["abc".into()],
            newline: NewlineConvention::Lf,
        };
        let mut it = EditorBuffer::new_from_loaded("t", loaded, Size::new(80, 24), &config);
        *it.get_mut().caret = Caret::new(1, 4);

        // Pair needs two slots, only one left.
        assert_eq2!(
            insert_char_at_caret(&mut it, &config, '('),
            Err(EditorEngineError::GapBuffer(GapBufferError::CapacityExhausted {
                capacity: 4
            }))
        );
        assert_eq2!(it.line_strings(), vec!["abc"]);
        assert_eq2!(it.caret(), Caret::new(1, 4));
        assert!(!it.is_dirty());

        insert_char_at_caret(&mut it, &config, 'd').unwrap();
        assert!(insert_char_at_caret(&mut it, &config, 'e').is_err());
        assert_eq2!(it.line_strings(), vec!["abcd"]);
    }

    #[test_case(1, 4)]
    #[test_case(2, 3)]
    #[test_case(4, 1)]
    #[test_case(5, 4)]
    fn test_insert_tab_to_next_stop(col: usize, expected_spaces: usize) {
        let config = EditorConfig::default();
        let mut it = with_caret(&["abcd"], Caret::new(1, col));
        insert_tab_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_len(1), 4 + expected_spaces);
        assert_eq2!(it.caret().col, col + expected_spaces);
        assert_eq2!((it.caret().col - 1) % 4, 0);
    }

    #[test]
    fn test_split_line_in_the_middle() {
        let config = EditorConfig::default();
        let mut it = with_caret(&["HelloWorld"], Caret::new(1, 6));
        assert_eq2!(
            insert_new_line_at_caret(&mut it, &config),
            Ok(RedrawRequest::TextArea)
        );
        assert_eq2!(it.line_strings(), vec!["Hello", "World"]);
        assert_eq2!(it.caret(), Caret::new(2, 1));
    }

    #[test]
    fn test_enter_at_end_of_line_adds_empty_line_below() {
        let config = EditorConfig::default();
        let mut it = with_caret(&["one", "two"], Caret::new(1, 4));
        insert_new_line_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_strings(), vec!["one", "", "two"]);
        assert_eq2!(it.caret(), Caret::new(2, 1));
    }

    #[test]
    fn test_enter_at_start_of_non_empty_line_adds_empty_line_above() {
        let config = EditorConfig::default();
        let mut it = with_caret(&["one", "two"], Caret::new(2, 1));
        insert_new_line_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_strings(), vec!["one", "", "two"]);
        assert_eq2!(it.caret(), Caret::new(3, 1));
    }

    #[test]
    fn test_enter_on_empty_line_adds_line_below() {
        let config = EditorConfig::default();
        let mut it = buffer(&[""]);
        insert_new_line_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_strings(), vec!["", ""]);
        assert_eq2!(it.caret(), Caret::new(2, 1));
    }

    #[test]
    fn test_backspace_inside_line() {
        let mut it = with_caret(&["abc"], Caret::new(1, 3));
        assert_eq2!(backspace_at_caret(&mut it), Ok(RedrawRequest::rows([1])));
        assert_eq2!(it.line_strings(), vec!["ac"]);
        assert_eq2!(it.caret(), Caret::new(1, 2));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut it = with_caret(&["Hello", "World"], Caret::new(2, 1));
        backspace_at_caret(&mut it).unwrap();
        assert_eq2!(it.line_strings(), vec!["HelloWorld"]);
        assert_eq2!(it.caret(), Caret::new(1, 6));
        assert_eq2!(it.line_count(), 1);
    }

    #[test]
    fn test_backspace_at_document_start_is_a_no_op() {
        let mut it = buffer(&["abc"]);
        assert_eq2!(
            backspace_at_caret(&mut it),
            Err(EditorEngineError::NothingToDelete)
        );
        assert_eq2!(it.line_strings(), vec!["abc"]);
        assert!(!it.is_dirty());
    }

    #[test]
    fn test_join_that_does_not_fit_changes_nothing() {
        let config = EditorConfig::default().with_line_capacity(6);
        let loaded = LoadedFile {
            lines: vec!["abcd".into(), "efg".into()],
            newline: NewlineConvention::Lf,
        };
        let mut it = EditorBuffer::new_from_loaded("t", loaded, Size::new(80, 24), &config);
        *it.get_mut().caret = Caret::new(2, 1);

        assert!(backspace_at_caret(&mut it).is_err());
        assert_eq2!(it.line_strings(), vec!["abcd", "efg"]);
        assert_eq2!(it.caret(), Caret::new(2, 1));
    }

    #[test_case(1)]
    #[test_case(3)]
    #[test_case(6)]
    #[test_case(11)]
    fn test_split_then_join_restores_line(col: usize) {
        let config = EditorConfig::default();
        let mut it = with_caret(&["HelloWorld", "tail"], Caret::new(1, col));
        insert_new_line_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_count(), 3);
        backspace_at_caret(&mut it).unwrap();
        assert_eq2!(it.line_strings(), vec!["HelloWorld", "tail"]);
        assert_eq2!(it.caret(), Caret::new(1, col));
    }

    #[test]
    fn test_toggle_comment_twice_restores_line() {
        let config = EditorConfig::default();
        let mut it = with_caret(&["func main() {"], Caret::new(1, 5));

        toggle_comment_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_strings(), vec!["// func main() {"]);
        assert_eq2!(it.caret(), Caret::new(1, 8));

        toggle_comment_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_strings(), vec!["func main() {"]);
        assert_eq2!(it.caret(), Caret::new(1, 5));
    }

    #[test]
    fn test_uncomment_with_caret_inside_prefix() {
        let config = EditorConfig::default();
        let mut it = with_caret(&["// x"], Caret::new(1, 2));
        toggle_comment_at_caret(&mut it, &config).unwrap();
        assert_eq2!(it.line_strings(), vec!["x"]);
        assert_eq2!(it.caret(), Caret::new(1, 1));
    }

    /// xorshift64, the same sequence on every run.
    struct Rng(u64);

    impl Rng {
        fn below(&mut self, n: usize) -> usize {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            usize::try_from(self.0 % n as u64).unwrap()
        }
    }

    /// The document as plain vectors, edited the way the engine is expected to.
    struct Model {
        lines: Vec<Vec<char>>,
        row: usize,
        col: usize,
    }

    impl Model {
        fn line_len(&self) -> usize { self.lines[self.row - 1].len() }

        fn apply(&mut self, event: EditorEvent) {
            let index = self.row - 1;
            match event {
                EditorEvent::InsertChar(ch) => {
                    self.lines[index].insert(self.col - 1, ch);
                    self.col += 1;
                }
                EditorEvent::InsertNewLine => {
                    if self.col == 1 && !self.lines[index].is_empty() {
                        self.lines.insert(index, vec![]);
                    } else {
                        let tail = self.lines[index].split_off(self.col - 1);
                        self.lines.insert(index + 1, tail);
                        self.col = 1;
                    }
                    self.row += 1;
                }
                EditorEvent::Backspace if self.col > 1 => {
                    self.lines[index].remove(self.col - 2);
                    self.col -= 1;
                }
                EditorEvent::Backspace if self.row > 1 => {
                    let current = self.lines.remove(index);
                    let prev = &mut self.lines[index - 1];
                    self.col = prev.len() + 1;
                    prev.extend(current);
                    self.row -= 1;
                }
                EditorEvent::MoveCaret(CaretDirection::Up) if self.row > 1 => {
                    self.row -= 1;
                    self.col = self.col.min(self.line_len() + 1);
                }
                EditorEvent::MoveCaret(CaretDirection::Down)
                    if self.row < self.lines.len() =>
                {
                    self.row += 1;
                    self.col = self.col.min(self.line_len() + 1);
                }
                EditorEvent::MoveCaret(CaretDirection::Left) if self.col > 1 => self.col -= 1,
                EditorEvent::MoveCaret(CaretDirection::Right)
                    if self.col <= self.line_len() =>
                {
                    self.col += 1;
                }
                _ => {}
            }
        }

        fn line_strings(&self) -> Vec<String> {
            self.lines.iter().map(|it| it.iter().collect()).collect()
        }
    }

    #[test_case(7)]
    #[test_case(1_234)]
    #[test_case(0xC0FF_EE00)]
    fn test_long_mixed_edit_sequence_matches_model(seed: u64) {
        const ALPHABET: [char; 5] = ['a', 'z', ' ', 'é', '世'];
        const DIRECTIONS: [CaretDirection; 4] = [
            CaretDirection::Up,
            CaretDirection::Down,
            CaretDirection::Left,
            CaretDirection::Right,
        ];
        let config = EditorConfig::default().with_line_capacity(4_096);
        let engine = EditorEngine::new(config.clone());
        let loaded = LoadedFile {
            lines: vec!["hello".into(), String::new(), "world".into()],
            newline: NewlineConvention::Lf,
        };
        let mut it =
            EditorBuffer::new_from_loaded("test.txt", loaded, Size::new(80, 8), &config);
        let mut model = Model {
            lines: vec!["hello".chars().collect(), vec![], "world".chars().collect()],
            row: 1,
            col: 1,
        };
        let mut rng = Rng(seed);

        for step in 0..1_500 {
            let event = match rng.below(10) {
                0..=3 => EditorEvent::InsertChar(ALPHABET[rng.below(ALPHABET.len())]),
                4 => EditorEvent::InsertNewLine,
                5 | 6 => EditorEvent::Backspace,
                _ => EditorEvent::MoveCaret(DIRECTIONS[rng.below(DIRECTIONS.len())]),
            };
            engine.apply_event(&mut it, event);
            model.apply(event);

            assert_eq2!(
                it.line_strings(),
                model.line_strings(),
                "step {step}: {event:?}"
            );
            assert_eq2!(it.caret(), Caret::new(model.row, model.col), "step {step}");
            assert!(it.viewport().is_row_visible(it.caret().row), "step {step}");
            for line in it.lines().iter() {
                assert!(line.gap_start() + line.gap_length() <= line.capacity());
                assert_eq2!(line.length(), line.capacity() - line.gap_length());
            }
        }
    }
}
