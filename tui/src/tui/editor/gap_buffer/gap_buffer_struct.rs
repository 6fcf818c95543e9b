// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::GapBufferError;
use std::fmt::{Debug, Display, Formatter};

/// Unused slots are filled with this, it is never visible through the logical API.
pub(super) const GAP_FILLER: char = '\0';

/// See the [module docs](super) for the layout.
#[derive(Clone, PartialEq, Eq)]
pub struct GapBuffer {
    pub(super) store: Box<[char]>,
    pub(super) gap_start: usize,
    pub(super) gap_length: usize,
}

impl GapBuffer {
    /// An empty line that can hold up to `capacity` code points. The whole store is gap.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            store: vec![GAP_FILLER; capacity].into_boxed_slice(),
            gap_start: 0,
            gap_length: capacity,
        }
    }

    /// A line holding `text`, with the gap placed after the content.
    ///
    /// # Errors
    ///
    /// Returns [`GapBufferError::ContentTooLarge`] if `text` has more code points than
    /// `capacity`.
    pub fn try_from_str(text: &str, capacity: usize) -> Result<Self, GapBufferError> {
        let mut store = vec![GAP_FILLER; capacity].into_boxed_slice();
        let mut length = 0;
        for ch in text.chars() {
            let Some(slot) = store.get_mut(length) else {
                return Err(GapBufferError::ContentTooLarge {
                    length: text.chars().count(),
                    capacity,
                });
            };
            *slot = ch;
            length += 1;
        }
        Ok(Self {
            store,
            gap_start: length,
            gap_length: capacity - length,
        })
    }

    /// A line holding `text`, with a capacity of `page` or the smallest multiple of
    /// `page` that fits `text`. Used when loading files, where a line may already be
    /// longer than the default capacity.
    #[must_use]
    pub fn new_fitting(text: &str, page: usize) -> Self {
        let page = page.max(1);
        let length = text.chars().count();
        let capacity = length.div_ceil(page).max(1) * page;
        let mut store = vec![GAP_FILLER; capacity].into_boxed_slice();
        for (slot, ch) in store.iter_mut().zip(text.chars()) {
            *slot = ch;
        }
        Self {
            store,
            gap_start: length,
            gap_length: capacity - length,
        }
    }

    /// Number of code points in the line.
    #[must_use]
    pub fn length(&self) -> usize { self.store.len() - self.gap_length }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.length() == 0 }

    /// Fixed number of slots, set when the line was created.
    #[must_use]
    pub fn capacity(&self) -> usize { self.store.len() }

    /// Free slots left before inserts start failing.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize { self.gap_length }

    #[must_use]
    pub fn gap_start(&self) -> usize { self.gap_start }

    #[must_use]
    pub fn gap_length(&self) -> usize { self.gap_length }

    /// Maps a logical index to its slot in the store.
    pub(super) fn physical_index(&self, logical_index: usize) -> usize {
        if logical_index < self.gap_start {
            logical_index
        } else {
            logical_index + self.gap_length
        }
    }

    /// Logical content, in order, skipping the gap.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.store[..self.gap_start]
            .iter()
            .chain(self.store[self.gap_start + self.gap_length..].iter())
            .copied()
    }
}

impl Display for GapBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl Debug for GapBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapBuffer")
            .field("content", &self.to_string())
            .field("capacity", &self.capacity())
            .field("gap_start", &self.gap_start)
            .field("gap_length", &self.gap_length)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("A", 64, 1)]
    #[test_case("Hello World !", 64, 13)]
    #[test_case("あいう", 64, 3)]
    #[test_case("", 8, 0)]
    fn test_length(text: &str, capacity: usize, expected: usize) {
        let line = GapBuffer::try_from_str(text, capacity).unwrap();
        assert_eq2!(line.length(), expected);
        assert_eq2!(line.capacity(), capacity);
        assert_eq2!(line.length(), line.capacity() - line.gap_length());
        assert_eq2!(line.to_string(), text);
    }

    #[test]
    fn test_new_is_all_gap() {
        let line = GapBuffer::new(16);
        assert!(line.is_empty());
        assert_eq2!(line.gap_start(), 0);
        assert_eq2!(line.gap_length(), 16);
        assert_eq2!(line.remaining_capacity(), 16);
    }

    #[test]
    fn test_content_too_large() {
        assert_eq2!(
            GapBuffer::try_from_str("abcde", 4),
            Err(GapBufferError::ContentTooLarge {
                length: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_content_exactly_at_capacity() {
        let line = GapBuffer::try_from_str("abcd", 4).unwrap();
        assert_eq2!(line.remaining_capacity(), 0);
        assert_eq2!(line.to_string(), "abcd");
    }

    #[test_case("", 4, 4)]
    #[test_case("abc", 4, 4)]
    #[test_case("abcd", 4, 4)]
    #[test_case("abcde", 4, 8)]
    #[test_case("abcdefghi", 4, 12)]
    fn test_new_fitting(text: &str, page: usize, expected_capacity: usize) {
        let line = GapBuffer::new_fitting(text, page);
        assert_eq2!(line.capacity(), expected_capacity);
        assert_eq2!(line.to_string(), text);
        assert_eq2!(line.gap_start(), line.length());
    }

    #[test]
    fn test_debug_shows_logical_content() {
        let line = GapBuffer::try_from_str("ab", 4).unwrap();
        let it = format!("{line:?}");
        assert!(it.contains("content: \"ab\""));
        assert!(it.contains("gap_length: 2"));
    }
}
