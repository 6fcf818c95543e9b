// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{GapBuffer, GapBufferError};

impl GapBuffer {
    /// Relocate the gap so that it starts at `index`. Only the code points between the
    /// old and the new gap start are copied. `index` must be `<= length()`.
    pub(super) fn move_gap(&mut self, index: usize) {
        debug_assert!(index <= self.length());
        let old_start = self.gap_start;
        let gap_length = self.gap_length;

        if index > old_start {
            // Content right of the gap slides left, into the front of the gap.
            self.store
                .copy_within(old_start + gap_length..index + gap_length, old_start);
        } else if index < old_start {
            // Content left of the gap slides right, into the back of the gap.
            self.store.copy_within(index..old_start, index + gap_length);
        }

        self.gap_start = index;
    }

    /// The code point at logical `index`, or [None] when `index >= length()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        if index >= self.length() {
            return None;
        }
        Some(self.store[self.physical_index(index)])
    }

    /// Code points in `[start, end)`. Empty when the range is not entirely inside the
    /// line.
    #[must_use]
    pub fn get_range(&self, start: usize, end: usize) -> Vec<char> {
        if start > end || end > self.length() {
            return vec![];
        }
        (start..end)
            .map(|index| self.store[self.physical_index(index)])
            .collect()
    }

    /// All code points of the line.
    #[must_use]
    pub fn get_all(&self) -> Vec<char> { self.chars().collect() }

    /// Insert `ch` so that it ends up at logical `index`.
    ///
    /// # Errors
    ///
    /// - [`GapBufferError::IndexOutOfBounds`] if `index > length()`.
    /// - [`GapBufferError::CapacityExhausted`] if there is no free slot left.
    pub fn insert(&mut self, index: usize, ch: char) -> Result<(), GapBufferError> {
        let length = self.length();
        if index > length {
            return Err(GapBufferError::IndexOutOfBounds { index, length });
        }
        if self.gap_length == 0 {
            return Err(GapBufferError::CapacityExhausted {
                capacity: self.capacity(),
            });
        }

        self.move_gap(index);
        self.store[self.gap_start] = ch;
        self.gap_start += 1;
        self.gap_length -= 1;
        Ok(())
    }

    /// Insert every code point of `chars` at consecutive indices starting at `index`.
    ///
    /// This is not atomic: when an insert fails part way, the code points before it
    /// stay inserted and the error is returned. Callers that need all or nothing check
    /// [`GapBuffer::remaining_capacity`] first.
    ///
    /// # Errors
    ///
    /// The first error returned by [`GapBuffer::insert`].
    pub fn insert_all(
        &mut self,
        index: usize,
        chars: impl IntoIterator<Item = char>,
    ) -> Result<(), GapBufferError> {
        for (offset, ch) in chars.into_iter().enumerate() {
            self.insert(index + offset, ch)?;
        }
        Ok(())
    }

    /// Add `ch` at the end of the line.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::CapacityExhausted`] if the line is full.
    pub fn append(&mut self, ch: char) -> Result<(), GapBufferError> {
        self.insert(self.length(), ch)
    }

    /// Add every code point of `chars` at the end of the line. Not atomic, like
    /// [`GapBuffer::insert_all`].
    ///
    /// # Errors
    ///
    /// [`GapBufferError::CapacityExhausted`] once the line fills up.
    pub fn append_all(
        &mut self,
        chars: impl IntoIterator<Item = char>,
    ) -> Result<(), GapBufferError> {
        self.insert_all(self.length(), chars)
    }

    /// Remove the code point at logical `index`.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::IndexOutOfBounds`] if `index >= length()`.
    pub fn erase(&mut self, index: usize) -> Result<(), GapBufferError> {
        let length = self.length();
        if index >= length {
            return Err(GapBufferError::IndexOutOfBounds { index, length });
        }

        self.move_gap(index);
        self.gap_length += 1;
        Ok(())
    }

    /// Remove the code points in `[start, end)`. Nothing is removed unless the whole
    /// range is inside the line.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::IndexOutOfBounds`] if `start > end` or `end > length()`.
    pub fn erase_range(&mut self, start: usize, end: usize) -> Result<(), GapBufferError> {
        let length = self.length();
        if start > end || end > length {
            return Err(GapBufferError::IndexOutOfBounds { index: end, length });
        }

        self.move_gap(start);
        self.gap_length += end - start;
        Ok(())
    }

    /// Remove `count` code points starting at `index`. Same rules as
    /// [`GapBuffer::erase_range`].
    ///
    /// # Errors
    ///
    /// [`GapBufferError::IndexOutOfBounds`] if the range runs past the end.
    pub fn erase_all(&mut self, index: usize, count: usize) -> Result<(), GapBufferError> {
        self.erase_range(index, index + count)
    }

    /// Whether the code points starting at `index` equal `expected`, one for one.
    /// False when `expected` runs past the end of the line.
    #[must_use]
    pub fn check(&self, index: usize, expected: &[char]) -> bool {
        expected
            .iter()
            .enumerate()
            .all(|(offset, ch)| self.get(index + offset) == Some(*ch))
    }

    /// Remove everything from `index` to the end and return it. Enter moves the returned
    /// tail onto a new line.
    ///
    /// # Errors
    ///
    /// [`GapBufferError::IndexOutOfBounds`] if `index > length()`.
    pub fn split_off(&mut self, index: usize) -> Result<Vec<char>, GapBufferError> {
        let length = self.length();
        if index > length {
            return Err(GapBufferError::IndexOutOfBounds { index, length });
        }
        let tail = self.get_range(index, length);
        self.erase_range(index, length)?;
        Ok(tail)
    }
}
