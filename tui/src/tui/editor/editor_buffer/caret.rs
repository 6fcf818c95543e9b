// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// Logical caret position in the document, both 1 based. `col == line_length + 1` is
/// the slot after the last code point of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caret {
    pub row: usize,
    pub col: usize,
}

impl Default for Caret {
    fn default() -> Self { Self { row: 1, col: 1 } }
}

impl Caret {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self { Self { row, col } }

    /// 0 based index of the code point under the caret.
    #[must_use]
    pub fn col_index(&self) -> usize { self.col - 1 }

    /// 0 based index of the caret's line.
    #[must_use]
    pub fn row_index(&self) -> usize { self.row - 1 }
}

impl Display for Caret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_caret_default_and_display() {
        let caret = Caret::default();
        assert_eq2!(caret, Caret::new(1, 1));
        assert_eq2!(Caret::new(3, 14).to_string(), "Ln 3, Col 14");
        assert_eq2!(Caret::new(3, 14).col_index(), 13);
        assert_eq2!(Caret::new(3, 14).row_index(), 2);
    }
}
