// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// 1 based document rows to repaint. Most edits touch one or two.
pub type DirtyRows = SmallVec<[usize; 2]>;

/// How much of the screen has to be repainted after an event, from least to most.
///
/// The status bar and the terminal cursor are repainted for anything other than
/// [`RedrawRequest::Nothing`], since the caret position is shown there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RedrawRequest {
    #[default]
    Nothing,
    /// Status bar and cursor only.
    Cursor,
    /// These document rows, plus what [`RedrawRequest::Cursor`] repaints.
    Rows(DirtyRows),
    /// Every row of the text area.
    TextArea,
    /// Tab bar, text area and status bar, after clearing the screen.
    Full,
}

impl RedrawRequest {
    #[must_use]
    pub fn rows(rows: impl IntoIterator<Item = usize>) -> Self {
        let mut rows = rows.into_iter().collect::<DirtyRows>();
        rows.sort_unstable();
        rows.dedup();
        Self::Rows(rows)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Nothing => 0,
            Self::Cursor => 1,
            Self::Rows(_) => 2,
            Self::TextArea => 3,
            Self::Full => 4,
        }
    }

    /// The smallest request that covers both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Rows(lhs), Self::Rows(rhs)) => Self::rows(lhs.into_iter().chain(rhs)),
            (lhs, rhs) => {
                if lhs.rank() >= rhs.rank() {
                    lhs
                } else {
                    rhs
                }
            }
        }
    }
}
