// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Handle to one line in a [`super::LineList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId {
    pub(super) slot: usize,
    pub(super) generation: u32,
}

impl LineId {
    /// The list root. Never refers to a real line.
    pub const SENTINEL: Self = Self {
        slot: usize::MAX,
        generation: 0,
    };

    #[must_use]
    pub fn is_sentinel(self) -> bool { self.slot == Self::SENTINEL.slot }
}
