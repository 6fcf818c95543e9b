// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::RenderOp;
use crate::{CommonResult, Size};

/// What the editor needs from a terminal. [`super::CrosstermDriver`] talks to the real
/// one, [`super::MockTerminalDriver`] records what would have been drawn.
pub trait TerminalDriver {
    /// Execute `ops` in order and flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn paint(&mut self, ops: &[RenderOp]) -> CommonResult<()>;

    /// Current size in columns and rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the size can't be queried.
    fn size(&self) -> CommonResult<Size>;
}
