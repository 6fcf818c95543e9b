// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TerminalError;
use crate::{CommonResult, DEBUG_TUI_TERMINAL};
use crossterm::{cursor, execute,
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};

/// Raw mode and the alternate screen, for as long as this value lives. Dropping it
/// (normal return, `?` early return, or panic unwinding) puts the terminal back.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns [`TerminalError::RawMode`] if stdin is not a terminal, or raw mode can't
    /// be set.
    pub fn try_new() -> CommonResult<Self> {
        terminal::enable_raw_mode().map_err(TerminalError::RawMode)?;
        // From here on, the guard restores raw mode even if the next step fails.
        let it = Self { _private: () };
        execute!(std::io::stdout(), EnterAlternateScreen).map_err(TerminalError::RawMode)?;
        DEBUG_TUI_TERMINAL.then(|| tracing::debug!(message = "raw mode: on"));
        Ok(it)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // We don't care about the result, there is nothing left to do if this fails.
        execute!(std::io::stdout(), cursor::Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
        DEBUG_TUI_TERMINAL.then(|| tracing::debug!(message = "raw mode: off"));
    }
}
