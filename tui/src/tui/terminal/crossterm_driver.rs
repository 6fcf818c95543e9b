// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{RawModeGuard, RenderOp, TerminalDriver, TerminalError, TuiColor};
use crate::{CommonResult, Size};
use crossterm::{cursor, queue,
                style::{self, Attribute, Color},
                terminal::{self, ClearType}};
use std::io::Write;

/// Paints to stdout with crossterm. Holds the [`RawModeGuard`], so the terminal is
/// restored when the driver is dropped.
#[derive(Debug)]
pub struct CrosstermDriver {
    _raw_mode: RawModeGuard,
}

impl CrosstermDriver {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put in raw mode.
    pub fn try_new() -> CommonResult<Self> {
        Ok(Self {
            _raw_mode: RawModeGuard::try_new()?,
        })
    }
}

impl TerminalDriver for CrosstermDriver {
    fn paint(&mut self, ops: &[RenderOp]) -> CommonResult<()> {
        let mut stdout = std::io::stdout().lock();
        for op in ops {
            queue_render_op(&mut stdout, op).map_err(TerminalError::Paint)?;
        }
        stdout.flush().map_err(TerminalError::Paint)?;
        Ok(())
    }

    fn size(&self) -> CommonResult<Size> {
        let it = terminal::size().map_err(TerminalError::Size)?;
        Ok(Size::from(it))
    }
}

fn to_crossterm_color(color: TuiColor) -> Color {
    match color {
        TuiColor::Ansi(value) => Color::AnsiValue(value),
    }
}

/// 1 based editor coordinate to 0 based crossterm coordinate.
fn to_crossterm_coord(it: usize) -> u16 {
    u16::try_from(it.saturating_sub(1)).unwrap_or(u16::MAX)
}

fn queue_render_op(writer: &mut impl Write, op: &RenderOp) -> std::io::Result<()> {
    match op {
        RenderOp::ClearScreen => queue!(writer, terminal::Clear(ClearType::All)),
        RenderOp::ClearUntilNewLine => {
            queue!(writer, terminal::Clear(ClearType::UntilNewLine))
        }
        RenderOp::MoveCursorPositionAbs(pos) => queue!(
            writer,
            cursor::MoveTo(to_crossterm_coord(pos.col), to_crossterm_coord(pos.row))
        ),
        RenderOp::ShowCursor => queue!(writer, cursor::Show),
        RenderOp::HideCursor => queue!(writer, cursor::Hide),
        RenderOp::SetFgColor(color) => {
            queue!(writer, style::SetForegroundColor(to_crossterm_color(*color)))
        }
        RenderOp::SetBgColor(color) => {
            queue!(writer, style::SetBackgroundColor(to_crossterm_color(*color)))
        }
        RenderOp::SetBold => queue!(writer, style::SetAttribute(Attribute::Bold)),
        RenderOp::ResetColor => queue!(
            writer,
            style::SetAttribute(Attribute::Reset),
            style::ResetColor
        ),
        RenderOp::PaintText(text) => queue!(writer, style::Print(text)),
    }
}
