// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns editor state into [`RenderOp`]s.
//!
//! ```text
//! row 1          │ main.go*  notes.txt               │ <- tab bar
//! row 2          │    1  package main                │
//! ...            │    2  func main() {               │ <- text area, focused row
//! row h - 1      │    3  }                           │    highlighted
//! row h          │ Ln 2, Col 6 | Tab Size: 4 | LF    │ <- status bar
//! ```
//!
//! Columns past the right edge are cut off, there is no horizontal scrolling.

use super::RedrawRequest;
use crate::{Caret, EditorBuffer, EditorConfig, Highlighter, RenderOp, ScreenPos, Size,
            StyledSpan, TabManager, TuiColor};

/// `"%4d  "`, line number plus two blanks. Wider line numbers eat into the blanks, the
/// text always starts in the column after the gutter.
pub const GUTTER_WIDTH: usize = 6;
pub const LINE_NUMBER_COLOR: TuiColor = TuiColor::Ansi(240);
pub const MIN_WINDOW_SIZE: Size = Size {
    col_width: 20,
    row_height: 4,
};
pub const WINDOW_TOO_SMALL_MSG: &str = "Window too small";
const TAB_BAR_ROW: usize = 1;
const TEXT_AREA_FIRST_ROW: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub highlighter: Highlighter,
}

impl Renderer {
    /// The ops that repaint what `redraw_request` asks for, for the active tab.
    /// `config` is the one the engine edits with. `status_message` is shown in the
    /// status bar after the caret position.
    #[must_use]
    pub fn render(
        &self,
        tabs: &TabManager,
        config: &EditorConfig,
        status_message: Option<&str>,
        redraw_request: &RedrawRequest,
    ) -> Vec<RenderOp> {
        let Some(buffer) = tabs.active_editor() else {
            return vec![];
        };
        if *redraw_request == RedrawRequest::Nothing {
            return vec![];
        }

        let window_size = buffer.viewport().window_size();
        if window_size.col_width < MIN_WINDOW_SIZE.col_width
            || window_size.row_height < MIN_WINDOW_SIZE.row_height
        {
            return render_window_too_small(window_size);
        }

        let mut ops = vec![RenderOp::HideCursor];
        match redraw_request {
            RedrawRequest::Nothing => {}
            RedrawRequest::Full => {
                ops.push(RenderOp::ClearScreen);
                render_tab_bar(&mut ops, tabs, window_size);
                self.render_text_area(&mut ops, buffer);
            }
            RedrawRequest::TextArea => self.render_text_area(&mut ops, buffer),
            RedrawRequest::Rows(rows) => {
                for row in rows {
                    self.render_text_row(&mut ops, buffer, *row);
                }
            }
            RedrawRequest::Cursor => {}
        }
        render_status_bar(&mut ops, buffer, config, status_message);
        ops.push(RenderOp::MoveCursorPositionAbs(caret_screen_pos(buffer)));
        ops.push(RenderOp::ShowCursor);
        ops
    }

    fn render_text_area(&self, ops: &mut Vec<RenderOp>, buffer: &EditorBuffer) {
        for row in buffer.viewport().visible_rows() {
            self.render_text_row(ops, buffer, row);
        }
    }

    /// Paint document `row` if it is on screen. Rows past the end of the document are
    /// cleared.
    fn render_text_row(&self, ops: &mut Vec<RenderOp>, buffer: &EditorBuffer, row: usize) {
        let viewport = buffer.viewport();
        let Some(offset) = viewport.text_area_offset(row) else {
            return;
        };
        ops.push(RenderOp::MoveCursorPositionAbs(ScreenPos::new(
            1,
            TEXT_AREA_FIRST_ROW + offset,
        )));

        let Some(line) = buffer.line(row) else {
            ops.push(RenderOp::ClearUntilNewLine);
            return;
        };

        let focused = row == buffer.caret().row;
        let width = viewport.window_size().col_width;

        ops.push(RenderOp::SetFgColor(LINE_NUMBER_COLOR));
        if focused {
            ops.push(RenderOp::SetBgColor(self.highlighter.config.focused_bg_color));
        }
        ops.push(RenderOp::PaintText(clip(&gutter_text(row), width)));
        ops.push(RenderOp::ResetColor);

        let text = line.to_string();
        let language_hint = Highlighter::language_hint(buffer.path());
        let spans = self.highlighter.render(
            &Highlighter::tokenize(&text),
            &language_hint,
            focused,
        );
        paint_spans(ops, &spans, width.saturating_sub(GUTTER_WIDTH));

        if focused {
            ops.push(RenderOp::SetBgColor(self.highlighter.config.focused_bg_color));
        }
        ops.push(RenderOp::ClearUntilNewLine);
        ops.push(RenderOp::ResetColor);
    }
}

fn render_tab_bar(ops: &mut Vec<RenderOp>, tabs: &TabManager, window_size: Size) {
    ops.push(RenderOp::MoveCursorPositionAbs(ScreenPos::new(1, TAB_BAR_ROW)));
    let mut remaining = window_size.col_width;

    for (index, buffer) in tabs.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let label = format!(
            " {}{} ",
            buffer.path().display(),
            if buffer.is_dirty() { "*" } else { "" }
        );
        let label = clip(&label, remaining);
        remaining -= label.chars().count();

        if index == tabs.active_index() {
            ops.push(RenderOp::SetBold);
            ops.push(RenderOp::PaintText(label));
            ops.push(RenderOp::ResetColor);
        } else {
            ops.push(RenderOp::PaintText(label));
        }
    }
    ops.push(RenderOp::ClearUntilNewLine);
}

fn paint_spans(ops: &mut Vec<RenderOp>, spans: &[StyledSpan], mut remaining: usize) {
    for span in spans {
        if remaining == 0 {
            break;
        }
        let text = clip(&span.text, remaining);
        remaining -= text.chars().count();

        let styled = span.fg_color.is_some() || span.bg_color.is_some();
        if let Some(color) = span.fg_color {
            ops.push(RenderOp::SetFgColor(color));
        }
        if let Some(color) = span.bg_color {
            ops.push(RenderOp::SetBgColor(color));
        }
        ops.push(RenderOp::PaintText(text));
        if styled {
            ops.push(RenderOp::ResetColor);
        }
    }
}

/// Exactly [`GUTTER_WIDTH`] columns for any row below one million.
#[must_use]
pub fn gutter_text(row: usize) -> String {
    let it = format!("{row:>4}  ");
    if it.len() <= GUTTER_WIDTH {
        return it;
    }
    let mut it = format!("{row} ");
    it.truncate(GUTTER_WIDTH);
    it
}

/// `Ln r, Col c | Tab Size: n | LF`, followed by the status message if there is one.
#[must_use]
pub fn status_bar_text(
    buffer: &EditorBuffer,
    config: &EditorConfig,
    status_message: Option<&str>,
) -> String {
    let text = format!(
        "{} | Tab Size: {} | {}",
        buffer.caret(),
        config.tab_width,
        buffer.newline()
    );
    match status_message {
        Some(message) => format!("{text} | {message}"),
        None => text,
    }
}

fn render_status_bar(
    ops: &mut Vec<RenderOp>,
    buffer: &EditorBuffer,
    config: &EditorConfig,
    status_message: Option<&str>,
) {
    let window_size = buffer.viewport().window_size();
    ops.push(RenderOp::MoveCursorPositionAbs(ScreenPos::new(
        1,
        window_size.row_height,
    )));
    ops.push(RenderOp::ResetColor);
    ops.push(RenderOp::PaintText(clip(
        &status_bar_text(buffer, config, status_message),
        window_size.col_width,
    )));
    ops.push(RenderOp::ClearUntilNewLine);
}

fn render_window_too_small(window_size: Size) -> Vec<RenderOp> {
    vec![
        RenderOp::HideCursor,
        RenderOp::ClearScreen,
        RenderOp::MoveCursorPositionAbs(ScreenPos::new(1, 1)),
        RenderOp::PaintText(clip(WINDOW_TOO_SMALL_MSG, window_size.col_width)),
    ]
}

/// Where the terminal cursor goes for the caret. Kept inside the window when the caret
/// is past the right edge.
#[must_use]
pub fn caret_screen_pos(buffer: &EditorBuffer) -> ScreenPos {
    let viewport = buffer.viewport();
    let Caret { row, col } = buffer.caret();
    let screen_row = TEXT_AREA_FIRST_ROW + viewport.text_area_offset(row).unwrap_or(0);
    let screen_col = (GUTTER_WIDTH + col).min(viewport.window_size().col_width.max(1));
    ScreenPos::new(screen_col, screen_row)
}

fn clip(text: &str, width: usize) -> String { text.chars().take(width).collect() }
