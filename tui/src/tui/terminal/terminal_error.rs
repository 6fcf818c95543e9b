// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TerminalError {
    #[error("Failed to switch the terminal into raw mode")]
    #[diagnostic(
        code(gapline_tui::terminal::raw_mode),
        help("gapline needs an interactive terminal, stdin and stdout can't be redirected")
    )]
    RawMode(#[source] std::io::Error),

    #[error("Failed to query the terminal size")]
    #[diagnostic(code(gapline_tui::terminal::size))]
    Size(#[source] std::io::Error),

    #[error("Failed to write to the terminal")]
    #[diagnostic(code(gapline_tui::terminal::paint))]
    Paint(#[source] std::io::Error),
}
