// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a [miette](https://docs.rs/miette/latest/miette/index.html) report handler
//! that is sized to the terminal.
//!
//! The [`miette::set_hook`] closure runs only when a report is actually displayed (when
//! `main() -> miette::Result<_>` returns an error). So the terminal width is measured
//! lazily, after the editor has restored the terminal, and never if nothing fails.

use miette::MietteHandlerOpts;
use tracing::debug;

const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Register the global report handler. Calling this more than once is harmless, the
/// later calls are ignored.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
