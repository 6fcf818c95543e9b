// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CLIArg;
use gapline_tui::{CommonResult, EditorConfig, main_event_loop, throws};

/// The editor settings the command line asks for.
#[must_use]
pub fn editor_config_from(cli_arg: &CLIArg) -> EditorConfig {
    EditorConfig::default().with_tab_width(usize::from(cli_arg.global_options.tab_width))
}

/// Open every file from the command line and run the editor until the user quits.
///
/// # Errors
///
/// Returns an error if a file can't be loaded or the terminal can't be used.
pub async fn run_app(cli_arg: CLIArg) -> CommonResult<()> {
    throws!({
        let config = editor_config_from(&cli_arg);
        tracing::debug!(
            message = "run_app",
            file_paths = ?cli_arg.file_paths,
            tab_width = config.tab_width
        );
        main_event_loop(cli_arg.file_paths, config).await?;
    })
}
