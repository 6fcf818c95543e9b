// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use gapline_cmdr::{CLIArg, REPORT_FOOTER, goodbye_msg, run_app};
use gapline_tui::{CommonResult, TracingConfig, setup_default_miette_global_report_handler,
                  throws, try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler(REPORT_FOOTER);

        // Exits with a usage error when no file paths are given.
        let cli_arg = CLIArg::parse();

        try_initialize_logging_global(TracingConfig::new_from_flag(
            cli_arg.global_options.enable_logging,
        ))?;
        tracing::info!(message = "Start logging...", cli_arg = ?cli_arg);

        run_app(cli_arg).await?;

        println!("{}", goodbye_msg());
    })
}
