// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use std::path::PathBuf;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gapline")]
#[command(about = "Edit text files in the terminal, one tab per file")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nProvide one or more file paths, separated by spaces. Files that don't exist yet are created on save.\nUSAGE:\n  gapline [\x1b[32mfile paths\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file paths", required = true, num_args = 1..)]
    pub file_paths: Vec<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(1..=16),
        help = "Number of spaces a Tab key press inserts, at most."
    )]
    pub tab_width: u8,
}
