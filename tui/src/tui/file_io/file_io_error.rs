// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum FileIoError {
    #[error("Can't read {}", path.display())]
    #[diagnostic(
        code(gapline_tui::file_io::read),
        help("Check that the path is a file and that you have permission to read it")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    #[diagnostic(code(gapline_tui::file_io::not_utf8))]
    NotUtf8 { path: PathBuf },

    #[error("Can't write {}", path.display())]
    #[diagnostic(
        code(gapline_tui::file_io::write),
        help("Check that the folder exists and that you have permission to write to it")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
