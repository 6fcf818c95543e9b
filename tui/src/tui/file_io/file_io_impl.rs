// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{FileIoError, NewlineConvention};
use crate::{CommonResult, DEBUG_TUI_FILE_IO};
use std::{io::{BufWriter, ErrorKind, Write as _},
          path::Path};

/// Content of a file split into lines, terminators removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub lines: Vec<String>,
    pub newline: NewlineConvention,
}

impl Default for LoadedFile {
    /// What a path that doesn't exist yet opens as: one empty line.
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            newline: NewlineConvention::default(),
        }
    }
}

/// Read `path` and split it into lines. Any of `\r\n`, `\r` or `\n` ends a line, the
/// convention reported is the first one found. A trailing terminator does not produce an
/// extra empty line, and an empty file is one empty line. A missing file loads as
/// [`LoadedFile::default`], it is created on save.
///
/// # Errors
///
/// Returns [`FileIoError::Read`] for I/O failures other than "not found", and
/// [`FileIoError::NotUtf8`] for binary content.
pub fn load(path: &Path) -> CommonResult<LoadedFile> {
    let bytes = match std::fs::read(path) {
        Ok(it) => it,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            DEBUG_TUI_FILE_IO.then(|| {
                tracing::debug!(message = "file not found, opening empty", path = ?path);
            });
            return Ok(LoadedFile::default());
        }
        Err(source) => {
            return Err(FileIoError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into());
        }
    };

    let text = String::from_utf8(bytes).map_err(|_| FileIoError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    let it = split_lines(&text);
    DEBUG_TUI_FILE_IO.then(|| {
        tracing::debug!(
            message = "loaded file",
            path = ?path,
            lines = it.lines.len(),
            newline = %it.newline
        );
    });
    Ok(it)
}

/// Split `text` into lines, see [`load`].
#[must_use]
pub fn split_lines(text: &str) -> LoadedFile {
    let newline = NewlineConvention::detect(text);
    let mut lines = vec![];
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    // Text after the last terminator, or the only line of an empty file.
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    LoadedFile { lines, newline }
}

/// Write every line followed by `newline`'s terminator. Returns the number of bytes
/// written.
///
/// # Errors
///
/// Returns [`FileIoError::Write`] if the file can't be created or written.
pub fn save<'a>(
    path: &Path,
    lines: impl IntoIterator<Item = &'a str>,
    newline: NewlineConvention,
) -> CommonResult<usize> {
    let to_error = |source| FileIoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    let terminator = newline.terminator().as_bytes();
    let mut bytes_written = 0;

    for line in lines {
        writer.write_all(line.as_bytes()).map_err(to_error)?;
        writer.write_all(terminator).map_err(to_error)?;
        bytes_written += line.len() + terminator.len();
    }
    writer.flush().map_err(to_error)?;

    DEBUG_TUI_FILE_IO.then(|| {
        tracing::debug!(message = "saved file", path = ?path, bytes_written);
    });
    Ok(bytes_written)
}
