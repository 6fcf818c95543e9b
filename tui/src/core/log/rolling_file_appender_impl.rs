// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Creates a file appender that never rotates, for the given path. The file is created
/// (or appended to) eagerly.
///
/// Note that if you wrap this up in a non blocking writer, log lines written just before
/// the process exits can be lost, so it is used as is.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = match path.parent() {
        Some(it) if it.as_os_str().is_empty() => std::path::Path::new("."),
        Some(it) => it,
        None => {
            return Err(miette::miette!(
                "Can't access parent folder of {}. It might not exist, or don't have required permissions.",
                path.display()
            ));
        }
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
