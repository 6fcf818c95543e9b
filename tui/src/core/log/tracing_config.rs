// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// File used when logging is turned on from the command line.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing subscriber. Logs are only ever written to a file, since the
/// terminal is owned by the editor while raw mode is on.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    /// Logging is disabled.
    None,
    /// Path of the log file.
    File(String),
}

impl TracingConfig {
    /// Logging to [`DEFAULT_LOG_FILE_NAME`] at `DEBUG` when `enable_logging` is set,
    /// otherwise no logging at all.
    #[must_use]
    pub fn new_from_flag(enable_logging: bool) -> Self {
        if enable_logging {
            Self {
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
                level_filter: LevelFilter::DEBUG,
            }
        } else {
            Self {
                writer_config: WriterConfig::None,
                level_filter: LevelFilter::OFF,
            }
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}
