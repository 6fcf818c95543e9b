// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, WriterConfig, rolling_file_appender_impl};
use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the global subscriber described by `tracing_config`. Does nothing when the
/// config disables logging.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    if let Some(layers) = try_create_layers(tracing_config)? {
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()?;
    }
    Ok(())
}

/// Install the subscriber for the current thread only, until the returned guard is
/// dropped. Returns [None] when the config disables logging.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<DefaultGuard>> {
    Ok(try_create_layers(tracing_config)?.map(|layers| {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(layers))
    }))
}

/// Returns the layers. This does not install them, see
/// [`try_initialize_logging_global`] for that.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if tracing_config.get_writer_config() == WriterConfig::None {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path.as_str())?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}
