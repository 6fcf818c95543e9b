// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EditorState;
use crate::{CommonResult, Continuation, CrosstermDriver, DEBUG_TUI_MAIN_EVENT_LOOP,
            EditorConfig, EditorEngine, InputReaderThread, KEY_EVENT_CHANNEL_CAPACITY,
            KeyEvent, RedrawRequest, Renderer, SIGNAL_EVENT_CHANNEL_CAPACITY, SignalEvent,
            Size, TabManager, TerminalDriver, spawn_signal_task};
use miette::{IntoDiagnostic, WrapErr};
use std::{fs::File, path::PathBuf};
use tokio::sync::mpsc::{self, Receiver};

/// Where keystrokes are read from. Reading the controlling terminal directly (rather
/// than stdin) means there is no userspace buffering between the fd that is polled and
/// the bytes that are read.
pub const TTY_PATH: &str = "/dev/tty";

/// Open `file_paths` in tabs (the first one focused), take over the terminal and run
/// until the user quits. The terminal is restored on every exit path.
///
/// Must be called from inside a tokio runtime.
///
/// # Errors
///
/// Returns an error if a file can't be loaded, or if the terminal can't be set up or
/// written to.
pub async fn main_event_loop(
    file_paths: Vec<PathBuf>,
    config: EditorConfig,
) -> CommonResult<()> {
    let mut tabs = TabManager::new();
    for path in file_paths {
        tabs.add_tab(path, Size::default(), &config)?;
    }
    if tabs.is_empty() {
        miette::bail!("No files to open");
    }
    tabs.set_active_index(0);

    let tty = File::options()
        .read(true)
        .open(TTY_PATH)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open {TTY_PATH}"))?;

    let mut driver = CrosstermDriver::try_new()?;
    tabs.set_window_size(driver.size()?);

    let (key_sender, mut key_receiver) = mpsc::channel(KEY_EVENT_CHANNEL_CAPACITY);
    let (signal_sender, mut signal_receiver) = mpsc::channel(SIGNAL_EVENT_CHANNEL_CAPACITY);
    let input_reader = InputReaderThread::spawn(tty, key_sender)?;
    let signal_task = spawn_signal_task(signal_sender)?;

    let mut state = EditorState::new(tabs, EditorEngine::new(config), Renderer::default());
    let result = run_event_loop(
        &mut state,
        &mut driver,
        &mut key_receiver,
        &mut signal_receiver,
    )
    .await;

    // Unblocks a reader waiting to hand over a key, then stops and joins it.
    drop(key_receiver);
    input_reader.shutdown_async().await;
    signal_task.abort();

    DEBUG_TUI_MAIN_EVENT_LOOP.then(|| {
        tracing::debug!(message = "main_event_loop: exit", result = ?result);
    });
    result
}

/// Paint the first frame, then handle one event at a time until a quit request, an
/// interrupt, or the end of the key event stream. Events are taken in the order they
/// arrive on each channel. Resize and interrupt notifications go first when both
/// channels have something.
///
/// # Errors
///
/// Returns an error if painting fails or the terminal size can't be queried.
pub async fn run_event_loop<D: TerminalDriver>(
    state: &mut EditorState,
    driver: &mut D,
    key_receiver: &mut Receiver<KeyEvent>,
    signal_receiver: &mut Receiver<SignalEvent>,
) -> CommonResult<()> {
    state.render(driver, &RedrawRequest::Full)?;
    let mut signals_open = true;

    loop {
        let (continuation, redraw_request) = tokio::select! {
            biased;

            maybe_signal_event = signal_receiver.recv(), if signals_open => {
                match maybe_signal_event {
                    Some(signal_event) => state.handle_signal_event(signal_event, &*driver)?,
                    None => {
                        signals_open = false;
                        (Continuation::Continue, RedrawRequest::Nothing)
                    }
                }
            }

            maybe_key_event = key_receiver.recv() => {
                match maybe_key_event {
                    Some(key_event) => state.handle_key_event(key_event),
                    None => {
                        tracing::debug!(message = "key event stream ended");
                        (Continuation::Stop, RedrawRequest::Nothing)
                    }
                }
            }
        };

        if continuation == Continuation::Stop {
            break;
        }
        state.render(driver, &redraw_request)?;
    }

    Ok(())
}
