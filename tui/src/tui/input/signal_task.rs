// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, DEBUG_TUI_INPUT};
use miette::IntoDiagnostic;
use tokio::{signal::unix::{SignalKind, signal},
            sync::mpsc::Sender,
            task::JoinHandle};

pub const SIGNAL_EVENT_CHANNEL_CAPACITY: usize = 16;

/// OS notifications the main event loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalEvent {
    /// `SIGWINCH`, the terminal was resized.
    WindowChanged,
    /// `SIGINT`, quit.
    Interrupt,
}

/// Start a task that forwards `SIGWINCH` and `SIGINT` to `sender`. The task ends when the
/// receiver is dropped; abort the returned handle to end it sooner.
///
/// Must be called from inside a tokio runtime.
///
/// # Errors
///
/// Returns an error if the signal handlers can't be installed.
pub fn spawn_signal_task(sender: Sender<SignalEvent>) -> CommonResult<JoinHandle<()>> {
    let mut sigwinch = signal(SignalKind::window_change()).into_diagnostic()?;
    let mut sigint = signal(SignalKind::interrupt()).into_diagnostic()?;

    Ok(tokio::spawn(async move {
        loop {
            let maybe_event = tokio::select! {
                it = sigwinch.recv() => it.map(|()| SignalEvent::WindowChanged),
                it = sigint.recv() => it.map(|()| SignalEvent::Interrupt),
            };

            let Some(signal_event) = maybe_event else {
                break;
            };

            DEBUG_TUI_INPUT.then(|| {
                tracing::debug!(message = "signal task: received", signal_event = ?signal_event);
            });

            if sender.send(signal_event).await.is_err() {
                break;
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[serial_test::serial]
    #[tokio::test]
    async fn test_sigwinch_is_forwarded() {
        let (sender, mut receiver) = mpsc::channel(SIGNAL_EVENT_CHANNEL_CAPACITY);
        let join_handle = spawn_signal_task(sender).unwrap();

        let status = std::process::Command::new("kill")
            .args(["-WINCH", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        let it = tokio::time::timeout(Duration::from_secs(5), receiver.recv())
            .await
            .unwrap();
        assert_eq2!(it, Some(SignalEvent::WindowChanged));

        join_handle.abort();
    }

    #[serial_test::serial]
    #[tokio::test]
    async fn test_task_ends_when_receiver_is_dropped() {
        let (sender, receiver) = mpsc::channel(SIGNAL_EVENT_CHANNEL_CAPACITY);
        let join_handle = spawn_signal_task(sender).unwrap();
        drop(receiver);

        std::process::Command::new("kill")
            .args(["-WINCH", &std::process::id().to_string()])
            .status()
            .unwrap();

        tokio::time::timeout(Duration::from_secs(5), join_handle)
            .await
            .unwrap()
            .unwrap();
    }
}
