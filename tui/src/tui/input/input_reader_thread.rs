// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A dedicated OS thread that reads terminal input, decodes it, and hands
//! [`KeyEvent`]s to the main event loop.
//!
//! The thread waits in [`mio::Poll`] on two sources: the input file descriptor, and a
//! [`mio::Waker`] owned by the [`InputReaderHandle`]. This is what makes it stoppable
//! while idle: [`InputReaderHandle::shutdown`] sets a flag and wakes the poll, and the
//! thread exits instead of blocking on the next read.
//!
//! Events go out through [`tokio::sync::mpsc::Sender::blocking_send`] on a channel of
//! capacity [`KEY_EVENT_CHANNEL_CAPACITY`], so the thread blocks until the main loop has
//! taken the previous key. When the receiver is dropped the send fails and the thread
//! exits. The loop drops its receiver before calling shutdown, so a thread stuck in
//! `blocking_send` is released too.

use super::{KeyDecoder, KeyEvent};
use crate::{CommonResult, Continuation, DEBUG_TUI_INPUT};
use miette::Diagnostic;
use mio::{Events, Interest, Poll, Token, Waker, unix::SourceFd};
use std::{io::{ErrorKind, Read},
          os::fd::AsRawFd,
          sync::{Arc,
                 atomic::{AtomicBool, Ordering}},
          thread::JoinHandle};
use tokio::sync::mpsc::Sender;

pub const INPUT_READ_BUFFER_SIZE: usize = 1_024;
pub const KEY_EVENT_CHANNEL_CAPACITY: usize = 1;
const EVENTS_CAPACITY: usize = 8;
const THREAD_NAME: &str = "gapline-input-reader";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKindReady {
    Input,
    ShutdownWaker,
    Unknown,
}

impl SourceKindReady {
    #[must_use]
    pub const fn to_token(self) -> Token {
        match self {
            Self::Input => Token(0),
            Self::ShutdownWaker => Token(1),
            Self::Unknown => Token(usize::MAX),
        }
    }

    #[must_use]
    pub const fn from_token(token: Token) -> Self {
        match token.0 {
            0 => Self::Input,
            1 => Self::ShutdownWaker,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum InputReaderError {
    #[error("Failed to create mio::Poll")]
    #[diagnostic(
        code(gapline_tui::input::poll_creation),
        help("This usually means the system ran out of file descriptors")
    )]
    PollCreation(#[source] std::io::Error),

    #[error("Failed to create mio::Waker")]
    #[diagnostic(code(gapline_tui::input::waker_creation))]
    WakerCreation(#[source] std::io::Error),

    #[error("Failed to register the input with mio")]
    #[diagnostic(
        code(gapline_tui::input::input_registration),
        help("Ensure stdin is a valid, pollable file descriptor")
    )]
    InputRegistration(#[source] std::io::Error),

    #[error("Failed to spawn the input reader thread")]
    #[diagnostic(code(gapline_tui::input::thread_spawn))]
    ThreadSpawn(#[source] std::io::Error),
}

/// Owns the reader thread. Dropping it asks the thread to stop but does not wait for
/// it; call [`InputReaderHandle::shutdown`] to also join.
#[derive(Debug)]
pub struct InputReaderHandle {
    waker: Arc<Waker>,
    shutdown_requested: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
}

impl InputReaderHandle {
    /// Set the shutdown flag and wake the poll. Returns right away.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::Release);
        if let Err(error) = self.waker.wake() {
            tracing::warn!(message = "input reader: wake failed", error = ?error);
        }
    }

    /// Stop the thread and wait for it to exit. Drop the key event receiver first,
    /// otherwise a thread blocked handing over a key can't observe the request.
    pub fn shutdown(mut self) {
        self.request_shutdown();
        if let Some(join_handle) = self.join_handle.take()
            && join_handle.join().is_err()
        {
            tracing::error!(message = "input reader thread panicked");
        }
    }

    /// [`InputReaderHandle::shutdown`] from async code. The join happens on tokio's
    /// blocking pool, so the runtime keeps running while the thread winds down.
    pub async fn shutdown_async(self) {
        if let Err(error) = tokio::task::spawn_blocking(move || self.shutdown()).await {
            tracing::error!(message = "input reader: shutdown task failed", error = ?error);
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for InputReaderHandle {
    fn drop(&mut self) {
        if self.join_handle.is_some() {
            self.request_shutdown();
        }
    }
}

/// The state that lives on the reader thread.
#[derive(Debug)]
pub struct InputReaderThread<R> {
    source: R,
    poll_handle: Poll,
    ready_events_buffer: Events,
    read_buffer: Box<[u8; INPUT_READ_BUFFER_SIZE]>,
    decoder: KeyDecoder,
    shutdown_requested: Arc<AtomicBool>,
    sender: Sender<KeyEvent>,
}

impl<R> InputReaderThread<R>
where
    R: Read + AsRawFd + Send + 'static,
{
    /// Register `source` with a fresh poll and start the thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the poll, the waker, or the thread can't be created, or if
    /// `source` can't be polled.
    pub fn spawn(source: R, sender: Sender<KeyEvent>) -> CommonResult<InputReaderHandle> {
        let poll_handle = Poll::new().map_err(InputReaderError::PollCreation)?;

        let waker = Arc::new(
            Waker::new(
                poll_handle.registry(),
                SourceKindReady::ShutdownWaker.to_token(),
            )
            .map_err(InputReaderError::WakerCreation)?,
        );

        poll_handle
            .registry()
            .register(
                &mut SourceFd(&source.as_raw_fd()),
                SourceKindReady::Input.to_token(),
                Interest::READABLE,
            )
            .map_err(InputReaderError::InputRegistration)?;

        let shutdown_requested = Arc::new(AtomicBool::new(false));

        let mut reader = Self {
            source,
            poll_handle,
            ready_events_buffer: Events::with_capacity(EVENTS_CAPACITY),
            read_buffer: Box::new([0; INPUT_READ_BUFFER_SIZE]),
            decoder: KeyDecoder::default(),
            shutdown_requested: shutdown_requested.clone(),
            sender,
        };

        let join_handle = std::thread::Builder::new()
            .name(THREAD_NAME.into())
            .spawn(move || reader.run())
            .map_err(InputReaderError::ThreadSpawn)?;

        Ok(InputReaderHandle {
            waker,
            shutdown_requested,
            join_handle: Some(join_handle),
        })
    }

    fn run(&mut self) {
        DEBUG_TUI_INPUT.then(|| tracing::debug!(message = "input reader: started"));
        while self.poll_once() == Continuation::Continue {}
        DEBUG_TUI_INPUT.then(|| tracing::debug!(message = "input reader: exiting"));
    }

    fn poll_once(&mut self) -> Continuation {
        if let Err(error) = self.poll_handle.poll(&mut self.ready_events_buffer, None) {
            if error.kind() == ErrorKind::Interrupted {
                return Continuation::Continue;
            }
            tracing::error!(message = "input reader: poll failed", error = ?error);
            return Continuation::Stop;
        }

        let ready: Vec<Token> = self
            .ready_events_buffer
            .iter()
            .map(mio::event::Event::token)
            .collect();

        for token in ready {
            let continuation = match SourceKindReady::from_token(token) {
                SourceKindReady::ShutdownWaker => self.handle_shutdown_waker(),
                SourceKindReady::Input => self.consume_input(),
                SourceKindReady::Unknown => Continuation::Continue,
            };
            if continuation == Continuation::Stop {
                return Continuation::Stop;
            }
        }

        // Checked between reads as well, the waker may share a poll round with input.
        if self.shutdown_requested.load(Ordering::Acquire) {
            return Continuation::Stop;
        }
        Continuation::Continue
    }

    fn handle_shutdown_waker(&self) -> Continuation {
        if self.shutdown_requested.load(Ordering::Acquire) {
            Continuation::Stop
        } else {
            Continuation::Continue
        }
    }

    fn consume_input(&mut self) -> Continuation {
        match self.source.read(self.read_buffer.as_mut_slice()) {
            Ok(0) => {
                DEBUG_TUI_INPUT.then(|| tracing::debug!(message = "input reader: EOF"));
                Continuation::Stop
            }
            Ok(n) => self.decode_and_send(n),
            Err(ref error)
                if matches!(error.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) =>
            {
                Continuation::Continue
            }
            Err(error) => {
                tracing::error!(message = "input reader: read failed", error = ?error);
                Continuation::Stop
            }
        }
    }

    fn decode_and_send(&mut self, n: usize) -> Continuation {
        let more = n == INPUT_READ_BUFFER_SIZE;
        self.decoder.advance(&self.read_buffer[..n], more);

        for key_event in self.decoder.by_ref() {
            DEBUG_TUI_INPUT.then(|| {
                tracing::debug!(message = "input reader: key", key_event = ?key_event);
            });
            if self.sender.blocking_send(key_event).is_err() {
                DEBUG_TUI_INPUT.then(|| {
                    tracing::debug!(message = "input reader: receiver dropped");
                });
                return Continuation::Stop;
            }
        }
        Continuation::Continue
    }
}
