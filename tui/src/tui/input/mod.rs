// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two event producers and what they produce.
//!
//! ```text
//! stdin bytes ──▶ InputReaderThread (KeyDecoder) ──▶ mpsc<KeyEvent> ─────┐
//!                                                                        ├─▶ main_event_loop
//! SIGWINCH / SIGINT ──▶ signal task ──────────────▶ mpsc<SignalEvent> ───┘
//! ```

// Attach.
pub mod input_reader_thread;
pub mod key_decoder;
pub mod key_event;
pub mod signal_task;

// Re-export.
pub use input_reader_thread::*;
pub use key_decoder::*;
pub use key_event::*;
pub use signal_task::*;
