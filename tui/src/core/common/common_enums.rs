// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Tells a loop (the main event loop, or the input reader thread) whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Continue to the next iteration.
    #[default]
    Continue,

    /// Stop processing and exit the loop/thread.
    Stop,
}
