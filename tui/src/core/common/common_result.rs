// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`miette::Result`]. Errors from every layer
/// (file I/O, terminal, startup) are reported through [`miette::Report`], so that the
/// binary can print them with the global report handler.
pub type CommonResult<T> = miette::Result<T>;
