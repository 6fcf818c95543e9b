// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for `pretty_assertions::assert_eq!` that produces a colored diff on failure.
/// Only usable from tests, since `pretty_assertions` is a dev dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Runs the block and returns `Ok(())`. Used in fallible functions whose body is a
/// sequence of `?` expressions.
///
/// ```
/// use gapline_tui::{CommonResult, throws};
/// fn run() -> CommonResult<()> {
///     throws!({
///         let _n: u8 = "1".parse().map_err(|_| miette::miette!("not a number"))?;
///     })
/// }
/// # run().unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it:block) => {{
        $it
        return Ok(());
    }};
}

/// Shorthand for `Ok(())` or `Ok(value)`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
