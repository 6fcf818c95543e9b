// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Line terminator used by a file. Lines are stored without it, it is only applied when
/// saving.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum NewlineConvention {
    #[default]
    #[strum(serialize = "LF")]
    Lf,
    #[strum(serialize = "CRLF")]
    CrLf,
    #[strum(serialize = "CR")]
    Cr,
}

impl NewlineConvention {
    #[must_use]
    pub fn terminator(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Detect from the first terminator found in `text`. [`NewlineConvention::Lf`] when
    /// there is none.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        match bytes.iter().position(|it| *it == b'\r' || *it == b'\n') {
            Some(index) if bytes[index] == b'\n' => Self::Lf,
            Some(index) if bytes.get(index + 1) == Some(&b'\n') => Self::CrLf,
            Some(_) => Self::Cr,
            None => Self::Lf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("a\nb", NewlineConvention::Lf)]
    #[test_case("a\r\nb\nc", NewlineConvention::CrLf)]
    #[test_case("a\rb\r\n", NewlineConvention::Cr)]
    #[test_case("\r", NewlineConvention::Cr)]
    #[test_case("no terminator", NewlineConvention::Lf)]
    #[test_case("", NewlineConvention::Lf)]
    fn test_detect(text: &str, expected: NewlineConvention) {
        assert_eq2!(NewlineConvention::detect(text), expected);
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        for it in NewlineConvention::iter() {
            assert_eq2!(NewlineConvention::from_str(&it.to_string()).unwrap(), it);
        }
        assert_eq2!(NewlineConvention::CrLf.to_string(), "CRLF");
    }
}
