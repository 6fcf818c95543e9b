// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns raw terminal bytes into [`KeyEvent`]s.
//!
//! Bytes are fed in with [`KeyDecoder::advance`] as they are read, and decoded events
//! are pulled out by iterating the decoder. Partial input (half of a multi byte code
//! point, or an `ESC` that may start an arrow key sequence) is kept until the bytes that
//! complete it arrive.
//!
//! | Bytes                      | Event                      |
//! |----------------------------|----------------------------|
//! | `ESC [ A` .. `ESC [ D`     | Up, Down, Right, Left      |
//! | `ESC [ X` (other ASCII)    | dropped                    |
//! | `ESC` alone                | Esc                        |
//! | `CR`, `LF`                 | Enter                      |
//! | `DEL`, `BS`                | Backspace                  |
//! | `HT`                       | Tab                        |
//! | `0x01`..=`0x1A` (others)   | `Ctrl('a'..='z')`          |
//! | `0x1F`                     | `Ctrl('/')`                |
//! | valid UTF-8                | `Char`                     |
//! | invalid UTF-8 byte         | `Char('\u{FFFD}')`, 1 byte |

use super::KeyEvent;
use std::collections::VecDeque;

pub const ASCII_ESC: u8 = 0x1B;
pub const ASCII_DEL: u8 = 0x7F;
pub const ASCII_BS: u8 = 0x08;
pub const ASCII_HT: u8 = 0x09;
pub const ASCII_LF: u8 = 0x0A;
pub const ASCII_CR: u8 = 0x0D;
pub const ASCII_US: u8 = 0x1F;
pub const CSI_INTRODUCER: u8 = b'[';

const UTF8_CONTINUATION_MASK: u8 = 0b1100_0000;
const UTF8_CONTINUATION_PATTERN: u8 = 0b1000_0000;

/// Outcome of looking at the front of the pending bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoded {
    /// An event, and how many bytes it used.
    Event(KeyEvent, usize),
    /// Bytes that mean nothing to the editor.
    Skip(usize),
    /// Need more bytes.
    Incomplete,
}

#[derive(Debug)]
pub struct KeyDecoder {
    pending: Vec<u8>,
    events: VecDeque<KeyEvent>,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self {
            pending: Vec::with_capacity(16),
            events: VecDeque::with_capacity(64),
        }
    }
}

impl KeyDecoder {
    /// Feed bytes. Set `more` when the read that produced `buffer` filled the whole
    /// read buffer, i.e. more bytes are likely already waiting. A trailing lone `ESC` is
    /// only reported as [`KeyEvent::Esc`] when `more` is false.
    pub fn advance(&mut self, buffer: &[u8], more: bool) {
        for (index, byte) in buffer.iter().enumerate() {
            let more = index + 1 < buffer.len() || more;
            self.pending.push(*byte);

            while !self.pending.is_empty() {
                match try_decode(&self.pending, more) {
                    Decoded::Event(event, consumed) => {
                        self.events.push_back(event);
                        self.pending.drain(..consumed);
                    }
                    Decoded::Skip(consumed) => {
                        self.pending.drain(..consumed);
                    }
                    Decoded::Incomplete => break,
                }
            }
        }
    }

    /// Bytes held back waiting for the rest of a sequence.
    #[must_use]
    pub fn pending_len(&self) -> usize { self.pending.len() }
}

impl Iterator for KeyDecoder {
    type Item = KeyEvent;

    fn next(&mut self) -> Option<Self::Item> { self.events.pop_front() }
}

fn try_decode(buffer: &[u8], more: bool) -> Decoded {
    let Some(&first) = buffer.first() else {
        return Decoded::Incomplete;
    };

    match first {
        ASCII_ESC => decode_escape(buffer, more),
        ASCII_CR | ASCII_LF => Decoded::Event(KeyEvent::Enter, 1),
        ASCII_DEL | ASCII_BS => Decoded::Event(KeyEvent::Backspace, 1),
        ASCII_HT => Decoded::Event(KeyEvent::Tab, 1),
        ASCII_US => Decoded::Event(KeyEvent::Ctrl('/'), 1),
        0x01..=0x1A => Decoded::Event(KeyEvent::Ctrl(char::from(b'a' + first - 1)), 1),
        0x00 | 0x1C..=0x1E => Decoded::Skip(1),
        _ => decode_utf8(buffer),
    }
}

fn decode_escape(buffer: &[u8], more: bool) -> Decoded {
    match (buffer.get(1), buffer.get(2)) {
        (None, _) if more => Decoded::Incomplete,
        (Some(&CSI_INTRODUCER), None) if more => Decoded::Incomplete,
        (Some(&CSI_INTRODUCER), Some(&code)) => match code {
            b'A' => Decoded::Event(KeyEvent::Up, 3),
            b'B' => Decoded::Event(KeyEvent::Down, 3),
            b'C' => Decoded::Event(KeyEvent::Right, 3),
            b'D' => Decoded::Event(KeyEvent::Left, 3),
            _ if code.is_ascii() => Decoded::Skip(3),
            // Part of a multi byte code point, which is decoded on its own.
            _ => Decoded::Event(KeyEvent::Esc, 1),
        },
        // Anything else: the ESC stands on its own, what follows is decoded afresh.
        _ => Decoded::Event(KeyEvent::Esc, 1),
    }
}

fn decode_utf8(buffer: &[u8]) -> Decoded {
    let Some(required_len) = get_utf8_length(buffer[0]) else {
        return Decoded::Event(KeyEvent::Char(char::REPLACEMENT_CHARACTER), 1);
    };

    for byte in buffer.iter().skip(1).take(required_len - 1) {
        if (byte & UTF8_CONTINUATION_MASK) != UTF8_CONTINUATION_PATTERN {
            return Decoded::Event(KeyEvent::Char(char::REPLACEMENT_CHARACTER), 1);
        }
    }

    if buffer.len() < required_len {
        return Decoded::Incomplete;
    }

    match std::str::from_utf8(&buffer[..required_len])
        .ok()
        .and_then(|it| it.chars().next())
    {
        Some(ch) => Decoded::Event(KeyEvent::Char(ch), required_len),
        // Overlong encodings and surrogates.
        None => Decoded::Event(KeyEvent::Char(char::REPLACEMENT_CHARACTER), 1),
    }
}

fn get_utf8_length(first_byte: u8) -> Option<usize> {
    match first_byte {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn decode(bytes: &[u8]) -> Vec<KeyEvent> {
        let mut decoder = KeyDecoder::default();
        decoder.advance(bytes, false);
        decoder.collect()
    }

    #[test]
    fn test_ascii_chars() {
        assert_eq2!(
            decode(b"ab c"),
            vec![
                KeyEvent::Char('a'),
                KeyEvent::Char('b'),
                KeyEvent::Char(' '),
                KeyEvent::Char('c')
            ]
        );
    }

    #[test_case(b"\x1b[A", KeyEvent::Up)]
    #[test_case(b"\x1b[B", KeyEvent::Down)]
    #[test_case(b"\x1b[C", KeyEvent::Right)]
    #[test_case(b"\x1b[D", KeyEvent::Left)]
    #[test_case(b"\r", KeyEvent::Enter)]
    #[test_case(b"\n", KeyEvent::Enter)]
    #[test_case(b"\x7f", KeyEvent::Backspace)]
    #[test_case(b"\x08", KeyEvent::Backspace)]
    #[test_case(b"\t", KeyEvent::Tab)]
    #[test_case(b"\x1b", KeyEvent::Esc)]
    #[test_case(b"\x11", KeyEvent::Ctrl('q'))]
    #[test_case(b"\x13", KeyEvent::Ctrl('s'))]
    #[test_case(b"\x01", KeyEvent::Ctrl('a'))]
    #[test_case(b"\x1a", KeyEvent::Ctrl('z'))]
    #[test_case(b"\x1f", KeyEvent::Ctrl('/'))]
    fn test_single_key(bytes: &[u8], expected: KeyEvent) {
        assert_eq2!(decode(bytes), vec![expected]);
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq2!(
            decode("é世🦀".as_bytes()),
            vec![KeyEvent::Char('é'), KeyEvent::Char('世'), KeyEvent::Char('🦀')]
        );
    }

    #[test]
    fn test_utf8_split_across_reads() {
        let bytes = "世".as_bytes();
        let mut decoder = KeyDecoder::default();
        decoder.advance(&bytes[..1], false);
        assert_eq2!(decoder.next(), None);
        assert_eq2!(decoder.pending_len(), 1);
        decoder.advance(&bytes[1..], false);
        assert_eq2!(decoder.next(), Some(KeyEvent::Char('世')));
        assert_eq2!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_arrow_split_across_reads() {
        let mut decoder = KeyDecoder::default();
        decoder.advance(b"\x1b", true);
        assert_eq2!(decoder.next(), None);
        decoder.advance(b"[", true);
        assert_eq2!(decoder.next(), None);
        decoder.advance(b"A", false);
        assert_eq2!(decoder.next(), Some(KeyEvent::Up));
    }

    #[test]
    fn test_esc_followed_by_char() {
        assert_eq2!(decode(b"\x1bx"), vec![KeyEvent::Esc, KeyEvent::Char('x')]);
    }

    #[test]
    fn test_esc_bracket_at_end_of_read() {
        assert_eq2!(decode(b"\x1b["), vec![KeyEvent::Esc, KeyEvent::Char('[')]);
    }

    #[test]
    fn test_unknown_csi_is_dropped() {
        assert_eq2!(
            decode(b"\x1b[Hz\x1b[A"),
            vec![KeyEvent::Char('z'), KeyEvent::Up]
        );
    }

    #[test]
    fn test_esc_bracket_before_multibyte_char_keeps_the_char() {
        let mut bytes = b"\x1b[".to_vec();
        bytes.extend_from_slice("世".as_bytes());
        bytes.push(b'x');
        assert_eq2!(
            decode(&bytes),
            vec![
                KeyEvent::Esc,
                KeyEvent::Char('['),
                KeyEvent::Char('世'),
                KeyEvent::Char('x')
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_becomes_replacement_char() {
        assert_eq2!(
            decode(&[0xFF, b'a', 0xC3, b'b']),
            vec![
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char('a'),
                KeyEvent::Char(char::REPLACEMENT_CHARACTER),
                KeyEvent::Char('b'),
            ]
        );
    }

    #[test]
    fn test_unmapped_control_bytes_are_skipped() {
        assert_eq2!(decode(&[0x00, 0x1C, b'k']), vec![KeyEvent::Char('k')]);
    }

    #[test]
    fn test_mixed_stream_keeps_order() {
        assert_eq2!(
            decode(b"Hi\r\x1b[B\x7f"),
            vec![
                KeyEvent::Char('H'),
                KeyEvent::Char('i'),
                KeyEvent::Enter,
                KeyEvent::Down,
                KeyEvent::Backspace
            ]
        );
    }
}
