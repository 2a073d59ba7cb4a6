//! Proprietary single-byte text encoding used by the save format.
//!
//! Strings are stored as byte sequences terminated by `0xFF`. The table
//! covers the space character, digits, a handful of punctuation marks,
//! the two gender glyphs, and the Latin alphabet; everything else has no
//! mapping and is rendered as a visible placeholder so decoding never
//! fails.

use std::fmt::Write as _;
use std::sync::LazyLock;

/// Terminator byte; decoding stops here, the terminator itself excluded.
pub const TERMINATOR: u8 = 0xFF;

static DECODE_TABLE: LazyLock<[Option<char>; 256]> = LazyLock::new(|| {
    let mut table = [None; 256];
    table[0x00] = Some(' ');
    for (i, c) in ('0'..='9').enumerate() {
        table[0xA1 + i] = Some(c);
    }
    table[0xAB] = Some('!');
    table[0xAC] = Some('?');
    table[0xAD] = Some('.');
    table[0xAE] = Some('-');
    table[0xB5] = Some('♂');
    table[0xB6] = Some('♀');
    for (i, c) in ('A'..='Z').enumerate() {
        table[0xBB + i] = Some(c);
    }
    for (i, c) in ('a'..='z').enumerate() {
        table[0xD5 + i] = Some(c);
    }
    table
});

/// Decode up to the first terminator. Bytes with no table entry render
/// as a bracketed hex placeholder (`[0x3c]`) instead of failing.
pub fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b == TERMINATOR {
            break;
        }
        match DECODE_TABLE[b as usize] {
            Some(c) => out.push(c),
            None => {
                let _ = write!(out, "[0x{b:02x}]");
            }
        }
    }
    out
}

/// Inverse mapping for a single character, if the character is mapped.
pub fn encode_char(c: char) -> Option<u8> {
    DECODE_TABLE
        .iter()
        .position(|&entry| entry == Some(c))
        .map(|b| b as u8)
}

/// Encode a string composed solely of mapped characters, without the
/// terminator. Returns `None` if any character has no byte value.
pub fn encode(text: &str) -> Option<Vec<u8>> {
    text.chars().map(encode_char).collect()
}
