//! Per-record obfuscation layer of the party section.
//!
//! Each 100-byte roster record starts with two unencrypted 32-bit
//! identity fields (`personality`, `otId`). Bytes [32, 80) are XORed
//! word-by-word with `personality ^ otId`, and the four 12-byte
//! substructures inside that payload are stored in one of 24 physical
//! orders selected by `personality % 24`.

use crate::reader;

pub const RECORD_SIZE: usize = 100;
pub const PERSONALITY_OFFSET: usize = 0;
pub const OT_ID_OFFSET: usize = 4;

pub const PAYLOAD_START: usize = 32;
pub const PAYLOAD_END: usize = 80;
pub const SUBSTRUCTURE_SIZE: usize = 12;

/// Logical role of one 12-byte payload block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substructure {
    /// Species id and experience.
    Growth,
    /// Four move ids.
    Attacks,
    /// Six effort-value bytes.
    Evs,
    /// Origin, IVs, ability flag.
    Misc,
}

impl Substructure {
    fn role(self) -> u8 {
        match self {
            Self::Growth => 0,
            Self::Attacks => 1,
            Self::Evs => 2,
            Self::Misc => 3,
        }
    }
}

/// The 24 orderings of the four substructures, enumerated
/// lexicographically: entry `[p][pos]` is the role stored at physical
/// position `pos` when `personality % 24 == p`. Index 0 is the identity
/// ordering, index 23 its reverse.
const SUBSTRUCTURE_ORDERS: [[u8; 4]; 24] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 2, 3, 0],
    [1, 3, 0, 2],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 0, 3, 1],
    [2, 1, 0, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 1, 2, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

pub fn personality(record: &[u8; RECORD_SIZE]) -> u32 {
    reader::u32_le(record, PERSONALITY_OFFSET)
}

pub fn ot_id(record: &[u8; RECORD_SIZE]) -> u32 {
    reader::u32_le(record, OT_ID_OFFSET)
}

/// XOR the twelve 32-bit payload words with `personality ^ otId`.
///
/// Pure and self-inverse: applying it twice reproduces the input.
/// Bytes outside [32, 80) pass through unchanged; any 100-byte input
/// produces an output.
pub fn decrypt(record: &[u8; RECORD_SIZE]) -> [u8; RECORD_SIZE] {
    let key = personality(record) ^ ot_id(record);
    let mut out = *record;
    let mut offset = PAYLOAD_START;
    while offset < PAYLOAD_END {
        let word = reader::u32_le(record, offset) ^ key;
        out[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
        offset += 4;
    }
    out
}

/// 12-byte window holding `which` inside a decrypted record's payload.
pub fn substructure(record: &[u8; RECORD_SIZE], which: Substructure) -> &[u8] {
    let order = &SUBSTRUCTURE_ORDERS[(personality(record) % 24) as usize];
    let position = order
        .iter()
        .position(|&role| role == which.role())
        .expect("every ordering names all four roles");
    &record[PAYLOAD_START + position * SUBSTRUCTURE_SIZE..][..SUBSTRUCTURE_SIZE]
}
