//! Fixed byte geometry of the save file.
//!
//! A save holds two redundant slots written alternately; each slot is 14
//! contiguous 4096-byte sections. A section's logical id, structural
//! signature, and save counter live in a footer at fixed offsets within
//! the section; physical position within the slot carries no meaning.

use crate::reader;

pub const SECTION_SIZE: usize = 0x1000;
pub const SECTION_COUNT: usize = 14;
pub const SLOT_SIZE: usize = SECTION_SIZE * SECTION_COUNT;
/// Minimum file length: two full slots.
pub const MIN_FILE_SIZE: usize = SLOT_SIZE * 2;

pub const FOOTER_ID_OFFSET: usize = 0x0FF4;
pub const FOOTER_SIGNATURE_OFFSET: usize = 0x0FF8;
pub const FOOTER_SAVE_INDEX_OFFSET: usize = 0x0FFC;

/// Structural signature every intact section footer carries.
pub const SECTION_SIGNATURE: u32 = 0x0801_2025;

/// Logical section ids decoded by this crate.
pub const SECTION_TRAINER: u16 = 0;
pub const SECTION_PARTY: u16 = 1;

/// Pick the active slot out of the two redundant copies.
///
/// The game alternates slots on every save, stamping each write with a
/// monotonically increasing counter, so the slot whose first physical
/// section carries the higher counter is the most recent; ties resolve
/// to the first slot. The counter is 32-bit with no wraparound handling.
///
/// Caller guarantees `raw` is at least [`MIN_FILE_SIZE`] bytes.
pub fn active_slot(raw: &[u8]) -> &[u8] {
    let first = &raw[..SLOT_SIZE];
    let second = &raw[SLOT_SIZE..MIN_FILE_SIZE];
    if slot_save_index(first) >= slot_save_index(second) {
        first
    } else {
        second
    }
}

fn slot_save_index(slot: &[u8]) -> u32 {
    reader::u32_le(slot, FOOTER_SAVE_INDEX_OFFSET)
}
