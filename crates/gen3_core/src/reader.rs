//! Little-endian fixed-width reads over in-memory save buffers.
//!
//! The save layout is fixed at compile time; an offset running past the
//! buffer is a bug in a layout table, not a property of the input, so
//! slice indexing is allowed to panic.

pub fn u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

pub fn u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
