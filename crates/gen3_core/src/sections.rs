//! Section index for one slot: logical id to fixed-size block.

use crate::core_api::{CoreError, CoreErrorCode, IntegrityWarning};
use crate::layout::{
    FOOTER_ID_OFFSET, FOOTER_SAVE_INDEX_OFFSET, FOOTER_SIGNATURE_OFFSET, SECTION_COUNT,
    SECTION_SIGNATURE, SECTION_SIZE,
};
use crate::reader;

/// One 4096-byte section with its footer fields.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub id: u16,
    pub save_index: u32,
    pub signature: u32,
    pub bytes: &'a [u8],
}

/// A slot's sections keyed by logical id; physical order is discarded.
#[derive(Debug)]
pub struct SectionIndex<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> SectionIndex<'a> {
    /// Split a slot into its 14 sections and read each footer.
    ///
    /// Caller guarantees `slot` is exactly one slot long.
    pub fn build(slot: &'a [u8]) -> Self {
        let sections = (0..SECTION_COUNT)
            .map(|i| {
                let bytes = &slot[i * SECTION_SIZE..(i + 1) * SECTION_SIZE];
                Section {
                    id: reader::u16_le(bytes, FOOTER_ID_OFFSET),
                    save_index: reader::u32_le(bytes, FOOTER_SAVE_INDEX_OFFSET),
                    signature: reader::u32_le(bytes, FOOTER_SIGNATURE_OFFSET),
                    bytes,
                }
            })
            .collect();
        Self { sections }
    }

    /// Find the section carrying logical id `id`.
    ///
    /// Required sections are structurally mandatory, so an absent id is
    /// fatal for the whole decode.
    pub fn lookup(&self, id: u16) -> Result<&Section<'a>, CoreError> {
        self.sections.iter().find(|s| s.id == id).ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::SectionMissing,
                format!("section {id} not found in active slot"),
            )
        })
    }

    /// Signature mismatches, one warning per section. Advisory only: a
    /// corrupted auxiliary section must not block extraction of the
    /// sections that still validate.
    pub fn integrity_warnings(&self) -> Vec<IntegrityWarning> {
        self.sections
            .iter()
            .filter(|s| s.signature != SECTION_SIGNATURE)
            .map(|s| IntegrityWarning {
                section_id: s.id,
                signature: s.signature,
            })
            .collect()
    }
}
