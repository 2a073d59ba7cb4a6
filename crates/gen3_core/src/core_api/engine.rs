use std::fs;
use std::path::Path;

use crate::layout::{self, MIN_FILE_SIZE, SECTION_PARTY, SECTION_TRAINER};
use crate::party;
use crate::sections::SectionIndex;
use crate::trainer;

use super::error::{CoreError, CoreErrorCode};
use super::types::{
    DecodeOutput, DecodedRecords, IntegrityWarning, RecordKind, RosterRecord, TrainerRecord,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// Fully decoded save: trainer record, party roster, and the integrity
/// warnings gathered while indexing the active slot. Holds no reference
/// to the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    trainer: TrainerRecord,
    party: Vec<RosterRecord>,
    warnings: Vec<IntegrityWarning>,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn open_path(&self, path: &Path) -> Result<Session, CoreError> {
        let bytes = read_save(path)?;
        self.open_bytes(&bytes)
    }

    /// Decode both record kinds. Both sections are mandatory here; use
    /// [`Engine::decode_bytes`] to require only one.
    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, CoreError> {
        let raw = bytes.as_ref();
        let index = index_active_slot(raw)?;
        let trainer = trainer::extract_trainer(index.lookup(SECTION_TRAINER)?.bytes);
        let party = party::extract_party(index.lookup(SECTION_PARTY)?.bytes);
        let warnings = index.integrity_warnings();
        Ok(Session {
            trainer,
            party,
            warnings,
        })
    }

    /// Boundary contract for shells: decode only the requested record
    /// kind from a file on disk.
    pub fn decode_path(&self, path: &Path, kind: RecordKind) -> Result<DecodeOutput, CoreError> {
        let bytes = read_save(path)?;
        self.decode_bytes(&bytes, kind)
    }

    pub fn decode_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        kind: RecordKind,
    ) -> Result<DecodeOutput, CoreError> {
        let raw = bytes.as_ref();
        let index = index_active_slot(raw)?;
        let records = match kind {
            RecordKind::Trainer => {
                DecodedRecords::Trainer(trainer::extract_trainer(index.lookup(SECTION_TRAINER)?.bytes))
            }
            RecordKind::Party => {
                DecodedRecords::Party(party::extract_party(index.lookup(SECTION_PARTY)?.bytes))
            }
        };
        Ok(DecodeOutput {
            records,
            warnings: index.integrity_warnings(),
        })
    }
}

impl Session {
    pub fn trainer(&self) -> &TrainerRecord {
        &self.trainer
    }

    pub fn party(&self) -> &[RosterRecord] {
        &self.party
    }

    pub fn warnings(&self) -> &[IntegrityWarning] {
        &self.warnings
    }
}

fn read_save(path: &Path) -> Result<Vec<u8>, CoreError> {
    fs::read(path).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Io,
            format!("failed to read {}: {e}", path.display()),
        )
    })
}

fn index_active_slot(raw: &[u8]) -> Result<SectionIndex<'_>, CoreError> {
    if raw.len() < MIN_FILE_SIZE {
        return Err(CoreError::new(
            CoreErrorCode::MalformedInput,
            format!(
                "file is {} bytes, expected at least {} (two save slots)",
                raw.len(),
                MIN_FILE_SIZE
            ),
        ));
    }
    Ok(SectionIndex::build(layout::active_slot(raw)))
}
