use serde::{Deserialize, Serialize};

use crate::gender::Gender;

/// Which record kind a collaborator wants decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Trainer,
    Party,
}

/// Trainer identity fields from section id 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerRecord {
    pub name: String,
    pub gender: Gender,
    pub trainer_id: u16,
    pub secret_id: u16,
}

/// The five non-HP battle stats stored in a record's unencrypted tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BattleStats {
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
}

/// One fully decoded creature record from the party section.
///
/// All numeric fields are unsigned and passed through exactly as the
/// encoding represents them; no range validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterRecord {
    pub personality: u32,
    pub ot_id: u32,
    pub nickname: String,
    pub ot_name: String,
    pub level: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    pub stats: BattleStats,
    pub species_id: u16,
    pub experience: u32,
    /// Held item id from the Growth substructure; zero decodes to `None`.
    pub held_item_id: Option<u16>,
    /// Nature name derived from `personality % 25`.
    pub nature: String,
    /// 0 = primary, 1 = secondary, 2 = hidden.
    pub ability_slot: u8,
    /// Move ids with zero-valued entries filtered out.
    pub moves: Vec<u16>,
    /// Effort values: HP, Attack, Defense, Speed, Sp. Atk, Sp. Def.
    pub evs: [u8; 6],
    /// Individual values unpacked from the Misc substructure, same order.
    pub ivs: [u8; 6],
}

/// A section whose footer signature did not match the expected constant.
/// Non-fatal: collected and reported alongside results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrityWarning {
    pub section_id: u16,
    pub signature: u32,
}

/// Records produced for one [`RecordKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedRecords {
    Trainer(TrainerRecord),
    Party(Vec<RosterRecord>),
}

/// Result of a single-kind decode: the records plus any integrity
/// warnings gathered while indexing the active slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodeOutput {
    pub records: DecodedRecords,
    pub warnings: Vec<IntegrityWarning>,
}
