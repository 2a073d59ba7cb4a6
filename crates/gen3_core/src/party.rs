//! Party roster extraction (section id 1).
//!
//! The section declares its record count at a fixed offset; records are
//! 100-byte blocks laid out back to back, capped at six. Extraction
//! decrypts each record and reads the substructures through the
//! permutation selected by the record's personality value.

use crate::charmap;
use crate::core_api::{BattleStats, RosterRecord};
use crate::reader;
use crate::record::{self, RECORD_SIZE, Substructure};

pub const PARTY_COUNT_OFFSET: usize = 0x0034;
pub const PARTY_OFFSET: usize = 0x0038;
pub const PARTY_CAPACITY: usize = 6;

// Unencrypted display/battle fields within one record.
const NICKNAME_OFFSET: usize = 8;
const NICKNAME_LEN: usize = 10;
const OT_NAME_OFFSET: usize = 20;
const OT_NAME_LEN: usize = 7;
const LEVEL_OFFSET: usize = 84;
const CURRENT_HP_OFFSET: usize = 86;
const MAX_HP_OFFSET: usize = 88;
const ATTACK_OFFSET: usize = 90;
const DEFENSE_OFFSET: usize = 92;
const SPEED_OFFSET: usize = 94;
const SP_ATTACK_OFFSET: usize = 96;
const SP_DEFENSE_OFFSET: usize = 98;

// Growth substructure fields.
const GROWTH_SPECIES_OFFSET: usize = 0;
const GROWTH_ITEM_OFFSET: usize = 2;
const GROWTH_EXPERIENCE_OFFSET: usize = 4;

// Misc substructure: packed IV/ability word.
const MISC_IV_WORD_OFFSET: usize = 4;

pub const NATURES: [&str; 25] = [
    "Hardy", "Lonely", "Brave", "Adamant", "Naughty",
    "Bold", "Docile", "Relaxed", "Impish", "Lax",
    "Timid", "Hasty", "Serious", "Jolly", "Naive",
    "Modest", "Mild", "Quiet", "Bashful", "Rash",
    "Calm", "Gentle", "Sassy", "Careful", "Quirky",
];

/// Decode up to `min(declared count, 6)` roster records.
///
/// Every declared slot is decoded as-is; field values pass through
/// unsigned and unvalidated.
pub fn extract_party(section: &[u8]) -> Vec<RosterRecord> {
    let declared = reader::u32_le(section, PARTY_COUNT_OFFSET) as usize;
    (0..declared.min(PARTY_CAPACITY))
        .map(|i| {
            let start = PARTY_OFFSET + i * RECORD_SIZE;
            let raw: &[u8; RECORD_SIZE] = section[start..start + RECORD_SIZE]
                .try_into()
                .expect("record slice has fixed length");
            extract_record(raw)
        })
        .collect()
}

/// Decode one 100-byte roster record.
pub fn extract_record(raw: &[u8; RECORD_SIZE]) -> RosterRecord {
    let decrypted = record::decrypt(raw);
    let personality = record::personality(&decrypted);
    let ot_id = record::ot_id(&decrypted);

    let growth = record::substructure(&decrypted, Substructure::Growth);
    let attacks = record::substructure(&decrypted, Substructure::Attacks);
    let evs = record::substructure(&decrypted, Substructure::Evs);
    let misc = record::substructure(&decrypted, Substructure::Misc);

    let held_item = reader::u16_le(growth, GROWTH_ITEM_OFFSET);
    let moves = (0..4)
        .map(|i| reader::u16_le(attacks, i * 2))
        .filter(|&m| m != 0)
        .collect();

    let iv_word = reader::u32_le(misc, MISC_IV_WORD_OFFSET);
    let mut ivs = [0u8; 6];
    for (i, iv) in ivs.iter_mut().enumerate() {
        *iv = ((iv_word >> (5 * i)) & 0x1F) as u8;
    }
    // Bit 31 set = hidden ability, else personality parity picks the slot.
    let ability_slot = if (iv_word >> 31) & 1 == 1 {
        2
    } else if personality % 2 == 0 {
        0
    } else {
        1
    };

    RosterRecord {
        personality,
        ot_id,
        nickname: charmap::decode(&decrypted[NICKNAME_OFFSET..NICKNAME_OFFSET + NICKNAME_LEN]),
        ot_name: charmap::decode(&decrypted[OT_NAME_OFFSET..OT_NAME_OFFSET + OT_NAME_LEN]),
        level: decrypted[LEVEL_OFFSET],
        current_hp: reader::u16_le(&decrypted, CURRENT_HP_OFFSET),
        max_hp: reader::u16_le(&decrypted, MAX_HP_OFFSET),
        stats: BattleStats {
            attack: reader::u16_le(&decrypted, ATTACK_OFFSET),
            defense: reader::u16_le(&decrypted, DEFENSE_OFFSET),
            speed: reader::u16_le(&decrypted, SPEED_OFFSET),
            sp_attack: reader::u16_le(&decrypted, SP_ATTACK_OFFSET),
            sp_defense: reader::u16_le(&decrypted, SP_DEFENSE_OFFSET),
        },
        species_id: reader::u16_le(growth, GROWTH_SPECIES_OFFSET),
        experience: reader::u32_le(growth, GROWTH_EXPERIENCE_OFFSET),
        held_item_id: if held_item != 0 { Some(held_item) } else { None },
        nature: NATURES[(personality % 25) as usize].to_string(),
        ability_slot,
        moves,
        evs: evs[..6].try_into().expect("EV block holds six bytes"),
        ivs,
    }
}
