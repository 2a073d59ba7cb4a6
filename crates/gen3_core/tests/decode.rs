use std::path::Path;

use gen3_core::charmap;
use gen3_core::core_api::{CoreErrorCode, DecodedRecords, Engine, RecordKind};
use gen3_core::layout::{
    FOOTER_ID_OFFSET, FOOTER_SAVE_INDEX_OFFSET, FOOTER_SIGNATURE_OFFSET, MIN_FILE_SIZE,
    SECTION_COUNT, SECTION_SIGNATURE, SECTION_SIZE, SLOT_SIZE,
};
use gen3_core::sections::SectionIndex;

const PARTY_COUNT_OFFSET: usize = 0x0034;
const PARTY_OFFSET: usize = 0x0038;
const RECORD_SIZE: usize = 100;

fn blank_section(id: u16, save_index: u32) -> Vec<u8> {
    let mut section = vec![0u8; SECTION_SIZE];
    section[FOOTER_ID_OFFSET..FOOTER_ID_OFFSET + 2].copy_from_slice(&id.to_le_bytes());
    section[FOOTER_SIGNATURE_OFFSET..FOOTER_SIGNATURE_OFFSET + 4]
        .copy_from_slice(&SECTION_SIGNATURE.to_le_bytes());
    section[FOOTER_SAVE_INDEX_OFFSET..FOOTER_SAVE_INDEX_OFFSET + 4]
        .copy_from_slice(&save_index.to_le_bytes());
    section
}

/// One slot with sections laid out in id order (id 0 physically first).
fn build_slot(save_index: u32) -> Vec<u8> {
    (0..SECTION_COUNT as u16)
        .flat_map(|id| blank_section(id, save_index))
        .collect()
}

fn build_save(first_index: u32, second_index: u32) -> Vec<u8> {
    let mut save = build_slot(first_index);
    save.extend(build_slot(second_index));
    save
}

fn encoded_name(name: &str) -> Vec<u8> {
    let mut bytes = charmap::encode(name).expect("test names use mapped characters");
    bytes.push(0xFF);
    bytes
}

/// Write trainer fields into a section block holding id 0.
fn write_trainer(section: &mut [u8], name: &str, gender: u8, trainer_id: u16, secret_id: u16) {
    let name_bytes = encoded_name(name);
    section[..name_bytes.len()].copy_from_slice(&name_bytes);
    section[0x08] = gender;
    section[0x0A..0x0C].copy_from_slice(&trainer_id.to_le_bytes());
    section[0x0C..0x0E].copy_from_slice(&secret_id.to_le_bytes());
}

struct RecordFixture {
    personality: u32,
    ot_id: u32,
    nickname: &'static str,
    level: u8,
    species: u16,
    experience: u32,
    moves: [u16; 4],
    evs: [u8; 6],
}

/// Build the stored (encrypted) form of a roster record by hand.
///
/// `positions` lists the physical payload position of the Growth,
/// Attacks, EVs, and Misc substructures in that order, computed
/// independently of the library's permutation table.
fn encrypted_record(fixture: &RecordFixture, positions: [usize; 4]) -> [u8; RECORD_SIZE] {
    let mut plain = [0u8; RECORD_SIZE];
    plain[0..4].copy_from_slice(&fixture.personality.to_le_bytes());
    plain[4..8].copy_from_slice(&fixture.ot_id.to_le_bytes());

    let nickname = encoded_name(fixture.nickname);
    plain[8..8 + nickname.len()].copy_from_slice(&nickname);
    let ot_name = encoded_name("TEST");
    plain[20..20 + ot_name.len()].copy_from_slice(&ot_name);

    let growth = 32 + positions[0] * 12;
    plain[growth..growth + 2].copy_from_slice(&fixture.species.to_le_bytes());
    plain[growth + 4..growth + 8].copy_from_slice(&fixture.experience.to_le_bytes());

    let attacks = 32 + positions[1] * 12;
    for (i, m) in fixture.moves.iter().enumerate() {
        plain[attacks + i * 2..attacks + i * 2 + 2].copy_from_slice(&m.to_le_bytes());
    }

    let evs = 32 + positions[2] * 12;
    plain[evs..evs + 6].copy_from_slice(&fixture.evs);

    // Misc at positions[3] stays zeroed.

    plain[84] = fixture.level;
    plain[86..88].copy_from_slice(&30u16.to_le_bytes());
    plain[88..90].copy_from_slice(&35u16.to_le_bytes());
    for (i, stat) in [21u16, 20, 24, 18, 19].iter().enumerate() {
        plain[90 + i * 2..92 + i * 2].copy_from_slice(&stat.to_le_bytes());
    }

    let key = fixture.personality ^ fixture.ot_id;
    let mut stored = plain;
    for offset in (32..80).step_by(4) {
        let word = u32::from_le_bytes(plain[offset..offset + 4].try_into().unwrap()) ^ key;
        stored[offset..offset + 4].copy_from_slice(&word.to_le_bytes());
    }
    stored
}

fn write_party(section: &mut [u8], records: &[[u8; RECORD_SIZE]]) {
    section[PARTY_COUNT_OFFSET..PARTY_COUNT_OFFSET + 4]
        .copy_from_slice(&(records.len() as u32).to_le_bytes());
    for (i, record) in records.iter().enumerate() {
        let start = PARTY_OFFSET + i * RECORD_SIZE;
        section[start..start + RECORD_SIZE].copy_from_slice(record);
    }
}

#[test]
fn selects_slot_with_higher_save_index() {
    let mut save = build_save(5, 7);
    write_trainer(&mut save[..SECTION_SIZE], "ALPHA", 0, 1, 1);
    write_trainer(&mut save[SLOT_SIZE..SLOT_SIZE + SECTION_SIZE], "BRAVO", 0, 2, 2);

    let session = Engine::new().open_bytes(&save).expect("save should decode");
    assert_eq!(session.trainer().name, "BRAVO");
}

#[test]
fn equal_save_indices_select_the_first_slot() {
    let mut save = build_save(9, 9);
    write_trainer(&mut save[..SECTION_SIZE], "ALPHA", 0, 1, 1);
    write_trainer(&mut save[SLOT_SIZE..SLOT_SIZE + SECTION_SIZE], "BRAVO", 0, 2, 2);

    let session = Engine::new().open_bytes(&save).expect("save should decode");
    assert_eq!(session.trainer().name, "ALPHA");
}

#[test]
fn sections_are_found_by_id_not_physical_position() {
    // Lay the active slot out in reverse id order.
    let mut slot: Vec<u8> = (0..SECTION_COUNT as u16)
        .rev()
        .flat_map(|id| blank_section(id, 3))
        .collect();
    let trainer_start = (SECTION_COUNT - 1) * SECTION_SIZE;
    write_trainer(&mut slot[trainer_start..], "MAY", 1, 300, 400);

    let mut save = slot;
    save.extend(build_slot(0));

    let session = Engine::new().open_bytes(&save).expect("save should decode");
    assert_eq!(session.trainer().name, "MAY");
    assert_eq!(session.trainer().trainer_id, 300);
}

#[test]
fn missing_mandatory_section_is_fatal() {
    let mut save = build_save(4, 1);
    // Retag the active slot's party section so id 1 disappears.
    let footer = SECTION_SIZE + FOOTER_ID_OFFSET;
    save[footer..footer + 2].copy_from_slice(&99u16.to_le_bytes());

    let err = Engine::new()
        .decode_bytes(&save, RecordKind::Party)
        .expect_err("party decode should fail without section 1");
    assert_eq!(err.code, CoreErrorCode::SectionMissing);

    // Trainer-only decoding is unaffected by the missing party section.
    let trainer_only = Engine::new()
        .decode_bytes(&save, RecordKind::Trainer)
        .expect("trainer decode should still succeed");
    assert!(matches!(trainer_only.records, DecodedRecords::Trainer(_)));
}

#[test]
fn section_index_lookup_rejects_absent_ids() {
    let slot = build_slot(1);
    let index = SectionIndex::build(&slot);
    assert!(index.lookup(5).is_ok());

    let err = index.lookup(99).expect_err("id 99 is not in the slot");
    assert_eq!(err.code, CoreErrorCode::SectionMissing);
}

#[test]
fn unreadable_path_reports_io_error() {
    let err = Engine::new()
        .decode_path(Path::new("/nonexistent/definitely.sav"), RecordKind::Party)
        .expect_err("missing file should fail to read");
    assert_eq!(err.code, CoreErrorCode::Io);
}

#[test]
fn short_file_is_rejected_before_slot_logic() {
    let save = vec![0u8; MIN_FILE_SIZE - 1];
    let err = Engine::new()
        .open_bytes(&save)
        .expect_err("undersized file should be rejected");
    assert_eq!(err.code, CoreErrorCode::MalformedInput);
}

#[test]
fn signature_mismatch_warns_without_aborting() {
    let mut save = build_save(2, 1);
    let footer = 7 * SECTION_SIZE + FOOTER_SIGNATURE_OFFSET;
    save[footer..footer + 4].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());

    let session = Engine::new().open_bytes(&save).expect("decode should proceed");
    assert_eq!(session.warnings().len(), 1);
    assert_eq!(session.warnings()[0].section_id, 7);
    assert_eq!(session.warnings()[0].signature, 0xDEAD_BEEF);
}

#[test]
fn decodes_trainer_fields() {
    let mut save = build_save(1, 0);
    write_trainer(&mut save[..SECTION_SIZE], "GOLD", 0, 10792, 491);

    let session = Engine::new().open_bytes(&save).expect("save should decode");
    let trainer = session.trainer();
    assert_eq!(trainer.name, "GOLD");
    assert_eq!(trainer.gender.as_str(), "Male");
    assert_eq!(trainer.trainer_id, 10792);
    assert_eq!(trainer.secret_id, 491);

    let json = serde_json::to_value(trainer).expect("trainer record serializes");
    assert_eq!(json["name"], "GOLD");
    assert_eq!(json["gender"], "Male");
}

#[test]
fn decodes_party_through_two_known_permutations() {
    let mut save = build_save(1, 0);

    // personality 0 -> identity ordering: Growth, Attacks, EVs, Misc.
    let first = RecordFixture {
        personality: 0,
        ot_id: 0xA5A5_0001,
        nickname: "MUDKIP",
        level: 10,
        species: 258,
        experience: 135,
        moves: [33, 45, 0, 55],
        evs: [4, 0, 252, 0, 0, 0],
    };
    let first_bytes = encrypted_record(&first, [0, 1, 2, 3]);

    // personality 1 -> second lexicographic ordering [0, 1, 3, 2]:
    // Growth at 0, Attacks at 1, Misc at 2, EVs at 3.
    let second = RecordFixture {
        personality: 1,
        ot_id: 0x0000_F00D,
        nickname: "ZIGZAG",
        level: 7,
        species: 263,
        experience: 57,
        moves: [33, 28, 0, 0],
        evs: [0, 6, 0, 0, 0, 0],
    };
    let second_bytes = encrypted_record(&second, [0, 1, 3, 2]);

    write_party(
        &mut save[SECTION_SIZE..2 * SECTION_SIZE],
        &[first_bytes, second_bytes],
    );

    let session = Engine::new().open_bytes(&save).expect("save should decode");
    let party = session.party();
    assert_eq!(party.len(), 2);

    assert_eq!(party[0].nickname, "MUDKIP");
    assert_eq!(party[0].species_id, 258);
    assert_eq!(party[0].experience, 135);
    assert_eq!(party[0].moves, vec![33, 45, 55]);
    assert_eq!(party[0].evs, [4, 0, 252, 0, 0, 0]);
    assert_eq!(party[0].level, 10);
    assert_eq!(party[0].current_hp, 30);
    assert_eq!(party[0].max_hp, 35);
    assert_eq!(party[0].stats.attack, 21);
    assert_eq!(party[0].stats.sp_defense, 19);
    assert_eq!(party[0].nature, "Hardy");
    assert_eq!(party[0].held_item_id, None);

    assert_eq!(party[1].nickname, "ZIGZAG");
    assert_eq!(party[1].species_id, 263);
    assert_eq!(party[1].experience, 57);
    assert_eq!(party[1].moves, vec![33, 28]);
    assert_eq!(party[1].evs, [0, 6, 0, 0, 0, 0]);
    assert_eq!(party[1].nature, "Lonely");
    assert_eq!(party[1].ot_name, "TEST");
}

#[test]
fn declared_count_is_capped_at_six() {
    let mut save = build_save(1, 0);
    let fixture = RecordFixture {
        personality: 0,
        ot_id: 1,
        nickname: "A",
        level: 5,
        species: 1,
        experience: 1,
        moves: [1, 0, 0, 0],
        evs: [0; 6],
    };
    let record = encrypted_record(&fixture, [0, 1, 2, 3]);
    let section = &mut save[SECTION_SIZE..2 * SECTION_SIZE];
    section[PARTY_COUNT_OFFSET..PARTY_COUNT_OFFSET + 4].copy_from_slice(&40u32.to_le_bytes());
    for i in 0..6 {
        let start = PARTY_OFFSET + i * RECORD_SIZE;
        section[start..start + RECORD_SIZE].copy_from_slice(&record);
    }

    let session = Engine::new().open_bytes(&save).expect("save should decode");
    assert_eq!(session.party().len(), 6);
}

#[test]
fn decode_bytes_returns_only_the_requested_kind() {
    let mut save = build_save(1, 0);
    write_trainer(&mut save[..SECTION_SIZE], "RED", 0, 5, 6);

    let output = Engine::new()
        .decode_bytes(&save, RecordKind::Trainer)
        .expect("trainer decode should succeed");
    match output.records {
        DecodedRecords::Trainer(trainer) => assert_eq!(trainer.name, "RED"),
        DecodedRecords::Party(_) => panic!("expected trainer records"),
    }
    assert!(output.warnings.is_empty());
}
