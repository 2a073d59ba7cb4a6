//! Trainer-info extraction (section id 0).

use crate::charmap;
use crate::core_api::TrainerRecord;
use crate::gender::Gender;
use crate::reader;

pub const NAME_OFFSET: usize = 0x0000;
pub const NAME_LEN: usize = 7;
pub const GENDER_OFFSET: usize = 0x0008;
pub const TRAINER_ID_OFFSET: usize = 0x000A;
pub const SECRET_ID_OFFSET: usize = 0x000C;

pub fn extract_trainer(section: &[u8]) -> TrainerRecord {
    TrainerRecord {
        name: charmap::decode(&section[NAME_OFFSET..NAME_OFFSET + NAME_LEN]),
        gender: Gender::from_raw(section[GENDER_OFFSET]),
        trainer_id: reader::u16_le(section, TRAINER_ID_OFFSET),
        secret_id: reader::u16_le(section, SECRET_ID_OFFSET),
    }
}
