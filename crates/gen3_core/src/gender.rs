use std::fmt;

use serde::{Deserialize, Serialize};

/// Trainer gender tag. The save stores a single byte: zero is male,
/// anything else is female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const MALE_RAW: u8 = 0;

    pub fn from_raw(raw: u8) -> Self {
        if raw == Self::MALE_RAW {
            Self::Male
        } else {
            Self::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
