//! Sadwara (paringkelan): the six-day cycle.
//!
//! Anchored so that 2023-12-17, the first day of wuku Sinta, is Tungle.
//! Six divides 210, so every Sinta Minggu is Tungle.

use serde::{Deserialize, Serialize};
use weton_time::CalendarDayOrdinal;

use crate::character::CharacterRecord;

/// Days in the Sadwara cycle.
pub const SADWARA_PERIOD: i64 = 6;

/// Epoch offset: `(738_871 + 5) mod 6 == 0`.
pub const SADWARA_OFFSET: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sadwara {
    Tungle,
    Aryang,
    Wurukung,
    Paningron,
    Uwas,
    Mawulu,
}

pub const ALL_SADWARAS: [Sadwara; 6] = [
    Sadwara::Tungle,
    Sadwara::Aryang,
    Sadwara::Wurukung,
    Sadwara::Paningron,
    Sadwara::Uwas,
    Sadwara::Mawulu,
];

const SADWARA_CHARACTERS: [CharacterRecord; 6] = [
    CharacterRecord {
        title: "Leaf",
        description: "Shelters others; calm, sociable, and slow to anger.",
    },
    CharacterRecord {
        title: "Human",
        description: "Fond of company and conversation; a natural go-between.",
    },
    CharacterRecord {
        title: "Beast",
        description: "Strong instincts and appetite for work; guards what is theirs.",
    },
    CharacterRecord {
        title: "Fish",
        description: "Moves easily through changing circumstances; prizes freedom.",
    },
    CharacterRecord {
        title: "Bird",
        description: "Light-hearted and expressive; carries news and cheer.",
    },
    CharacterRecord {
        title: "Seed",
        description: "Quietly productive; what is planted now bears fruit later.",
    },
];

impl Sadwara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tungle => "Tungle",
            Self::Aryang => "Aryang",
            Self::Wurukung => "Wurukung",
            Self::Paningron => "Paningron",
            Self::Uwas => "Uwas",
            Self::Mawulu => "Mawulu",
        }
    }

    /// 0-based index (Tungle=0 .. Mawulu=5).
    pub const fn index(self) -> u8 {
        match self {
            Self::Tungle => 0,
            Self::Aryang => 1,
            Self::Wurukung => 2,
            Self::Paningron => 3,
            Self::Uwas => 4,
            Self::Mawulu => 5,
        }
    }

    pub fn character(self) -> &'static CharacterRecord {
        &SADWARA_CHARACTERS[self.index() as usize]
    }
}

/// Sadwara of a calendar-day ordinal.
pub fn sadwara_from_ordinal(ordinal: CalendarDayOrdinal) -> Sadwara {
    ALL_SADWARAS[ordinal.cycle_position(SADWARA_OFFSET, SADWARA_PERIOD) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SADWARAS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert!(!s.character().title.is_empty());
        }
    }

    #[test]
    fn sinta_start_is_tungle() {
        let o = CalendarDayOrdinal::new(738_871);
        assert_eq!(sadwara_from_ordinal(o), Sadwara::Tungle);
        assert_eq!(sadwara_from_ordinal(o.offset(7)), Sadwara::Aryang);
    }
}
