//! Hastawara (padewan): the eight-day cycle of guardian deities.
//!
//! Read as a plain modulus of the ordinal, anchored so that 2023-12-17
//! (first day of wuku Sinta) is Sri. Eight does not divide 210, so the
//! phase against the pawukon drifts from one 210-day round to the next.

use serde::{Deserialize, Serialize};
use weton_time::CalendarDayOrdinal;

use crate::character::CharacterRecord;

pub const HASTAWARA_PERIOD: i64 = 8;

/// Epoch offset: `(738_871 + 1) mod 8 == 0`.
pub const HASTAWARA_OFFSET: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Hastawara {
    Sri,
    Indra,
    Guru,
    Yama,
    Rudra,
    Brahma,
    Kala,
    Uma,
}

pub const ALL_HASTAWARAS: [Hastawara; 8] = [
    Hastawara::Sri,
    Hastawara::Indra,
    Hastawara::Guru,
    Hastawara::Yama,
    Hastawara::Rudra,
    Hastawara::Brahma,
    Hastawara::Kala,
    Hastawara::Uma,
];

const HASTAWARA_CHARACTERS: [CharacterRecord; 8] = [
    CharacterRecord {
        title: "Prosperity",
        description: "Blessed with sustenance; careful with wealth and generous at the table.",
    },
    CharacterRecord {
        title: "Glory",
        description: "Drawn to honor and position; carries authority naturally.",
    },
    CharacterRecord {
        title: "Wisdom",
        description: "Learns quickly and teaches gladly; respected for sound judgment.",
    },
    CharacterRecord {
        title: "Justice",
        description: "Firm sense of right and wrong; can be unforgiving of lapses.",
    },
    CharacterRecord {
        title: "Storm",
        description: "Fierce energy that protects when directed and wounds when not.",
    },
    CharacterRecord {
        title: "Creation",
        description: "Inventive and ardent; starts many things and finishes the important ones.",
    },
    CharacterRecord {
        title: "Time",
        description: "Senses danger early; must guard against pessimism.",
    },
    CharacterRecord {
        title: "Devotion",
        description: "Nurturing and faithful; the steady heart of a household.",
    },
];

impl Hastawara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sri => "Sri",
            Self::Indra => "Indra",
            Self::Guru => "Guru",
            Self::Yama => "Yama",
            Self::Rudra => "Rudra",
            Self::Brahma => "Brahma",
            Self::Kala => "Kala",
            Self::Uma => "Uma",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Sri => 0,
            Self::Indra => 1,
            Self::Guru => 2,
            Self::Yama => 3,
            Self::Rudra => 4,
            Self::Brahma => 5,
            Self::Kala => 6,
            Self::Uma => 7,
        }
    }

    pub fn character(self) -> &'static CharacterRecord {
        &HASTAWARA_CHARACTERS[self.index() as usize]
    }
}

/// Hastawara of a calendar-day ordinal.
pub fn hastawara_from_ordinal(ordinal: CalendarDayOrdinal) -> Hastawara {
    ALL_HASTAWARAS[ordinal.cycle_position(HASTAWARA_OFFSET, HASTAWARA_PERIOD) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinta_start_is_sri() {
        assert_eq!(
            hastawara_from_ordinal(CalendarDayOrdinal::new(738_871)),
            Hastawara::Sri
        );
    }

    #[test]
    fn cycle_of_eight() {
        let o = CalendarDayOrdinal::new(738_871);
        for (k, h) in ALL_HASTAWARAS.iter().enumerate() {
            assert_eq!(hastawara_from_ordinal(o.offset(k as i64)), *h);
            assert_eq!(hastawara_from_ordinal(o.offset(k as i64 + 8)), *h);
        }
    }
}
