//! Types for assembled profiles.

use serde::{Deserialize, Serialize};
use weton_base::{
    ArchetypeRecord, CharacterRecord, Dina, Hastawara, Pasaran, Sadwara, Symbol, Weton, Wuku,
};
use weton_time::{BirthDate, BirthTime, CalendarDayOrdinal};

/// Full Javanese calendar profile of a birth day.
///
/// Fully determined by the effective calendar-day ordinal; the date and
/// time fields record the input the ordinal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WetonProfile {
    /// Civil birth date as supplied.
    pub date: BirthDate,
    pub birth_time: Option<BirthTime>,
    /// Effective day the cycles were read from.
    pub ordinal: CalendarDayOrdinal,
    /// Whether the day-boundary policy moved the birth to the next day.
    pub day_shifted: bool,
    #[serde(flatten)]
    pub weton: Weton,
    pub neptu_dina: u8,
    pub neptu_pasaran: u8,
    pub total_neptu: u8,
    pub laku: &'static CharacterRecord,
    pub rakam: &'static CharacterRecord,
    /// Pancasuda remainder, 1..=7.
    pub pancasuda_remainder: u8,
    pub pancasuda: &'static CharacterRecord,
    pub sadwara: Sadwara,
    pub sadwara_character: &'static CharacterRecord,
    pub hastawara: Hastawara,
    pub hastawara_character: &'static CharacterRecord,
    pub day_character: &'static CharacterRecord,
    pub pasaran_character: &'static CharacterRecord,
    pub total_neptu_character: &'static CharacterRecord,
    pub archetype: &'static ArchetypeRecord,
}

impl WetonProfile {
    pub const fn dina(&self) -> Dina {
        self.weton.dina
    }

    pub const fn pasaran(&self) -> Pasaran {
        self.weton.pasaran
    }
}

/// Wuku profile of a birth day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WukuProfile {
    pub wuku: Wuku,
    /// 1-based wuku number (Sinta = 1).
    pub number: u8,
    pub guardian_deity: Symbol,
    pub tree: Symbol,
    pub bird: Symbol,
    pub character: &'static str,
    /// 1-based day within the wuku (1 = Minggu).
    pub day_in_wuku: u8,
    /// 1-based day within the 210-day pawukon.
    pub pawukon_day: u8,
}

/// A weton profile as a persistence layer may hand it back.
///
/// Every field is optional; conversion into a [`WetonProfile`] checks
/// that the required ones are present and agree with one another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredWeton {
    pub date: Option<BirthDate>,
    pub birth_time: Option<BirthTime>,
    pub ordinal: Option<CalendarDayOrdinal>,
    pub dina: Option<Dina>,
    pub pasaran: Option<Pasaran>,
    pub neptu_dina: Option<u8>,
    pub neptu_pasaran: Option<u8>,
    pub total_neptu: Option<u8>,
    /// Laku title.
    pub laku: Option<String>,
}

impl From<&WetonProfile> for StoredWeton {
    fn from(p: &WetonProfile) -> Self {
        Self {
            date: Some(p.date),
            birth_time: p.birth_time,
            ordinal: Some(p.ordinal),
            dina: Some(p.weton.dina),
            pasaran: Some(p.weton.pasaran),
            neptu_dina: Some(p.neptu_dina),
            neptu_pasaran: Some(p.neptu_pasaran),
            total_neptu: Some(p.total_neptu),
            laku: Some(p.laku.title.to_string()),
        }
    }
}
