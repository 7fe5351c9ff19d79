//! Dina: the seven-day week, each day carrying a neptu weight.
//!
//! Index 0 is Minggu. Ordinal 1 (0001-01-01) was a Monday, so the week
//! is in phase with the ordinal itself and needs no epoch offset.

use serde::{Deserialize, Serialize};
use weton_time::CalendarDayOrdinal;

/// Days in the Dina cycle.
pub const DINA_PERIOD: i64 = 7;

/// Epoch offset of the Dina cycle relative to ordinal zero.
pub const DINA_OFFSET: i64 = 0;

/// The seven days of the week (Minggu first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dina {
    Minggu,
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
}

/// All seven days in cycle order (0 = Minggu).
pub const ALL_DINAS: [Dina; 7] = [
    Dina::Minggu,
    Dina::Senin,
    Dina::Selasa,
    Dina::Rabu,
    Dina::Kamis,
    Dina::Jumat,
    Dina::Sabtu,
];

impl Dina {
    /// Common Indonesian/Javanese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minggu => "Minggu",
            Self::Senin => "Senin",
            Self::Selasa => "Selasa",
            Self::Rabu => "Rabu",
            Self::Kamis => "Kamis",
            Self::Jumat => "Jumat",
            Self::Sabtu => "Sabtu",
        }
    }

    /// Krama (high Javanese) name used in primbon texts.
    pub const fn krama_name(self) -> &'static str {
        match self {
            Self::Minggu => "Radite",
            Self::Senin => "Soma",
            Self::Selasa => "Anggara",
            Self::Rabu => "Buda",
            Self::Kamis => "Respati",
            Self::Jumat => "Sukra",
            Self::Sabtu => "Tumpak",
        }
    }

    /// 0-based index (Minggu=0 .. Sabtu=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Minggu => 0,
            Self::Senin => 1,
            Self::Selasa => 2,
            Self::Rabu => 3,
            Self::Kamis => 4,
            Self::Jumat => 5,
            Self::Sabtu => 6,
        }
    }

    /// Neptu weight of the day.
    pub const fn neptu(self) -> u8 {
        match self {
            Self::Minggu => 5,
            Self::Senin => 4,
            Self::Selasa => 3,
            Self::Rabu => 7,
            Self::Kamis => 8,
            Self::Jumat => 6,
            Self::Sabtu => 9,
        }
    }

    /// Day for a 0-based index, `None` if `index >= 7`.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_DINAS.get(index as usize).copied()
    }

    /// Look up a day by its common or krama name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_DINAS.into_iter().find(|d| {
            d.name().eq_ignore_ascii_case(name)
                || d.krama_name().eq_ignore_ascii_case(name)
                || (*d == Self::Minggu && name.eq_ignore_ascii_case("Ahad"))
        })
    }

    /// All seven days in order.
    pub const fn all() -> &'static [Dina; 7] {
        &ALL_DINAS
    }
}

/// Dina of a calendar-day ordinal.
pub fn dina_from_ordinal(ordinal: CalendarDayOrdinal) -> Dina {
    ALL_DINAS[ordinal.cycle_position(DINA_OFFSET, DINA_PERIOD) as usize]
}
