//! Pasaran: the five-day market week.
//!
//! Ordinal zero falls on Legi, so the cycle needs no epoch offset.
//! Reference: 1945-08-17 (ordinal 710 260) was Jumat Legi.

use serde::{Deserialize, Serialize};
use weton_time::CalendarDayOrdinal;

/// Days in the Pasaran cycle.
pub const PASARAN_PERIOD: i64 = 5;

/// Epoch offset of the Pasaran cycle relative to ordinal zero.
pub const PASARAN_OFFSET: i64 = 0;

/// The five market days (Legi first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pasaran {
    Legi,
    Pahing,
    Pon,
    Wage,
    Kliwon,
}

/// All five market days in cycle order (0 = Legi).
pub const ALL_PASARANS: [Pasaran; 5] = [
    Pasaran::Legi,
    Pasaran::Pahing,
    Pasaran::Pon,
    Pasaran::Wage,
    Pasaran::Kliwon,
];

impl Pasaran {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legi => "Legi",
            Self::Pahing => "Pahing",
            Self::Pon => "Pon",
            Self::Wage => "Wage",
            Self::Kliwon => "Kliwon",
        }
    }

    /// Alternate (krama) name.
    pub const fn krama_name(self) -> &'static str {
        match self {
            Self::Legi => "Manis",
            Self::Pahing => "Jenar",
            Self::Pon => "Palguna",
            Self::Wage => "Cemengan",
            Self::Kliwon => "Asih",
        }
    }

    /// 0-based index (Legi=0 .. Kliwon=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Legi => 0,
            Self::Pahing => 1,
            Self::Pon => 2,
            Self::Wage => 3,
            Self::Kliwon => 4,
        }
    }

    /// Neptu weight of the market day.
    pub const fn neptu(self) -> u8 {
        match self {
            Self::Legi => 5,
            Self::Pahing => 9,
            Self::Pon => 7,
            Self::Wage => 4,
            Self::Kliwon => 8,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_PASARANS.get(index as usize).copied()
    }

    /// Look up by name (either form), case-insensitively. Accepts "Paing".
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_PASARANS.into_iter().find(|p| {
            p.name().eq_ignore_ascii_case(name)
                || p.krama_name().eq_ignore_ascii_case(name)
                || (*p == Self::Pahing && name.eq_ignore_ascii_case("Paing"))
        })
    }

    pub const fn all() -> &'static [Pasaran; 5] {
        &ALL_PASARANS
    }
}

/// Pasaran of a calendar-day ordinal.
pub fn pasaran_from_ordinal(ordinal: CalendarDayOrdinal) -> Pasaran {
    ALL_PASARANS[ordinal.cycle_position(PASARAN_OFFSET, PASARAN_PERIOD) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_neptu() {
        let expected = [5, 9, 7, 4, 8];
        for (p, n) in ALL_PASARANS.iter().zip(expected) {
            assert_eq!(p.neptu(), n, "{}", p.name());
        }
    }

    #[test]
    fn independence_day_is_legi() {
        assert_eq!(
            pasaran_from_ordinal(CalendarDayOrdinal::new(710_260)),
            Pasaran::Legi
        );
    }

    #[test]
    fn names_roundtrip() {
        for p in ALL_PASARANS {
            assert_eq!(Pasaran::from_name(p.name()), Some(p));
            assert_eq!(Pasaran::from_name(p.krama_name()), Some(p));
        }
        assert_eq!(Pasaran::from_name("paing"), Some(Pasaran::Pahing));
    }
}
