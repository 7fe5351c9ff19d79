//! Weton: the Dina + Pasaran identity of a day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weton_time::CalendarDayOrdinal;

use crate::dina::{ALL_DINAS, Dina, dina_from_ordinal};
use crate::error::TableError;
use crate::neptu::{Neptu, neptu};
use crate::pasaran::{ALL_PASARANS, Pasaran, pasaran_from_ordinal};

/// Length of the selapan: lcm(7, 5) days after which a weton repeats.
pub const SELAPAN_PERIOD: i64 = 35;

/// A Dina/Pasaran pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weton {
    pub dina: Dina,
    pub pasaran: Pasaran,
}

impl Weton {
    pub const fn new(dina: Dina, pasaran: Pasaran) -> Self {
        Self { dina, pasaran }
    }

    /// Weton of a calendar-day ordinal.
    pub fn from_ordinal(ordinal: CalendarDayOrdinal) -> Self {
        Self {
            dina: dina_from_ordinal(ordinal),
            pasaran: pasaran_from_ordinal(ordinal),
        }
    }

    pub const fn neptu(self) -> Neptu {
        neptu(self.dina, self.pasaran)
    }

    /// Row-major index into the 35 archetype records.
    pub const fn archetype_index(self) -> u8 {
        self.dina.index() * 5 + self.pasaran.index()
    }

    /// Day of the selapan (`0..35`) on which this weton falls.
    ///
    /// Both cycles have a zero epoch offset, so the selapan position `k`
    /// satisfies `k mod 7 == dina` and `k mod 5 == pasaran`.
    pub const fn selapan_position(self) -> u8 {
        // 15 = 1 (mod 7), 0 (mod 5); 21 = 0 (mod 7), 1 (mod 5)
        (self.dina.index() as u16 * 15 + self.pasaran.index() as u16 * 21) as u8 % 35
    }

    /// All 35 wetons in Dina-major order.
    pub fn all() -> impl Iterator<Item = Weton> {
        ALL_DINAS
            .into_iter()
            .flat_map(|d| ALL_PASARANS.into_iter().map(move |p| Weton::new(d, p)))
    }
}

/// 0-based day of the selapan for an ordinal.
pub fn selapan_position(ordinal: CalendarDayOrdinal) -> u8 {
    ordinal.cycle_position(0, SELAPAN_PERIOD) as u8
}

impl Display for Weton {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.dina.name(), self.pasaran.name())
    }
}

impl FromStr for Weton {
    type Err = TableError;

    /// Parse "Jumat Legi" (either name form, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TableError::UnknownName {
            table: "weton",
            name: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let (Some(d), Some(p), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(unknown());
        };
        let dina = Dina::from_name(d).ok_or_else(unknown)?;
        let pasaran = Pasaran::from_name(p).ok_or_else(unknown)?;
        Ok(Self::new(dina, pasaran))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_five_unique() {
        let all: Vec<_> = Weton::all().collect();
        assert_eq!(all.len(), 35);
        for (i, w) in all.iter().enumerate() {
            assert_eq!(w.archetype_index() as usize, i);
        }
    }

    #[test]
    fn selapan_position_inverts_ordinal() {
        for k in 0..35 {
            let o = CalendarDayOrdinal::new(710_255 + k);
            let w = Weton::from_ordinal(o);
            assert_eq!(w.selapan_position(), selapan_position(o), "{w}");
        }
    }

    #[test]
    fn display_and_parse() {
        let w = Weton::new(Dina::Jumat, Pasaran::Legi);
        assert_eq!(w.to_string(), "Jumat Legi");
        assert_eq!("jumat legi".parse::<Weton>().unwrap(), w);
        assert_eq!("Sukra Manis".parse::<Weton>().unwrap(), w);
        assert!("Jumat".parse::<Weton>().is_err());
        assert!("Jumat Legi Pon".parse::<Weton>().is_err());
        assert!("Friday Legi".parse::<Weton>().is_err());
    }

    #[test]
    fn independence_day() {
        let w = Weton::from_ordinal(CalendarDayOrdinal::new(710_260));
        assert_eq!(w, Weton::new(Dina::Jumat, Pasaran::Legi));
        assert_eq!(w.neptu().total, 11);
    }
}
