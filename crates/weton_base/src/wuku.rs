//! Wuku: the thirty seven-day weeks of the 210-day pawukon.
//!
//! Every wuku starts on Minggu. The pawukon is anchored so that
//! 2023-12-17 (ordinal 738 871, Minggu Pahing) is day 1 of Sinta;
//! cross-check: Galungan 2024-02-28 falls on Rabu Kliwon of wuku Galungan.

use serde::{Deserialize, Serialize};
use weton_time::CalendarDayOrdinal;

/// Days in one pawukon round (30 wuku x 7 days).
pub const PAWUKON_PERIOD: i64 = 210;

/// Days in one wuku.
pub const WUKU_LENGTH: i64 = 7;

/// Epoch offset: `(738_871 + 119) mod 210 == 0`.
pub const PAWUKON_OFFSET: i64 = 119;

/// The thirty wuku in pawukon order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Wuku {
    Sinta,
    Landep,
    Wukir,
    Kurantil,
    Tolu,
    Gumbreg,
    Warigalit,
    Warigagung,
    Julungwangi,
    Sungsang,
    Galungan,
    Kuningan,
    Langkir,
    Mandasiya,
    Julungpujut,
    Pahang,
    Kuruwelut,
    Marakeh,
    Tambir,
    Medangkungan,
    Maktal,
    Wuye,
    Manahil,
    Prangbakat,
    Bala,
    Wugu,
    Wayang,
    Kulawu,
    Dukut,
    Watugunung,
}

/// All 30 wuku in order (index 0 = Sinta).
pub const ALL_WUKUS: [Wuku; 30] = [
    Wuku::Sinta,
    Wuku::Landep,
    Wuku::Wukir,
    Wuku::Kurantil,
    Wuku::Tolu,
    Wuku::Gumbreg,
    Wuku::Warigalit,
    Wuku::Warigagung,
    Wuku::Julungwangi,
    Wuku::Sungsang,
    Wuku::Galungan,
    Wuku::Kuningan,
    Wuku::Langkir,
    Wuku::Mandasiya,
    Wuku::Julungpujut,
    Wuku::Pahang,
    Wuku::Kuruwelut,
    Wuku::Marakeh,
    Wuku::Tambir,
    Wuku::Medangkungan,
    Wuku::Maktal,
    Wuku::Wuye,
    Wuku::Manahil,
    Wuku::Prangbakat,
    Wuku::Bala,
    Wuku::Wugu,
    Wuku::Wayang,
    Wuku::Kulawu,
    Wuku::Dukut,
    Wuku::Watugunung,
];

impl Wuku {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sinta => "Sinta",
            Self::Landep => "Landep",
            Self::Wukir => "Wukir",
            Self::Kurantil => "Kurantil",
            Self::Tolu => "Tolu",
            Self::Gumbreg => "Gumbreg",
            Self::Warigalit => "Warigalit",
            Self::Warigagung => "Warigagung",
            Self::Julungwangi => "Julungwangi",
            Self::Sungsang => "Sungsang",
            Self::Galungan => "Galungan",
            Self::Kuningan => "Kuningan",
            Self::Langkir => "Langkir",
            Self::Mandasiya => "Mandasiya",
            Self::Julungpujut => "Julungpujut",
            Self::Pahang => "Pahang",
            Self::Kuruwelut => "Kuruwelut",
            Self::Marakeh => "Marakeh",
            Self::Tambir => "Tambir",
            Self::Medangkungan => "Medangkungan",
            Self::Maktal => "Maktal",
            Self::Wuye => "Wuye",
            Self::Manahil => "Manahil",
            Self::Prangbakat => "Prangbakat",
            Self::Bala => "Bala",
            Self::Wugu => "Wugu",
            Self::Wayang => "Wayang",
            Self::Kulawu => "Kulawu",
            Self::Dukut => "Dukut",
            Self::Watugunung => "Watugunung",
        }
    }

    /// 0-based index (Sinta=0 .. Watugunung=29).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sinta => 0,
            Self::Landep => 1,
            Self::Wukir => 2,
            Self::Kurantil => 3,
            Self::Tolu => 4,
            Self::Gumbreg => 5,
            Self::Warigalit => 6,
            Self::Warigagung => 7,
            Self::Julungwangi => 8,
            Self::Sungsang => 9,
            Self::Galungan => 10,
            Self::Kuningan => 11,
            Self::Langkir => 12,
            Self::Mandasiya => 13,
            Self::Julungpujut => 14,
            Self::Pahang => 15,
            Self::Kuruwelut => 16,
            Self::Marakeh => 17,
            Self::Tambir => 18,
            Self::Medangkungan => 19,
            Self::Maktal => 20,
            Self::Wuye => 21,
            Self::Manahil => 22,
            Self::Prangbakat => 23,
            Self::Bala => 24,
            Self::Wugu => 25,
            Self::Wayang => 26,
            Self::Kulawu => 27,
            Self::Dukut => 28,
            Self::Watugunung => 29,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_WUKUS.get(index as usize).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_WUKUS
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(name))
    }

    pub const fn all() -> &'static [Wuku; 30] {
        &ALL_WUKUS
    }
}

/// 0-based day within the pawukon round, in `[0, 210)`.
pub fn pawukon_day(ordinal: CalendarDayOrdinal) -> u8 {
    ordinal.cycle_position(PAWUKON_OFFSET, PAWUKON_PERIOD) as u8
}

/// Wuku of a calendar-day ordinal.
pub fn wuku_from_ordinal(ordinal: CalendarDayOrdinal) -> Wuku {
    ALL_WUKUS[(i64::from(pawukon_day(ordinal)) / WUKU_LENGTH) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINTA_START: i64 = 738_871;

    #[test]
    fn indices_sequential() {
        for (i, w) in ALL_WUKUS.iter().enumerate() {
            assert_eq!(w.index() as usize, i);
            assert_eq!(Wuku::from_name(w.name()), Some(*w));
        }
    }

    #[test]
    fn anchor_is_sinta_day_one() {
        let o = CalendarDayOrdinal::new(SINTA_START);
        assert_eq!(pawukon_day(o), 0);
        assert_eq!(wuku_from_ordinal(o), Wuku::Sinta);
        assert_eq!(wuku_from_ordinal(o.offset(6)), Wuku::Sinta);
        assert_eq!(wuku_from_ordinal(o.offset(7)), Wuku::Landep);
        assert_eq!(wuku_from_ordinal(o.offset(-1)), Wuku::Watugunung);
    }

    #[test]
    fn galungan_2024() {
        // 2024-02-28 = 73 days after the anchor
        let o = CalendarDayOrdinal::new(SINTA_START + 73);
        assert_eq!(wuku_from_ordinal(o), Wuku::Galungan);
    }

    #[test]
    fn repeats_every_210_days() {
        let o = CalendarDayOrdinal::new(SINTA_START + 41);
        assert_eq!(wuku_from_ordinal(o), wuku_from_ordinal(o.offset(210)));
        assert_eq!(wuku_from_ordinal(o), wuku_from_ordinal(o.offset(-420)));
    }
}
