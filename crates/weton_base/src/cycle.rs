//! Cycle indexing: one calendar-day ordinal to every concurrent cycle.
//!
//! | Cycle     | Period | Offset | Anchor                                  |
//! |-----------|--------|--------|-----------------------------------------|
//! | Dina      | 7      | 0      | 0001-01-01 = Senin                      |
//! | Pasaran   | 5      | 0      | 1945-08-17 = Legi                       |
//! | Sadwara   | 6      | 5      | 2023-12-17 = Tungle                     |
//! | Hastawara | 8      | 1      | 2023-12-17 = Sri                        |
//! | Pawukon   | 210    | 119    | 2023-12-17 = Sinta day 1 (Minggu Pahing) |

use serde::{Deserialize, Serialize};
use tracing::trace;
use weton_time::CalendarDayOrdinal;

use crate::dina::{Dina, dina_from_ordinal};
use crate::hastawara::{Hastawara, hastawara_from_ordinal};
use crate::pasaran::{Pasaran, pasaran_from_ordinal};
use crate::sadwara::{Sadwara, sadwara_from_ordinal};
use crate::weton::Weton;
use crate::wuku::{WUKU_LENGTH, Wuku, pawukon_day, wuku_from_ordinal};

/// Position of one day in every calendar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CycleIndices {
    pub dina: Dina,
    pub pasaran: Pasaran,
    pub sadwara: Sadwara,
    pub hastawara: Hastawara,
    pub wuku: Wuku,
    /// 0-based day within the 210-day pawukon.
    pub pawukon_day: u8,
}

impl CycleIndices {
    pub const fn weton(&self) -> Weton {
        Weton::new(self.dina, self.pasaran)
    }

    /// 1-based day within the current wuku (1 = Minggu).
    pub const fn day_in_wuku(&self) -> u8 {
        self.pawukon_day % WUKU_LENGTH as u8 + 1
    }
}

/// Resolve all cycle positions of a calendar-day ordinal.
pub fn cycle_indices(ordinal: CalendarDayOrdinal) -> CycleIndices {
    let indices = CycleIndices {
        dina: dina_from_ordinal(ordinal),
        pasaran: pasaran_from_ordinal(ordinal),
        sadwara: sadwara_from_ordinal(ordinal),
        hastawara: hastawara_from_ordinal(ordinal),
        wuku: wuku_from_ordinal(ordinal),
        pawukon_day: pawukon_day(ordinal),
    };
    trace!(ordinal = ordinal.get(), ?indices, "cycle indices");
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_day() {
        let c = cycle_indices(CalendarDayOrdinal::new(738_871));
        assert_eq!(c.dina, Dina::Minggu);
        assert_eq!(c.pasaran, Pasaran::Pahing);
        assert_eq!(c.sadwara, Sadwara::Tungle);
        assert_eq!(c.hastawara, Hastawara::Sri);
        assert_eq!(c.wuku, Wuku::Sinta);
        assert_eq!(c.day_in_wuku(), 1);
    }

    #[test]
    fn wuku_days_align_with_week() {
        for k in 0..420 {
            let c = cycle_indices(CalendarDayOrdinal::new(738_871 + k));
            assert_eq!(c.day_in_wuku(), c.dina.index() + 1);
        }
    }

    #[test]
    fn selapan_and_pawukon_periodicity() {
        let base = CalendarDayOrdinal::new(731_000);
        for k in 0..210 {
            let a = cycle_indices(base.offset(k));
            let b = cycle_indices(base.offset(k + 35));
            assert_eq!(a.weton(), b.weton());
            let c = cycle_indices(base.offset(k + 210));
            assert_eq!(a.wuku, c.wuku);
            assert_eq!(a.pawukon_day, c.pawukon_day);
            assert_eq!(a.sadwara, c.sadwara);
        }
    }
}
