//! Calendar-day ordinals.
//!
//! Every cyclic index in the engine is a pure function of one integer:
//! the number of civil days since the start of the common era in the
//! proleptic Gregorian calendar (0001-01-01 = 1).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Ordinal of 0001-01-01, the first supported day.
pub const MIN_ORDINAL: i64 = 1;

/// Ordinal of 9999-12-31, the last supported day.
pub const MAX_ORDINAL: i64 = 3_652_059;

/// Days since the common era epoch, one value per civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDayOrdinal(i64);

impl CalendarDayOrdinal {
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// Ordinal of a chrono date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()))
    }

    /// Raw day count.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Back to a chrono date, `None` outside chrono's representable range.
    pub fn to_date(self) -> Option<NaiveDate> {
        i32::try_from(self.0)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }

    /// Whether this ordinal lies within `MIN_ORDINAL..=MAX_ORDINAL`.
    pub const fn is_supported(self) -> bool {
        self.0 >= MIN_ORDINAL && self.0 <= MAX_ORDINAL
    }

    /// Shift by a signed number of days.
    pub const fn offset(self, days: i64) -> Self {
        Self(self.0 + days)
    }

    /// Signed day count from `self` to `other`.
    pub const fn days_until(self, other: Self) -> i64 {
        other.0 - self.0
    }

    /// Position within a cycle of `period` days whose origin sits `offset`
    /// days before ordinal zero. Always in `[0, period)`.
    pub const fn cycle_position(self, offset: i64, period: i64) -> i64 {
        (self.0 + offset).rem_euclid(period)
    }
}
