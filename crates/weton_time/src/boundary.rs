//! Day-boundary policy and date normalization.
//!
//! A civil date is midnight-to-midnight. The Javanese day traditionally
//! begins at sunset, so a birth in the evening may belong to the next
//! weton. Which convention applies is a caller decision expressed through
//! [`DayBoundary`]; the default never lets the time of birth move the day.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::civil::{BirthDate, BirthTime};
use crate::error::DateError;
use crate::ordinal::CalendarDayOrdinal;

/// Hour used by [`DayBoundary::sunset`].
pub const DEFAULT_SUNSET_HOUR: u32 = 18;

/// Accepted range for a sunset boundary hour.
pub const SUNSET_HOURS: RangeInclusive<u32> = 12..=23;

/// Where one calendar day ends and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayBoundary {
    /// Civil midnight; birth time never changes the day.
    #[default]
    Midnight,
    /// Births at or after `hour:00` local time count as the next day.
    Sunset { hour: u32 },
}

impl DayBoundary {
    /// Sunset boundary at [`DEFAULT_SUNSET_HOUR`].
    pub const fn sunset() -> Self {
        Self::Sunset {
            hour: DEFAULT_SUNSET_HOUR,
        }
    }

    /// Sunset boundary at `hour`, which must lie in [`SUNSET_HOURS`].
    pub fn sunset_at(hour: u32) -> Result<Self, DateError> {
        let boundary = Self::Sunset { hour };
        boundary.validate()?;
        Ok(boundary)
    }

    pub fn validate(self) -> Result<(), DateError> {
        match self {
            Self::Sunset { hour } if !SUNSET_HOURS.contains(&hour) => {
                Err(DateError::InvalidSunsetHour { hour })
            }
            _ => Ok(()),
        }
    }

    /// Whether a birth at `time` belongs to the following day.
    pub fn rolls_forward(self, time: BirthTime) -> bool {
        match self {
            Self::Midnight => false,
            Self::Sunset { hour } => time.hour() >= hour,
        }
    }
}

/// A birth moment reduced to the day the calendar cycles are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedDay {
    /// Civil date as supplied.
    pub date: BirthDate,
    /// Time of birth, if known.
    pub time: Option<BirthTime>,
    /// Ordinal of the effective day (after any boundary shift).
    pub ordinal: CalendarDayOrdinal,
    /// Whether the boundary policy moved the day forward.
    pub shifted: bool,
}

/// Reduce a civil date and optional time to one calendar-day ordinal.
pub fn normalize(
    date: BirthDate,
    time: Option<BirthTime>,
    boundary: DayBoundary,
) -> Result<NormalizedDay, DateError> {
    boundary.validate()?;
    let shifted = time.is_some_and(|t| boundary.rolls_forward(t));
    let mut ordinal = date.ordinal();
    if shifted {
        ordinal = ordinal.offset(1);
        if !ordinal.is_supported() {
            return Err(DateError::OutOfRange {
                year: date.year() + 1,
            });
        }
        debug!(%date, ?boundary, "birth time rolls into the next day");
    }
    debug!(%date, ordinal = ordinal.get(), "normalized birth date");
    Ok(NormalizedDay {
        date,
        time,
        ordinal,
        shifted,
    })
}

/// Parse and normalize textual `YYYY-MM-DD` / `hh:mm[:ss]` input.
pub fn normalize_str(
    date: &str,
    time: Option<&str>,
    boundary: DayBoundary,
) -> Result<NormalizedDay, DateError> {
    let date: BirthDate = date.parse()?;
    let time = time.map(str::parse::<BirthTime>).transpose()?;
    normalize(date, time, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> BirthDate {
        s.parse().unwrap()
    }

    fn t(s: &str) -> BirthTime {
        s.parse().unwrap()
    }

    #[test]
    fn midnight_ignores_time() {
        let plain = normalize(d("2024-02-28"), None, DayBoundary::Midnight).unwrap();
        let late = normalize(d("2024-02-28"), Some(t("23:30")), DayBoundary::Midnight).unwrap();
        assert_eq!(plain.ordinal, late.ordinal);
        assert!(!late.shifted);
    }

    #[test]
    fn sunset_rolls_evening_forward() {
        let base = d("2024-02-28").ordinal();
        let evening = normalize(d("2024-02-28"), Some(t("18:00")), DayBoundary::sunset()).unwrap();
        assert!(evening.shifted);
        assert_eq!(evening.ordinal, base.offset(1));
        assert_eq!(evening.date, d("2024-02-28"));
    }

    #[test]
    fn sunset_keeps_afternoon() {
        let r = normalize(d("2024-02-28"), Some(t("17:59:59")), DayBoundary::sunset()).unwrap();
        assert!(!r.shifted);
    }

    #[test]
    fn sunset_without_time_keeps_day() {
        let r = normalize(d("2024-02-28"), None, DayBoundary::sunset()).unwrap();
        assert!(!r.shifted);
    }

    #[test]
    fn shift_past_last_day_is_out_of_range() {
        let r = normalize(d("9999-12-31"), Some(t("20:00")), DayBoundary::sunset());
        assert!(matches!(r, Err(DateError::OutOfRange { .. })));
    }

    #[test]
    fn sunset_hour_must_be_evening() {
        for hour in [0, 11, 24, 99] {
            assert_eq!(
                normalize(d("2024-02-28"), Some(t("00:05")), DayBoundary::Sunset { hour }),
                Err(DateError::InvalidSunsetHour { hour })
            );
            assert!(DayBoundary::sunset_at(hour).is_err());
        }
        assert_eq!(
            DayBoundary::sunset_at(12).unwrap(),
            DayBoundary::Sunset { hour: 12 }
        );
        let r = normalize(d("2024-02-28"), Some(t("23:00")), DayBoundary::sunset_at(23).unwrap());
        assert!(r.unwrap().shifted);
    }

    #[test]
    fn normalize_str_propagates_errors() {
        assert!(matches!(
            normalize_str("not-a-date", None, DayBoundary::Midnight),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!(
            normalize_str("2025-02-30", None, DayBoundary::Midnight),
            Err(DateError::NonexistentDate { .. })
        ));
        assert!(matches!(
            normalize_str("2025-02-10", Some("25:00"), DayBoundary::Midnight),
            Err(DateError::MalformedTime(_))
        ));
    }
}
