//! Validated civil birth date and time of day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::ordinal::CalendarDayOrdinal;

/// Earliest supported year (proleptic Gregorian).
pub const MIN_YEAR: i32 = 1;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// A Gregorian calendar date inside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate {
    date: NaiveDate,
}

impl BirthDate {
    /// Validate a year/month/day triple.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::OutOfRange { year });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(DateError::NonexistentDate { year, month, day })
    }

    /// Wrap a chrono date, enforcing the supported year range.
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Date for a calendar-day ordinal.
    pub fn from_ordinal(ordinal: CalendarDayOrdinal) -> Result<Self, DateError> {
        let date = ordinal.to_date().ok_or(DateError::OutOfRange {
            year: if ordinal.get() < 1 { 0 } else { MAX_YEAR + 1 },
        })?;
        Self::from_naive(date)
    }

    pub fn year(self) -> i32 {
        self.date.year()
    }

    pub fn month(self) -> u32 {
        self.date.month()
    }

    pub fn day(self) -> u32 {
        self.date.day()
    }

    pub fn as_naive(self) -> NaiveDate {
        self.date
    }

    /// Calendar-day ordinal of this civil date.
    pub fn ordinal(self) -> CalendarDayOrdinal {
        CalendarDayOrdinal::from_date(self.date)
    }

    /// Shift by a signed number of days, staying inside the supported range.
    pub fn checked_add_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_ordinal(self.ordinal().offset(days))
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    /// Parse `YYYY-MM-DD` (four-digit year, one- or two-digit month/day).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || DateError::Malformed(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if y.len() != 4 || !(1..=2).contains(&m.len()) || !(1..=2).contains(&d.len()) {
            return Err(malformed());
        }
        if ![y, m, d].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
            return Err(malformed());
        }
        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u32 = m.parse().map_err(|_| malformed())?;
        let day: u32 = d.parse().map_err(|_| malformed())?;
        Self::new(year, month, day)
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl TryFrom<String> for BirthDate {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BirthDate> for String {
    fn from(d: BirthDate) -> Self {
        d.to_string()
    }
}

/// Local time of birth, whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthTime {
    time: NaiveTime,
}

impl BirthTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, DateError> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(|time| Self { time })
            .ok_or_else(|| {
                DateError::MalformedTime(format!("{hour:02}:{minute:02}:{second:02} out of range"))
            })
    }

    pub fn hour(self) -> u32 {
        self.time.hour()
    }

    pub fn minute(self) -> u32 {
        self.time.minute()
    }

    pub fn second(self) -> u32 {
        self.time.second()
    }

    pub fn as_naive(self) -> NaiveTime {
        self.time
    }
}

impl FromStr for BirthTime {
    type Err = DateError;

    /// Parse `hh:mm` or `hh:mm:ss` (24-hour clock).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || DateError::MalformedTime(format!("expected hh:mm[:ss], got {s:?}"));
        let parts: Vec<&str> = s.split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(malformed());
        }
        if parts
            .iter()
            .any(|p| p.len() != 2 || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed());
        }
        let hour: u32 = parts[0].parse().map_err(|_| malformed())?;
        let minute: u32 = parts[1].parse().map_err(|_| malformed())?;
        let second: u32 = match parts.get(2) {
            Some(p) => p.parse().map_err(|_| malformed())?,
            None => 0,
        };
        Self::new(hour, minute, second)
    }
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl TryFrom<String> for BirthTime {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BirthTime> for String {
    fn from(t: BirthTime) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_iso_date() {
        let d: BirthDate = "1945-08-17".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1945, 8, 17));
        assert_eq!(d.to_string(), "1945-08-17");
    }

    #[test]
    fn parse_single_digit_month_day() {
        let d: BirthDate = "2000-1-5".parse().unwrap();
        assert_eq!(d.to_string(), "2000-01-05");
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            "not-a-date".parse::<BirthDate>(),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!("".parse::<BirthDate>(), Err(DateError::Malformed(_))));
        assert!(matches!(
            "2024-01-01-01".parse::<BirthDate>(),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!(
            "24-01-01".parse::<BirthDate>(),
            Err(DateError::Malformed(_))
        ));
        assert!(matches!(
            "2024-+1-01".parse::<BirthDate>(),
            Err(DateError::Malformed(_))
        ));
    }

    #[test]
    fn reject_feb_30() {
        assert_eq!(
            "2025-02-30".parse::<BirthDate>(),
            Err(DateError::NonexistentDate {
                year: 2025,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        assert!(BirthDate::new(2024, 2, 29).is_ok());
        assert!(BirthDate::new(1900, 2, 29).is_err());
        assert!(BirthDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn reject_year_zero() {
        assert_eq!(
            BirthDate::new(0, 6, 1),
            Err(DateError::OutOfRange { year: 0 })
        );
    }

    #[test]
    fn add_days_crosses_month() {
        let d = BirthDate::new(2024, 1, 31).unwrap();
        assert_eq!(d.checked_add_days(1).unwrap().to_string(), "2024-02-01");
        assert_eq!(d.checked_add_days(-31).unwrap().to_string(), "2023-12-31");
    }

    #[test]
    fn add_days_past_range_fails() {
        let d = BirthDate::new(9999, 12, 31).unwrap();
        assert!(d.checked_add_days(1).is_err());
    }

    #[test]
    fn parse_time_variants() {
        let t: BirthTime = "07:05".parse().unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 5, 0));
        let t: BirthTime = "23:59:59".parse().unwrap();
        assert_eq!(t.to_string(), "23:59:59");
    }

    #[test]
    fn reject_bad_time() {
        for s in ["24:00", "12:60", "7:05", "12", "12:00:00:00", "ab:cd"] {
            assert!(
                matches!(s.parse::<BirthTime>(), Err(DateError::MalformedTime(_))),
                "accepted {s}"
            );
        }
    }
}
