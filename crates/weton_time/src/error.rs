//! Error types for birth date and time normalization.

use thiserror::Error;

/// Errors from parsing or validating a birth date/time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// Input text is not a `YYYY-MM-DD` date.
    #[error("malformed date: {0}")]
    Malformed(String),
    /// Year outside the supported proleptic Gregorian range.
    #[error("year {year} outside supported range 1..=9999")]
    OutOfRange { year: i32 },
    /// Well-formed but nonexistent calendar date (e.g. Feb 30).
    #[error("nonexistent date: {year:04}-{month:02}-{day:02}")]
    NonexistentDate { year: i32, month: u32, day: u32 },
    /// Input text is not a valid `hh:mm[:ss]` time of day.
    #[error("malformed time: {0}")]
    MalformedTime(String),
    /// Sunset day boundary with an hour outside `12..=23`.
    #[error("sunset hour {hour} outside 12..=23")]
    InvalidSunsetHour { hour: u32 },
}
