//! Birth date normalization for the weton engine.
//!
//! This crate provides:
//! - `BirthDate` / `BirthTime`: validated proleptic Gregorian input
//! - `CalendarDayOrdinal`: the single day count all calendar cycles derive from
//! - `DayBoundary`: the policy deciding whether a birth time moves the day

pub mod boundary;
pub mod civil;
pub mod error;
pub mod ordinal;

pub use boundary::{
    DEFAULT_SUNSET_HOUR, DayBoundary, NormalizedDay, SUNSET_HOURS, normalize, normalize_str,
};
pub use civil::{BirthDate, BirthTime, MAX_YEAR, MIN_YEAR};
pub use error::DateError;
pub use ordinal::{CalendarDayOrdinal, MAX_ORDINAL, MIN_ORDINAL};
