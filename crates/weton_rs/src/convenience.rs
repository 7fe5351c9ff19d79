//! String-input entry points that apply the global configuration.

use weton_base::{TableError, Weton, Wuku};
use weton_engine::{JodohResult, Selapan, StoredWeton, WetonProfile, WukuProfile, search};
use weton_time::{BirthDate, BirthTime};

use crate::error::WetonError;
use crate::global::config;

fn parse_date(s: &str) -> Result<BirthDate, WetonError> {
    Ok(s.parse()?)
}

fn parse_time(s: Option<&str>) -> Result<Option<BirthTime>, WetonError> {
    Ok(s.map(str::parse).transpose()?)
}

fn parse_wuku(s: &str) -> Result<Wuku, WetonError> {
    Wuku::from_name(s).ok_or_else(|| {
        TableError::UnknownName {
            table: "wuku",
            name: s.to_string(),
        }
        .into()
    })
}

/// Weton profile of a `YYYY-MM-DD` birth date and optional `hh:mm[:ss]` time.
///
/// ```rust,ignore
/// let p = weton_rs::weton_profile("1945-08-17", None)?;
/// assert_eq!(p.weton.to_string(), "Jumat Legi");
/// ```
pub fn weton_profile(date: &str, time: Option<&str>) -> Result<WetonProfile, WetonError> {
    Ok(weton_engine::compute_weton_profile(
        parse_date(date)?,
        parse_time(time)?,
        config().day_boundary(),
    )?)
}

/// Wuku profile of a birth date and optional time.
pub fn wuku_profile(date: &str, time: Option<&str>) -> Result<WukuProfile, WetonError> {
    Ok(weton_engine::compute_wuku_profile(
        parse_date(date)?,
        parse_time(time)?,
        config().day_boundary(),
    )?)
}

/// Jodoh of two profiles under the configured day pairing.
pub fn jodoh(a: &WetonProfile, b: &WetonProfile) -> Result<JodohResult, WetonError> {
    Ok(weton_engine::compute_jodoh(a, b, config().day_pairing)?)
}

/// Jodoh of two birth dates; date `a` is person A.
pub fn jodoh_for_dates(a: &str, b: &str) -> Result<JodohResult, WetonError> {
    jodoh(&weton_profile(a, None)?, &weton_profile(b, None)?)
}

/// Jodoh of two stored profiles.
pub fn jodoh_stored(a: &StoredWeton, b: &StoredWeton) -> Result<JodohResult, WetonError> {
    Ok(weton_engine::compute_jodoh_stored(a, b, config().day_pairing)?)
}

/// First date after `after` falling on the named weton, e.g. `"Jumat Kliwon"`.
pub fn next_weton(after: &str, weton: &str) -> Result<BirthDate, WetonError> {
    let weton: Weton = weton.parse()?;
    Ok(search::next_weton(parse_date(after)?, weton)?)
}

/// Last date before `before` falling on the named weton.
pub fn prev_weton(before: &str, weton: &str) -> Result<BirthDate, WetonError> {
    let weton: Weton = weton.parse()?;
    Ok(search::prev_weton(parse_date(before)?, weton)?)
}

/// Dates in `start..=end` falling on the named weton.
pub fn weton_occurrences(
    start: &str,
    end: &str,
    weton: &str,
) -> Result<Vec<BirthDate>, WetonError> {
    let weton: Weton = weton.parse()?;
    Ok(search::weton_occurrences(
        parse_date(start)?,
        parse_date(end)?,
        weton,
    )?)
}

/// First day of the named wuku after `after`.
pub fn next_wuku_start(after: &str, wuku: &str) -> Result<BirthDate, WetonError> {
    Ok(search::next_wuku_start(parse_date(after)?, parse_wuku(wuku)?)?)
}

/// Next weton anniversary of a birth after `after`.
pub fn next_selapan(
    birth_date: &str,
    birth_time: Option<&str>,
    after: &str,
) -> Result<Selapan, WetonError> {
    let profile = weton_profile(birth_date, birth_time)?;
    Ok(search::next_selapan(&profile, parse_date(after)?)?)
}
