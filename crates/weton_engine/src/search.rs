//! Occurrence search over the selapan and pawukon cycles.
//!
//! Every cycle is a pure function of the ordinal, so finding the next
//! matching day is modular arithmetic rather than a scan.

use serde::Serialize;
use weton_base::{PAWUKON_PERIOD, SELAPAN_PERIOD, Weton, Wuku, pawukon_day, selapan_position};
use weton_time::BirthDate;

use crate::error::EngineError;
use crate::profile_types::WetonProfile;

/// Days from `from` forward to `to` within a cycle, in `1..=period`.
fn forward_gap(from: i64, to: i64, period: i64) -> i64 {
    match (to - from).rem_euclid(period) {
        0 => period,
        d => d,
    }
}

/// First date strictly after `after` falling on `weton`.
pub fn next_weton(after: BirthDate, weton: Weton) -> Result<BirthDate, EngineError> {
    let here = i64::from(selapan_position(after.ordinal()));
    let target = i64::from(weton.selapan_position());
    Ok(after.checked_add_days(forward_gap(here, target, SELAPAN_PERIOD))?)
}

/// Last date strictly before `before` falling on `weton`.
pub fn prev_weton(before: BirthDate, weton: Weton) -> Result<BirthDate, EngineError> {
    let here = i64::from(selapan_position(before.ordinal()));
    let target = i64::from(weton.selapan_position());
    Ok(before.checked_add_days(-forward_gap(target, here, SELAPAN_PERIOD))?)
}

/// All dates in `start..=end` falling on `weton`, in order.
pub fn weton_occurrences(
    start: BirthDate,
    end: BirthDate,
    weton: Weton,
) -> Result<Vec<BirthDate>, EngineError> {
    let mut out = Vec::new();
    if end < start {
        return Ok(out);
    }
    let mut date = if Weton::from_ordinal(start.ordinal()) == weton {
        start
    } else {
        next_weton(start, weton)?
    };
    while date <= end {
        out.push(date);
        match date.checked_add_days(SELAPAN_PERIOD) {
            Ok(d) => date = d,
            Err(_) => break,
        }
    }
    Ok(out)
}

/// First day of `wuku` strictly after `after`.
pub fn next_wuku_start(after: BirthDate, wuku: Wuku) -> Result<BirthDate, EngineError> {
    let here = i64::from(pawukon_day(after.ordinal()));
    let target = i64::from(wuku.index()) * 7;
    Ok(after.checked_add_days(forward_gap(here, target, PAWUKON_PERIOD))?)
}

/// A weton anniversary: the birth weton recurring after a whole number
/// of selapan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selapan {
    pub date: BirthDate,
    /// Selapan elapsed since the (effective) birth day.
    pub number: i64,
}

/// Next selapan of `profile` strictly after `after`.
pub fn next_selapan(profile: &WetonProfile, after: BirthDate) -> Result<Selapan, EngineError> {
    let date = next_weton(after, profile.weton)?;
    let days = profile.ordinal.days_until(date.ordinal());
    Ok(Selapan {
        date,
        number: days.div_euclid(SELAPAN_PERIOD),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::compute_weton_profile;
    use weton_base::{Dina, Pasaran};
    use weton_time::DayBoundary;

    fn d(s: &str) -> BirthDate {
        s.parse().unwrap()
    }

    #[test]
    fn next_weton_is_strictly_after() {
        let w = Weton::new(Dina::Jumat, Pasaran::Legi);
        assert_eq!(next_weton(d("1945-08-17"), w).unwrap(), d("1945-09-21"));
        assert_eq!(next_weton(d("1945-08-16"), w).unwrap(), d("1945-08-17"));
    }

    #[test]
    fn prev_weton_is_strictly_before() {
        let w = Weton::new(Dina::Jumat, Pasaran::Legi);
        assert_eq!(prev_weton(d("1945-08-17"), w).unwrap(), d("1945-07-13"));
        assert_eq!(prev_weton(d("1945-08-18"), w).unwrap(), d("1945-08-17"));
    }

    #[test]
    fn next_weton_matches_for_all_35() {
        let start = d("2024-01-01");
        for w in Weton::all() {
            let found = next_weton(start, w).unwrap();
            assert_eq!(Weton::from_ordinal(found.ordinal()), w);
            let gap = start.ordinal().days_until(found.ordinal());
            assert!((1..=35).contains(&gap));
        }
    }

    #[test]
    fn occurrences_in_a_year() {
        let w = Weton::new(Dina::Rabu, Pasaran::Kliwon);
        let all = weton_occurrences(d("2024-01-01"), d("2024-12-31"), w).unwrap();
        assert!(all.contains(&d("2024-02-28")));
        assert!(all.len() == 10 || all.len() == 11);
        for pair in all.windows(2) {
            assert_eq!(pair[0].ordinal().days_until(pair[1].ordinal()), 35);
        }
    }

    #[test]
    fn occurrences_empty_for_reversed_range() {
        let w = Weton::new(Dina::Rabu, Pasaran::Kliwon);
        assert!(
            weton_occurrences(d("2024-12-31"), d("2024-01-01"), w)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn galungan_wuku_start() {
        // Galungan 2024-02-28 is the Rabu of wuku Galungan; it began on the Minggu before.
        assert_eq!(
            next_wuku_start(d("2024-01-01"), Wuku::Galungan).unwrap(),
            d("2024-02-25")
        );
        assert_eq!(
            next_wuku_start(d("2024-02-25"), Wuku::Galungan).unwrap(),
            d("2024-09-22")
        );
    }

    #[test]
    fn selapan_numbering() {
        let p = compute_weton_profile(d("2024-01-01"), None, DayBoundary::Midnight).unwrap();
        let s = next_selapan(&p, d("2024-01-01")).unwrap();
        assert_eq!(s.date, d("2024-02-05"));
        assert_eq!(s.number, 1);
        let s = next_selapan(&p, d("2024-12-31")).unwrap();
        assert_eq!(Weton::from_ordinal(s.date.ordinal()), p.weton);
    }

    #[test]
    fn search_past_range_is_error() {
        let w = Weton::new(Dina::Jumat, Pasaran::Legi);
        assert!(next_weton(d("9999-12-31"), w).is_err());
    }
}
