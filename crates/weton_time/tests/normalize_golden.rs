//! Golden dates for normalization and ordinal arithmetic.

use weton_time::{BirthDate, BirthTime, DateError, DayBoundary, normalize, normalize_str};

#[test]
fn reference_ordinals() {
    let cases = [
        ("0001-01-01", 1),
        ("1945-08-17", 710_260),
        ("1970-01-01", 719_163),
        ("2000-01-01", 730_120),
        ("2023-12-17", 738_871),
        ("9999-12-31", 3_652_059),
    ];
    for (s, expected) in cases {
        let n = normalize_str(s, None, DayBoundary::Midnight).unwrap();
        assert_eq!(n.ordinal.get(), expected, "{s}");
    }
}

#[test]
fn ordinal_date_roundtrip_over_a_leap_cycle() {
    let start = BirthDate::new(1996, 1, 1).unwrap();
    let base = start.ordinal();
    for k in 0..1461 {
        let d = start.checked_add_days(k).unwrap();
        assert_eq!(base.days_until(d.ordinal()), k);
        assert_eq!(BirthDate::from_ordinal(d.ordinal()).unwrap(), d);
    }
}

#[test]
fn invalid_inputs_yield_errors() {
    for s in ["not-a-date", "2025-02-30", "2025-13-01", "10000-01-01", "0000-01-01"] {
        let r = normalize_str(s, None, DayBoundary::Midnight);
        assert!(r.is_err(), "{s} accepted");
    }
    assert!(matches!(
        normalize_str("0000-01-01", None, DayBoundary::Midnight),
        Err(DateError::OutOfRange { year: 0 })
    ));
}

#[test]
fn serde_uses_iso_strings() {
    let d = BirthDate::new(1987, 6, 9).unwrap();
    let t = BirthTime::new(5, 30, 0).unwrap();
    let n = normalize(d, Some(t), DayBoundary::sunset()).unwrap();
    let json = serde_json::to_string(&n).unwrap();
    assert!(json.contains("\"1987-06-09\""), "{json}");
    assert!(json.contains("\"05:30:00\""), "{json}");
    let back: weton_time::NormalizedDay = serde_json::from_str(&json).unwrap();
    assert_eq!(back, n);
}

#[test]
fn serde_rejects_invalid_date_string() {
    let r: Result<BirthDate, _> = serde_json::from_str("\"2025-02-30\"");
    assert!(r.is_err());
}
