//! Convenience API under the default (uninitialized) configuration.

use weton_rs::*;

#[test]
fn defaults_apply_without_init() {
    assert!(!is_initialized());
    assert_eq!(current_config(), EngineConfig::default());
}

#[test]
fn profile_from_strings() {
    let p = weton_profile("1945-08-17", None).unwrap();
    assert_eq!(p.weton.to_string(), "Jumat Legi");
    assert_eq!(p.total_neptu, 11);
    // Midnight boundary: the time is kept but never moves the day.
    let late = weton_profile("1945-08-17", Some("23:59")).unwrap();
    assert_eq!(late.weton, p.weton);
    assert!(!late.day_shifted);
}

#[test]
fn invalid_inputs() {
    for (date, time) in [
        ("not-a-date", None),
        ("2025-02-30", None),
        ("2025-02-28", Some("25:00")),
    ] {
        let e = weton_profile(date, time).unwrap_err();
        assert!(e.is_input_error(), "{date} {time:?}: {e}");
    }
}

#[test]
fn wuku_from_strings() {
    let w = wuku_profile("2025-04-23", None).unwrap();
    assert_eq!(w.wuku, Wuku::Galungan);
}

#[test]
fn jodoh_from_dates() {
    let r = jodoh_for_dates("1945-08-17", "1987-06-09").unwrap();
    let a = weton_profile("1945-08-17", None).unwrap();
    let b = weton_profile("1987-06-09", None).unwrap();
    assert_eq!(r, jodoh(&a, &b).unwrap());
    assert_eq!(r.combined_neptu, a.total_neptu + b.total_neptu);
    assert_eq!(r.jodoh_day.pairing, DayPairing::Unordered);
}

#[test]
fn jodoh_rejects_incomplete_stored() {
    let a = StoredWeton::from(&weton_profile("1945-08-17", None).unwrap());
    let b = StoredWeton::default();
    let e = jodoh_stored(&a, &b).unwrap_err();
    assert_eq!(
        e,
        WetonError::Engine(EngineError::IncompleteProfile("missing date"))
    );
}

#[test]
fn search_by_name() {
    assert_eq!(
        next_weton("1945-08-16", "Jumat Legi").unwrap().to_string(),
        "1945-08-17"
    );
    assert_eq!(
        prev_weton("1945-08-18", "Jumat Legi").unwrap().to_string(),
        "1945-08-17"
    );
    assert_eq!(
        next_wuku_start("2024-01-01", "Galungan").unwrap().to_string(),
        "2024-02-25"
    );
    let all = weton_occurrences("2024-01-01", "2024-03-31", "Rabu Kliwon").unwrap();
    assert!(all.iter().any(|d| d.to_string() == "2024-02-28"));
    assert!(matches!(
        next_weton("2024-01-01", "Jumat Blabla"),
        Err(WetonError::Name(_))
    ));
    assert!(matches!(
        next_wuku_start("2024-01-01", "Nowhere"),
        Err(WetonError::Name(_))
    ));
}

#[test]
fn selapan_from_strings() {
    let s = next_selapan("2024-01-01", None, "2024-01-01").unwrap();
    assert_eq!(s.date.to_string(), "2024-02-05");
    assert_eq!(s.number, 1);
}

#[test]
fn outputs_serialize() {
    let p = weton_profile("2000-01-01", None).unwrap();
    let v = serde_json::to_value(p).unwrap();
    assert_eq!(v["dina"], "Sabtu");
    assert_eq!(v["pasaran"], "Legi");
    assert_eq!(v["date"], "2000-01-01");
}
