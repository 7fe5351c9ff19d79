//! Jodoh: compatibility between two weton profiles.
//!
//! Five independent methods, none depending on another's result:
//! - combined total neptu modulo 4, 5, 7 and 8, each read from a 1-based
//!   table (remainder zero selects the last entry)
//! - each person's own total neptu modulo 9, read as a pair
//! - the combination of the two birth day names

use tracing::debug;
use weton_base::{Dina, MAX_TOTAL_NEPTU, MIN_TOTAL_NEPTU, pancasuda, wrapped_remainder};

use crate::error::EngineError;
use crate::jodoh_data::{
    JODOH_DAYS, JODOH_DAYS_ORDERED, JODOH4, JODOH5, JODOH8, JODOH9_PAIRS, triangle_index,
};
use crate::jodoh_types::{DayPairing, Jodoh9, JodohDay, JodohOutcome, JodohResult};
use crate::profile_types::{StoredWeton, WetonProfile};

/// Check that a profile's neptu fields are internally consistent.
fn check_profile(p: &WetonProfile) -> Result<(), EngineError> {
    let neptu = p.weton.neptu();
    if p.neptu_dina != neptu.dina || p.neptu_pasaran != neptu.pasaran {
        return Err(EngineError::IncompleteProfile(
            "neptu weights do not match weton",
        ));
    }
    if p.total_neptu != p.neptu_dina + p.neptu_pasaran
        || !(MIN_TOTAL_NEPTU..=MAX_TOTAL_NEPTU).contains(&p.total_neptu)
    {
        return Err(EngineError::IncompleteProfile(
            "total_neptu is not the sum of its weights",
        ));
    }
    Ok(())
}

/// Combined neptu modulo 4.
pub fn jodoh4(combined: u32) -> JodohOutcome {
    let r = wrapped_remainder(combined, 4);
    JodohOutcome::new(4, r as u8, &JODOH4[(r - 1) as usize])
}

/// Combined neptu modulo 5.
pub fn jodoh5(combined: u32) -> JodohOutcome {
    let r = wrapped_remainder(combined, 5);
    JodohOutcome::new(5, r as u8, &JODOH5[(r - 1) as usize])
}

/// Combined neptu modulo 7, read through the pancasuda table.
pub fn jodoh7(combined: u32) -> JodohOutcome {
    let (r, record) = pancasuda(combined);
    JodohOutcome::new(7, r, record)
}

/// Combined neptu modulo 8.
pub fn jodoh8(combined: u32) -> JodohOutcome {
    let r = wrapped_remainder(combined, 8);
    JodohOutcome::new(8, r as u8, &JODOH8[(r - 1) as usize])
}

/// Each total neptu modulo 9 (1..=9), read as an unordered pair.
pub fn jodoh9(total_a: u8, total_b: u8) -> Jodoh9 {
    let ra = wrapped_remainder(u32::from(total_a), 9) as usize;
    let rb = wrapped_remainder(u32::from(total_b), 9) as usize;
    let record = &JODOH9_PAIRS[triangle_index(ra.min(rb) - 1, ra.max(rb) - 1, 9)];
    Jodoh9 {
        remainder_a: ra as u8,
        remainder_b: rb as u8,
        label: record.title,
        description: record.description,
    }
}

/// Reading for the two birth day names.
///
/// `Unordered` reads the symmetric table with the days sorted into week
/// order. `Ordered` keys on (A, B) as given, so swapping the two people
/// can change the reading.
pub fn jodoh_day(a: Dina, b: Dina, pairing: DayPairing) -> JodohDay {
    let (first, second, record) = match pairing {
        DayPairing::Ordered => (
            a,
            b,
            &JODOH_DAYS_ORDERED[usize::from(a.index()) * 7 + usize::from(b.index())],
        ),
        DayPairing::Unordered => {
            let (lo, hi) = (a.min(b), a.max(b));
            let i = triangle_index(usize::from(lo.index()), usize::from(hi.index()), 7);
            (lo, hi, &JODOH_DAYS[i])
        }
    };
    JodohDay {
        pairing,
        first,
        second,
        label: record.title,
        description: record.description,
    }
}

/// Compute every jodoh method for person A and person B.
///
/// Fails with `IncompleteProfile` if either profile's neptu fields are
/// inconsistent; there is no partial result.
pub fn compute_jodoh(
    a: &WetonProfile,
    b: &WetonProfile,
    pairing: DayPairing,
) -> Result<JodohResult, EngineError> {
    check_profile(a)?;
    check_profile(b)?;
    let combined = a.total_neptu + b.total_neptu;
    let sum = u32::from(combined);
    let result = JodohResult {
        combined_neptu: combined,
        jodoh4: jodoh4(sum),
        jodoh5: jodoh5(sum),
        jodoh7: jodoh7(sum),
        jodoh8: jodoh8(sum),
        jodoh9: jodoh9(a.total_neptu, b.total_neptu),
        jodoh_day: jodoh_day(a.dina(), b.dina(), pairing),
    };
    debug!(
        a = %a.weton,
        b = %b.weton,
        combined,
        jodoh8 = result.jodoh8.label,
        "computed jodoh"
    );
    Ok(result)
}

/// Compute jodoh from stored profiles, rejecting incomplete ones.
pub fn compute_jodoh_stored(
    a: &StoredWeton,
    b: &StoredWeton,
    pairing: DayPairing,
) -> Result<JodohResult, EngineError> {
    let a = WetonProfile::try_from(a)?;
    let b = WetonProfile::try_from(b)?;
    compute_jodoh(&a, &b, pairing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::compute_weton_profile;
    use weton_base::ALL_DINAS;
    use weton_time::DayBoundary;

    fn profile(s: &str) -> WetonProfile {
        compute_weton_profile(s.parse().unwrap(), None, DayBoundary::Midnight).unwrap()
    }

    #[test]
    fn sum_17_regression() {
        assert_eq!((jodoh4(17).remainder, jodoh4(17).label), (1, "Gentho"));
        assert_eq!((jodoh5(17).remainder, jodoh5(17).label), (2, "Lungguh"));
        assert_eq!((jodoh7(17).remainder, jodoh7(17).label), (3, "Satria Wibawa"));
        assert_eq!((jodoh8(17).remainder, jodoh8(17).label), (1, "Pegat"));
    }

    #[test]
    fn remainder_zero_is_last_entry() {
        assert_eq!(jodoh4(16).label, "Punggel");
        assert_eq!(jodoh5(20).label, "Pati");
        assert_eq!(jodoh7(21).label, "Lebu Katiup Angin");
        assert_eq!(jodoh8(24).label, "Pesthi");
        assert_eq!(jodoh8(24).remainder, 8);
    }

    #[test]
    fn jodoh9_per_person() {
        let j = jodoh9(9, 8);
        assert_eq!((j.remainder_a, j.remainder_b), (9, 8));
        assert_eq!(j.label, "Banyak celaka");
        let j = jodoh9(16, 18);
        assert_eq!((j.remainder_a, j.remainder_b), (7, 9));
        assert_eq!(j.label, "Langgeng");
    }

    #[test]
    fn jodoh9_symmetric_reading() {
        for x in 7..=18 {
            for y in 7..=18 {
                assert_eq!(jodoh9(x, y).label, jodoh9(y, x).label);
            }
        }
    }

    #[test]
    fn day_pairing_modes() {
        let u1 = jodoh_day(Dina::Jumat, Dina::Selasa, DayPairing::Unordered);
        let u2 = jodoh_day(Dina::Selasa, Dina::Jumat, DayPairing::Unordered);
        assert_eq!(u1, u2);
        assert_eq!((u1.first, u1.second), (Dina::Selasa, Dina::Jumat));
        assert_eq!(u1.label, "Bercerai");

        let o = jodoh_day(Dina::Selasa, Dina::Jumat, DayPairing::Ordered);
        assert_eq!((o.first, o.second), (Dina::Selasa, Dina::Jumat));
        assert_eq!(o.label, "Bercerai");
        let r = jodoh_day(Dina::Jumat, Dina::Selasa, DayPairing::Ordered);
        assert_eq!((r.first, r.second), (Dina::Jumat, Dina::Selasa));
        assert_eq!(r.label, "Kurang baik");
    }

    #[test]
    fn swapping_people_changes_only_ordered_reading() {
        for a in ALL_DINAS {
            for b in ALL_DINAS {
                let u = (
                    jodoh_day(a, b, DayPairing::Unordered),
                    jodoh_day(b, a, DayPairing::Unordered),
                );
                assert_eq!(u.0, u.1);
                let ab = jodoh_day(a, b, DayPairing::Ordered);
                let ba = jodoh_day(b, a, DayPairing::Ordered);
                if a == b {
                    assert_eq!(ab.label, u.0.label);
                } else {
                    assert_ne!(ab.label, ba.label, "{} / {}", a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let a = profile("1990-05-14");
        let b = profile("1992-11-02");
        let (a0, b0) = (a, b);
        let r1 = compute_jodoh(&a, &b, DayPairing::Unordered).unwrap();
        let r2 = compute_jodoh(&a, &b, DayPairing::Unordered).unwrap();
        assert_eq!(
            serde_json::to_string(&r1).unwrap(),
            serde_json::to_string(&r2).unwrap()
        );
        assert_eq!((a, b), (a0, b0));
    }

    #[test]
    fn inconsistent_profile_rejected() {
        let mut a = profile("1990-05-14");
        let b = profile("1992-11-02");
        a.total_neptu += 1;
        assert!(matches!(
            compute_jodoh(&a, &b, DayPairing::Ordered),
            Err(EngineError::IncompleteProfile(_))
        ));
    }

    #[test]
    fn stored_incomplete_rejected() {
        let a = StoredWeton::from(&profile("1990-05-14"));
        let mut b = StoredWeton::from(&profile("1992-11-02"));
        b.laku = None;
        assert!(matches!(
            compute_jodoh_stored(&a, &b, DayPairing::Unordered),
            Err(EngineError::IncompleteProfile("missing laku"))
        ));
    }
}
