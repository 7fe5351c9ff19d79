//! Profile assembly: cycle indices + neptu + trait tables into one value.

use tracing::{debug, error, warn};
use weton_base::{
    TableError, Weton, archetype, cycle_indices, day_character, laku, neptu_character,
    pancasuda, pasaran_character, rakam, wuku_record,
};
use weton_time::{BirthDate, BirthTime, CalendarDayOrdinal, DayBoundary, NormalizedDay, normalize};

use crate::error::EngineError;
use crate::profile_types::{StoredWeton, WetonProfile, WukuProfile};

/// Lift a table miss into an engine defect, failing loudly in debug builds.
fn consistency(e: TableError) -> EngineError {
    error!(%e, "table lookup out of domain");
    if cfg!(debug_assertions) {
        panic!("table lookup out of domain: {e}");
    }
    EngineError::InternalConsistency(e)
}

/// Assemble the weton profile of a normalized birth day.
pub fn assemble_weton_profile(day: &NormalizedDay) -> Result<WetonProfile, EngineError> {
    let indices = cycle_indices(day.ordinal);
    let weton = indices.weton();
    let neptu = weton.neptu();
    let (pancasuda_remainder, pancasuda_record) = pancasuda(u32::from(neptu.total));

    let profile = WetonProfile {
        date: day.date,
        birth_time: day.time,
        ordinal: day.ordinal,
        day_shifted: day.shifted,
        weton,
        neptu_dina: neptu.dina,
        neptu_pasaran: neptu.pasaran,
        total_neptu: neptu.total,
        laku: laku(neptu.total).map_err(consistency)?,
        rakam: rakam(neptu.total),
        pancasuda_remainder,
        pancasuda: pancasuda_record,
        sadwara: indices.sadwara,
        sadwara_character: indices.sadwara.character(),
        hastawara: indices.hastawara,
        hastawara_character: indices.hastawara.character(),
        day_character: day_character(weton.dina),
        pasaran_character: pasaran_character(weton.pasaran),
        total_neptu_character: neptu_character(neptu.total).map_err(consistency)?,
        archetype: archetype(weton),
    };
    debug!(date = %day.date, %weton, total_neptu = neptu.total, "assembled weton profile");
    Ok(profile)
}

/// Assemble the wuku profile of a calendar-day ordinal.
pub fn assemble_wuku_profile(ordinal: CalendarDayOrdinal) -> WukuProfile {
    let indices = cycle_indices(ordinal);
    let record = wuku_record(indices.wuku);
    WukuProfile {
        wuku: indices.wuku,
        number: indices.wuku.index() + 1,
        guardian_deity: record.deity,
        tree: record.tree,
        bird: record.bird,
        character: record.character,
        day_in_wuku: indices.day_in_wuku(),
        pawukon_day: indices.pawukon_day + 1,
    }
}

/// Weton profile of a birth date and optional time.
pub fn compute_weton_profile(
    date: BirthDate,
    time: Option<BirthTime>,
    boundary: DayBoundary,
) -> Result<WetonProfile, EngineError> {
    let day = normalize(date, time, boundary)?;
    assemble_weton_profile(&day)
}

/// Wuku profile of a birth date and optional time.
pub fn compute_wuku_profile(
    date: BirthDate,
    time: Option<BirthTime>,
    boundary: DayBoundary,
) -> Result<WukuProfile, EngineError> {
    let day = normalize(date, time, boundary)?;
    Ok(assemble_wuku_profile(day.ordinal))
}

fn reject(reason: &'static str) -> EngineError {
    warn!(reason, "rejected stored weton profile");
    EngineError::IncompleteProfile(reason)
}

impl TryFrom<&StoredWeton> for WetonProfile {
    type Error = EngineError;

    /// Rebuild a profile from stored fields.
    ///
    /// The date, dina, pasaran, total neptu and laku are required. The
    /// profile is recomputed from the date (and stored ordinal, which may
    /// sit one day later when a day boundary applied) and every stored
    /// field must agree with the recomputation.
    fn try_from(s: &StoredWeton) -> Result<Self, Self::Error> {
        let date = s.date.ok_or_else(|| reject("missing date"))?;
        let dina = s.dina.ok_or_else(|| reject("missing dina"))?;
        let pasaran = s.pasaran.ok_or_else(|| reject("missing pasaran"))?;
        let total = s.total_neptu.ok_or_else(|| reject("missing total_neptu"))?;
        let laku_title = s.laku.as_deref().ok_or_else(|| reject("missing laku"))?;

        let civil = date.ordinal();
        let ordinal = s.ordinal.unwrap_or(civil);
        let shifted = match civil.days_until(ordinal) {
            0 => false,
            1 => true,
            _ => return Err(reject("ordinal does not match date")),
        };
        if !ordinal.is_supported() {
            return Err(reject("ordinal outside supported range"));
        }
        let profile = assemble_weton_profile(&NormalizedDay {
            date,
            time: s.birth_time,
            ordinal,
            shifted,
        })?;

        if profile.weton != Weton::new(dina, pasaran) {
            return Err(reject("dina/pasaran do not match date"));
        }
        if s.neptu_dina.is_some_and(|n| n != profile.neptu_dina)
            || s.neptu_pasaran.is_some_and(|n| n != profile.neptu_pasaran)
        {
            return Err(reject("neptu weights do not match weton"));
        }
        if total != profile.total_neptu {
            return Err(reject("total_neptu does not match weton"));
        }
        if laku_title != profile.laku.title {
            return Err(reject("laku does not match total_neptu"));
        }
        Ok(profile)
    }
}
