//! Weton and wuku profile assembly, jodoh compatibility and cycle search.
//!
//! This crate provides:
//! - Weton profiles: neptu, laku, rakam, pancasuda, sadwara, hastawara,
//!   character and archetype records for one birth day
//! - Wuku profiles: wuku, guardian deity, tree, bird and day position
//! - Jodoh across the divide-by-4/5/7/8/9 methods and the day-name table
//! - Rehydration of stored profiles with completeness checks
//! - Next/previous weton, wuku and selapan search

pub mod error;
pub mod jodoh;
pub(crate) mod jodoh_data;
pub mod jodoh_types;
pub mod profile;
pub mod profile_types;
pub mod search;

pub use error::EngineError;
pub use jodoh::{
    compute_jodoh, compute_jodoh_stored, jodoh4, jodoh5, jodoh7, jodoh8, jodoh9, jodoh_day,
};
pub use jodoh_types::{DayPairing, Jodoh9, JodohDay, JodohOutcome, JodohResult};
pub use profile::{
    assemble_weton_profile, assemble_wuku_profile, compute_weton_profile, compute_wuku_profile,
};
pub use profile_types::{StoredWeton, WetonProfile, WukuProfile};
pub use search::{Selapan, next_selapan, next_weton, next_wuku_start, prev_weton, weton_occurrences};
