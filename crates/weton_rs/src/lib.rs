//! Convenience wrapper for the weton calendar engine.
//!
//! Holds an optional process-wide [`EngineConfig`] and exposes
//! functions that take dates as strings, so callers need not build
//! `BirthDate`s or pass the day-boundary and pairing policy around.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use weton_rs::*;
//!
//! init(EngineConfig::from_file("weton.toml")?)?;
//!
//! let a = weton_profile("1990-05-12", Some("20:15"))?;
//! let b = weton_profile("1992-11-03", None)?;
//! let r = jodoh(&a, &b)?;
//! println!("{} + {} = {} ({})", a.weton, b.weton, r.combined_neptu, r.jodoh8.label);
//! ```

pub mod config;
pub mod convenience;
pub mod error;
pub mod global;

pub use config::{BoundaryKind, EngineConfig};
pub use convenience::{
    jodoh, jodoh_for_dates, jodoh_stored, next_selapan, next_weton, next_wuku_start, prev_weton,
    weton_occurrences, weton_profile, wuku_profile,
};
pub use error::WetonError;
pub use global::{config as current_config, init, is_initialized};

// Re-export value types so callers only need `weton_rs`.
pub use weton_base::{CharacterRecord, Dina, Hastawara, Pasaran, Sadwara, Weton, Wuku};
pub use weton_engine::{
    DayPairing, EngineError, Jodoh9, JodohDay, JodohOutcome, JodohResult, Selapan, StoredWeton,
    WetonProfile, WukuProfile,
};
pub use weton_time::{BirthDate, BirthTime, DateError, DayBoundary};
