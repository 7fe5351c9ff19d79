//! Javanese calendar cycles and their static trait tables.
//!
//! This crate provides:
//! - Closed enumerations for Dina (7), Pasaran (5), Sadwara (6),
//!   Hastawara (8) and Wuku (30)
//! - Cycle indexing from a calendar-day ordinal
//! - Neptu weights and the tables keyed by them (laku, rakam, pancasuda)
//! - Character, archetype and wuku records
//!
//! All tables are `const` data: read-only, process-wide, safe to share.

pub mod archetype_data;
pub mod character;
pub mod cycle;
pub mod dina;
pub mod error;
pub mod hastawara;
pub mod laku;
pub mod neptu;
pub mod pancasuda;
pub mod pasaran;
pub mod rakam;
pub mod sadwara;
pub mod util;
pub mod weton;
pub mod wuku;
pub mod wuku_data;

pub use archetype_data::{ArchetypeRecord, archetype};
pub use character::{CharacterRecord, day_character, neptu_character, pasaran_character};
pub use cycle::{CycleIndices, cycle_indices};
pub use dina::{ALL_DINAS, Dina, dina_from_ordinal};
pub use error::TableError;
pub use hastawara::{ALL_HASTAWARAS, Hastawara, hastawara_from_ordinal};
pub use laku::laku;
pub use neptu::{MAX_TOTAL_NEPTU, MIN_TOTAL_NEPTU, Neptu, neptu};
pub use pancasuda::pancasuda;
pub use pasaran::{ALL_PASARANS, Pasaran, pasaran_from_ordinal};
pub use rakam::rakam;
pub use sadwara::{ALL_SADWARAS, Sadwara, sadwara_from_ordinal};
pub use util::wrapped_remainder;
pub use weton::{SELAPAN_PERIOD, Weton, selapan_position};
pub use wuku::{ALL_WUKUS, PAWUKON_PERIOD, Wuku, pawukon_day, wuku_from_ordinal};
pub use wuku_data::{Symbol, WukuRecord, wuku_record};
