//! Types for jodoh (compatibility) results.

use serde::{Deserialize, Serialize};
use weton_base::{CharacterRecord, Dina};

/// How the two day names are keyed in the day-combination lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPairing {
    /// Keep (person A, person B) as given and read the order-sensitive
    /// table; A is conventionally the man.
    Ordered,
    /// Sort the two days into week order so the result is symmetric.
    #[default]
    Unordered,
}

/// Outcome of one modulus method applied to the combined neptu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JodohOutcome {
    pub modulus: u8,
    /// 1-based remainder; a zero remainder is reported as `modulus`.
    pub remainder: u8,
    pub label: &'static str,
    pub description: &'static str,
}

impl JodohOutcome {
    pub(crate) const fn new(modulus: u8, remainder: u8, record: &'static CharacterRecord) -> Self {
        Self {
            modulus,
            remainder,
            label: record.title,
            description: record.description,
        }
    }
}

/// Outcome of the divide-by-nine method: each person's own total neptu
/// reduced separately, then read as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Jodoh9 {
    /// Person A's total neptu mod 9, 1..=9.
    pub remainder_a: u8,
    /// Person B's total neptu mod 9, 1..=9.
    pub remainder_b: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// Outcome of the day-name combination lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JodohDay {
    pub pairing: DayPairing,
    /// First key day (person A when ordered, earlier weekday when unordered).
    pub first: Dina,
    pub second: Dina,
    pub label: &'static str,
    pub description: &'static str,
}

/// All jodoh methods for one couple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JodohResult {
    /// Sum of both total neptu values, 14..=36.
    pub combined_neptu: u8,
    pub jodoh4: JodohOutcome,
    pub jodoh5: JodohOutcome,
    pub jodoh7: JodohOutcome,
    pub jodoh8: JodohOutcome,
    pub jodoh9: Jodoh9,
    pub jodoh_day: JodohDay,
}
