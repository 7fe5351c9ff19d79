//! Error types for table resolution.

use thiserror::Error;

/// Errors from table lookups.
///
/// `OutOfDomain` is an internal-consistency failure: indices derived
/// from a calendar-day ordinal are range-constrained by construction, so
/// it always means an engine defect (miscalibrated epoch or a
/// table/period mismatch), never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TableError {
    #[error("key {key} outside the domain of the {table} table")]
    OutOfDomain { table: &'static str, key: i64 },
    /// A name did not match any entry of a closed enumeration.
    #[error("unknown {table} name: {name:?}")]
    UnknownName { table: &'static str, name: String },
}
