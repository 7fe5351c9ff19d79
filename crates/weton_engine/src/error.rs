//! Error types for profile assembly and compatibility.

use thiserror::Error;
use weton_base::TableError;
use weton_time::DateError;

/// Errors from the weton engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Birth date/time rejected; the caller can correct the input.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] DateError),
    /// A profile lacks a required field or its fields contradict each other.
    #[error("incomplete profile: {0}")]
    IncompleteProfile(&'static str),
    /// A derived index fell outside a table; an engine defect.
    #[error("internal consistency failure: {0}")]
    InternalConsistency(TableError),
}
