//! Unified error type for the convenience API.

use thiserror::Error;
use weton_base::TableError;
use weton_engine::EngineError;
use weton_time::DateError;

/// Errors surfaced by `weton_rs`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum WetonError {
    /// [`init`](crate::init) was called more than once.
    #[error("weton configuration already initialized")]
    AlreadyInitialized,
    /// Configuration file unreadable, unparsable or out of range.
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// An unknown weton, dina, pasaran or wuku name.
    #[error(transparent)]
    Name(#[from] TableError),
}

impl WetonError {
    /// True when the caller can fix the input and try again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Date(_)
                | Self::Name(_)
                | Self::Engine(EngineError::InvalidDate(_))
                | Self::Engine(EngineError::IncompleteProfile(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_error_is_input() {
        let e: WetonError = DateError::Malformed("x".into()).into();
        assert!(e.is_input_error());
        assert_eq!(e.to_string(), DateError::Malformed("x".into()).to_string());
    }

    #[test]
    fn config_error_is_not_input() {
        assert!(!WetonError::Config("bad".into()).is_input_error());
        assert!(!WetonError::AlreadyInitialized.is_input_error());
    }
}
