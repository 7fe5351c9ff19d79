//! Engine configuration loaded from TOML.
//!
//! ```toml
//! day_boundary = "sunset"
//! sunset_hour = 18
//! day_pairing = "ordered"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use weton_engine::DayPairing;
use weton_time::{DEFAULT_SUNSET_HOUR, DayBoundary, SUNSET_HOURS};

use crate::error::WetonError;

/// Which day-boundary rule a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    #[default]
    Midnight,
    Sunset,
}

/// Process-wide engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub day_boundary: BoundaryKind,
    /// Hour (12..=23) from which a birth belongs to the next day.
    /// Only read when `day_boundary` is `sunset`.
    pub sunset_hour: u32,
    pub day_pairing: DayPairing,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            day_boundary: BoundaryKind::Midnight,
            sunset_hour: DEFAULT_SUNSET_HOUR,
            day_pairing: DayPairing::Unordered,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, WetonError> {
        let config: Self = toml::from_str(s)
            .map_err(|e| WetonError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WetonError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WetonError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), WetonError> {
        if !SUNSET_HOURS.contains(&self.sunset_hour) {
            return Err(WetonError::Config(format!(
                "sunset_hour must be within 12..=23, got {}",
                self.sunset_hour
            )));
        }
        Ok(())
    }

    /// Day-boundary policy this configuration selects.
    pub fn day_boundary(&self) -> DayBoundary {
        match self.day_boundary {
            BoundaryKind::Midnight => DayBoundary::Midnight,
            BoundaryKind::Sunset => DayBoundary::Sunset {
                hour: self.sunset_hour,
            },
        }
    }
}
