//! Engine configuration for the kundali workspace.
//!
//! An [`EngineConfig`] is built once (from defaults, a TOML string or a TOML
//! file), validated, and then handed by value or reference to whatever owns
//! the computation. Nothing in it changes after construction.
//!
//! ```toml
//! [time]
//! min_year = -3000
//! max_year = 3000
//!
//! [ayanamsa]
//! base_deg = 23.857103
//!
//! [dasha]
//! horizon_years = 100.0
//! ```

pub mod error;

use std::path::Path;

use kundali_time::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, TimeConverter};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Ayanamsa at J2000.0 in degrees (Lahiri-style anchor).
pub const DEFAULT_AYANAMSA_BASE_DEG: f64 = 23.857103;

/// Linear precession coefficient applied per Julian century since J2000.0.
pub const DEFAULT_PRECESSION_DEG_PER_CENTURY: f64 = 50.27 / 3600.0;

/// Sidereal year in days; converts dasha years to Julian Days.
pub const SIDEREAL_YEAR_DAYS: f64 = 365.256363004;

/// Default length of a generated dasha timeline, in years.
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// Supported civil year range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

/// Linear ayanamsa model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyanamsaConfig {
    /// Ayanamsa at J2000.0, degrees.
    pub base_deg: f64,
    /// Increase per Julian century, degrees.
    pub rate_deg_per_century: f64,
}

impl Default for AyanamsaConfig {
    fn default() -> Self {
        Self {
            base_deg: DEFAULT_AYANAMSA_BASE_DEG,
            rate_deg_per_century: DEFAULT_PRECESSION_DEG_PER_CENTURY,
        }
    }
}

/// Dasha timeline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    /// Timeline horizon when the caller does not supply one, in years.
    pub horizon_years: f64,
    /// Days per dasha year.
    pub year_days: f64,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            year_days: SIDEREAL_YEAR_DAYS,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub time: TimeConfig,
    pub ayanamsa: AyanamsaConfig,
    pub dasha: DashaConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing sections and fields
    /// fall back to their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!(?config, "parsed engine config");
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading engine config");
        Self::from_toml_str(&content)
    }

    /// Reject values no computation can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time.min_year > self.time.max_year {
            return Err(ConfigError::Invalid {
                field: "time.min_year",
                value: format!("{} > max_year {}", self.time.min_year, self.time.max_year),
            });
        }
        if !self.ayanamsa.base_deg.is_finite() {
            return Err(invalid_f64("ayanamsa.base_deg", self.ayanamsa.base_deg));
        }
        if !self.ayanamsa.rate_deg_per_century.is_finite() {
            return Err(invalid_f64(
                "ayanamsa.rate_deg_per_century",
                self.ayanamsa.rate_deg_per_century,
            ));
        }
        if !(self.dasha.horizon_years.is_finite() && self.dasha.horizon_years > 0.0) {
            return Err(invalid_f64("dasha.horizon_years", self.dasha.horizon_years));
        }
        if !(self.dasha.year_days.is_finite() && self.dasha.year_days > 0.0) {
            return Err(invalid_f64("dasha.year_days", self.dasha.year_days));
        }
        Ok(())
    }

    /// Time converter for the configured year range.
    pub fn time_converter(&self) -> Result<TimeConverter, ConfigError> {
        TimeConverter::new(self.time.min_year, self.time.max_year).map_err(|e| {
            ConfigError::Invalid {
                field: "time",
                value: e.to_string(),
            }
        })
    }
}

fn invalid_f64(field: &'static str, value: f64) -> ConfigError {
    ConfigError::Invalid {
        field,
        value: value.to_string(),
    }
}
