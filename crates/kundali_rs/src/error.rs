//! Facade error type.

use kundali_config::ConfigError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

/// Any failure surfaced by [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum KundaliError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// The location resolver had no match for the query.
    #[error("location not found: {0}")]
    LocationNotFound(String),
}
