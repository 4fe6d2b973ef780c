//! Error types for Vedic calculations.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Longitude is NaN or infinite and cannot be normalized.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// Value lies outside the range the operation accepts.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: f64 },
    /// Dasha scheme key not recognised.
    #[error("unsupported dasha system: {0}")]
    UnsupportedDashaSystem(String),
    /// No rule table exists for this graha in the requested calculation.
    #[error("unsupported planet: {}", .0.english_name())]
    UnsupportedPlanet(Graha),
    /// Required longitude or velocity was not supplied for this graha.
    #[error("missing position data for {}", .0.english_name())]
    UnknownPlanet(Graha),
    /// Time interval is empty or reversed (e.g. sunset <= sunrise).
    #[error("invalid interval: end {end} <= start {start}")]
    InvalidInterval { start: f64, end: f64 },
    /// Divisional chart number must be at least 1.
    #[error("invalid varga division: {0}")]
    InvalidDivision(u16),
    /// Other invalid argument.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
