//! Shared utility functions for vedic calculations.

use crate::error::VedicError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r < 0.0 {
        let w = r + 360.0;
        if w >= 360.0 { 0.0 } else { w }
    } else {
        r
    }
}

/// Normalize a finite longitude, rejecting NaN and infinities.
pub fn checked_longitude(deg: f64) -> Result<f64, VedicError> {
    if deg.is_finite() {
        Ok(normalize_360(deg))
    } else {
        Err(VedicError::InvalidLongitude(deg))
    }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}
