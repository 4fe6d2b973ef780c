//! Linear ayanamsa model.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsa increases over time.
//!
//! The model is anchored at J2000.0 and grows linearly:
//!
//! `ayanamsa(jd) = base_deg + rate_deg_per_century * (jd - J2000) / 36525`

use kundali_config::AyanamsaConfig;
use kundali_time::jd_to_centuries;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::{checked_longitude, normalize_360};

/// Tropical → sidereal correction with constant precession rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AyanamsaModel {
    base_deg: f64,
    rate_deg_per_century: f64,
}

impl Default for AyanamsaModel {
    fn default() -> Self {
        Self::from_config(&AyanamsaConfig::default())
    }
}

impl AyanamsaModel {
    pub const fn new(base_deg: f64, rate_deg_per_century: f64) -> Self {
        Self {
            base_deg,
            rate_deg_per_century,
        }
    }

    pub const fn from_config(config: &AyanamsaConfig) -> Self {
        Self::new(config.base_deg, config.rate_deg_per_century)
    }

    /// Ayanamsa at J2000.0, degrees.
    pub fn base_deg(&self) -> f64 {
        self.base_deg
    }

    /// Ayanamsa in degrees at a UTC Julian Day.
    pub fn ayanamsa(&self, jd: f64) -> f64 {
        self.base_deg + self.rate_deg_per_century * jd_to_centuries(jd)
    }

    /// Sidereal longitude in [0, 360) for a tropical longitude at `jd`.
    pub fn sidereal_longitude(&self, tropical_lon: f64, jd: f64) -> Result<f64, VedicError> {
        let tropical = checked_longitude(tropical_lon)?;
        let sidereal = normalize_360(tropical - self.ayanamsa(jd));
        if sidereal.is_finite() {
            Ok(sidereal)
        } else {
            Err(VedicError::InvalidLongitude(sidereal))
        }
    }
}
