//! Ephemeris provider seam and a low-precision mean-elements stand-in.
//!
//! The engine consumes longitudes; it never solves planetary motion itself.
//! [`MeanElementsEphemeris`] exists so the pipeline can be exercised end to
//! end. It is accurate to a fraction of a degree for the Sun and roughly a
//! degree for the Moon, and it knows nothing about the other planets.
//! Production code plugs in a real ephemeris through [`EphemerisProvider`].

use kundali_time::jd_to_centuries;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Source of tropical ecliptic longitudes and speeds.
pub trait EphemerisProvider: Send + Sync {
    /// Tropical ecliptic longitude in [0, 360) at a UTC Julian Day.
    fn longitude_of(&self, graha: Graha, jd: f64) -> Result<f64, VedicError>;

    /// Longitude rate in degrees/day (negative when retrograde).
    fn velocity_of(&self, graha: Graha, jd: f64) -> Result<f64, VedicError>;
}

/// Half-width of the central difference used for speeds, days.
const SPEED_STEP_DAYS: f64 = 0.01;

/// Truncated mean-element series for the Sun, Moon and mean lunar nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementsEphemeris;

impl MeanElementsEphemeris {
    fn sun(t: f64) -> f64 {
        let l0 = 280.46646 + 36_000.769_83 * t;
        let m = (357.52911 + 35_999.050_29 * t).to_radians();
        let c = 1.914_602 * m.sin() + 0.019_993 * (2.0 * m).sin();
        normalize_360(l0 + c)
    }

    fn moon(t: f64) -> f64 {
        let l = 218.316_447_7 + 481_267.881_234_21 * t;
        let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
        let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
        let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
        let f = (93.272_095 + 483_202.017_523_3 * t).to_radians();
        let terms = 6.289 * mp.sin() + 1.274 * (2.0 * d - mp).sin() + 0.658 * (2.0 * d).sin()
            + 0.214 * (2.0 * mp).sin()
            - 0.186 * m.sin()
            - 0.114 * (2.0 * f).sin();
        normalize_360(l + terms)
    }

    fn mean_rahu(t: f64) -> f64 {
        normalize_360(125.044_52 - 1_934.136_261 * t)
    }
}

impl EphemerisProvider for MeanElementsEphemeris {
    fn longitude_of(&self, graha: Graha, jd: f64) -> Result<f64, VedicError> {
        if !jd.is_finite() {
            return Err(VedicError::InvalidInput("julian day must be finite"));
        }
        let t = jd_to_centuries(jd);
        match graha {
            Graha::Surya => Ok(Self::sun(t)),
            Graha::Chandra => Ok(Self::moon(t)),
            Graha::Rahu => Ok(Self::mean_rahu(t)),
            Graha::Ketu => Ok(normalize_360(Self::mean_rahu(t) + 180.0)),
            other => Err(VedicError::UnsupportedPlanet(other)),
        }
    }

    fn velocity_of(&self, graha: Graha, jd: f64) -> Result<f64, VedicError> {
        let before = self.longitude_of(graha, jd - SPEED_STEP_DAYS)?;
        let after = self.longitude_of(graha, jd + SPEED_STEP_DAYS)?;
        // Unwrap across 0/360 before differencing.
        let delta = normalize_360(after - before + 180.0) - 180.0;
        Ok(delta / (2.0 * SPEED_STEP_DAYS))
    }
}
