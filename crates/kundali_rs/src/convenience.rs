//! Helpers that pull inputs from the collaborator seams: an ephemeris for
//! positions and a location resolver for birth places.

use kundali_time::CivilDateTime;
use kundali_vedic_base::{ChartPositions, EphemerisProvider, Graha, Location, LocationResolver};
use serde::Serialize;
use tracing::debug;

use crate::engine::Engine;
use crate::error::KundaliError;

/// A resolved birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthMoment {
    pub location: Location,
    /// UTC Julian Day of the local civil time at `location`.
    pub jd: f64,
}

impl Engine {
    /// Sidereal longitudes and speeds for `grahas` at `jd`.
    ///
    /// Tropical longitudes come from `provider`; speeds are left as the
    /// provider reports them (the ayanamsa rate is negligible per day).
    pub fn sidereal_positions(
        &self,
        provider: &dyn EphemerisProvider,
        jd: f64,
        grahas: &[Graha],
    ) -> Result<ChartPositions, KundaliError> {
        let mut positions = ChartPositions::new();
        for &graha in grahas {
            let tropical = provider.longitude_of(graha, jd)?;
            let speed = provider.velocity_of(graha, jd)?;
            let sidereal = self.sidereal_longitude(tropical, jd)?;
            positions.set(graha, sidereal, Some(speed));
        }
        debug!(jd, count = grahas.len(), "sidereal positions");
        Ok(positions)
    }

    /// Resolve `city` and convert its local civil time to a UTC Julian Day.
    pub fn resolve_birth(
        &self,
        resolver: &dyn LocationResolver,
        city: &str,
        civil: &CivilDateTime,
    ) -> Result<BirthMoment, KundaliError> {
        let location = resolver
            .resolve(city)
            .ok_or_else(|| KundaliError::LocationNotFound(city.to_string()))?;
        let jd = self.to_julian_day(civil, location.timezone_offset_hours)?;
        debug!(city = %location.name, jd, "resolved birth");
        Ok(BirthMoment { location, jd })
    }
}
