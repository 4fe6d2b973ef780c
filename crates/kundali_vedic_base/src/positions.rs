//! Caller-supplied planetary positions for one chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::Graha;

/// Sidereal longitudes (degrees) and speeds (degrees/day) keyed by graha.
///
/// Any graha may be absent; calculations that need it report
/// [`VedicError::UnknownPlanet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartPositions {
    longitudes: BTreeMap<Graha, f64>,
    speeds: BTreeMap<Graha, f64>,
}

impl ChartPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a longitude and speed.
    pub fn with(mut self, graha: Graha, longitude: f64, speed: f64) -> Self {
        self.set(graha, longitude, Some(speed));
        self
    }

    /// Builder-style insert of a longitude only.
    pub fn with_longitude(mut self, graha: Graha, longitude: f64) -> Self {
        self.set(graha, longitude, None);
        self
    }

    pub fn set(&mut self, graha: Graha, longitude: f64, speed: Option<f64>) {
        self.longitudes.insert(graha, longitude);
        match speed {
            Some(s) => {
                self.speeds.insert(graha, s);
            }
            None => {
                self.speeds.remove(&graha);
            }
        }
    }

    /// Longitude of `graha`; missing or non-finite values are an error.
    pub fn longitude(&self, graha: Graha) -> Result<f64, VedicError> {
        match self.longitudes.get(&graha) {
            Some(&lon) if lon.is_finite() => Ok(lon),
            _ => Err(VedicError::UnknownPlanet(graha)),
        }
    }

    /// Speed of `graha` in degrees/day.
    pub fn speed(&self, graha: Graha) -> Result<f64, VedicError> {
        match self.speeds.get(&graha) {
            Some(&v) if v.is_finite() => Ok(v),
            _ => Err(VedicError::UnknownPlanet(graha)),
        }
    }

    pub fn contains(&self, graha: Graha) -> bool {
        self.longitudes.contains_key(&graha)
    }

    /// Grahas with a longitude, in traditional order.
    pub fn grahas(&self) -> impl Iterator<Item = Graha> + '_ {
        self.longitudes.keys().copied()
    }
}
