//! Location resolver seam and an in-memory city registry.

use serde::{Deserialize, Serialize};

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Degrees, north positive.
    pub latitude_deg: f64,
    /// Degrees, east positive.
    pub longitude_deg: f64,
    /// Hours east of UTC.
    pub timezone_offset_hours: f64,
}

/// Looks up a place by free-text query.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, query: &str) -> Option<Location>;
}

/// Fixed list of places matched by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    cities: Vec<Location>,
}

impl CityRegistry {
    pub fn new(cities: Vec<Location>) -> Self {
        Self { cities }
    }

    /// A handful of Indian cities with IST.
    pub fn with_defaults() -> Self {
        let ist = |name: &str, lat: f64, lon: f64| Location {
            name: name.to_string(),
            latitude_deg: lat,
            longitude_deg: lon,
            timezone_offset_hours: 5.5,
        };
        Self::new(vec![
            ist("Delhi", 28.6139, 77.2090),
            ist("Mumbai", 19.0760, 72.8777),
            ist("Kolkata", 22.5726, 88.3639),
            ist("Chennai", 13.0827, 80.2707),
            ist("Bengaluru", 12.9716, 77.5946),
            ist("Ujjain", 23.1765, 75.7885),
            ist("Varanasi", 25.3176, 82.9739),
        ])
    }

    pub fn insert(&mut self, location: Location) {
        self.cities.push(location);
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl LocationResolver for CityRegistry {
    fn resolve(&self, query: &str) -> Option<Location> {
        let q = query.trim();
        self.cities
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(q))
            .cloned()
    }
}
