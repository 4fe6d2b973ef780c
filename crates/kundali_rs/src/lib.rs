//! Convenience facade for the kundali engine.
//!
//! An [`Engine`] is built once from an [`EngineConfig`] and then answers
//! every calculation as a pure method call: civil time conversion,
//! sidereal longitudes, nakshatra, panchang, muhurta windows, varga,
//! Ashtakavarga, Shadbala and dasha timelines.
//!
//! # Quick start
//!
//! ```rust
//! use kundali_rs::*;
//!
//! let engine = Engine::default();
//! let jd = engine
//!     .to_julian_day(&CivilDateTime::new(1990, 1, 15, 17, 30, 0.0), 5.5)
//!     .unwrap();
//! let moon = engine.sidereal_longitude(344.05, jd).unwrap();
//! let timeline = engine.dasha_timeline("vimshottari", moon, jd, None).unwrap();
//! assert!(!timeline.periods.is_empty());
//! ```

pub mod convenience;
pub mod engine;
pub mod error;

pub use convenience::BirthMoment;
pub use engine::Engine;
pub use error::KundaliError;

pub use kundali_config::{ConfigError, EngineConfig};
pub use kundali_time::{CivilDateTime, TimeConverter, TimeError};
pub use kundali_vedic_base::{
    AshtakavargaGrid, AyanamsaModel, BirthContext, ChartPositions, CityRegistry, DashaLevel,
    DashaLord, DashaPeriod, DashaSystem, DashaTimeline, EphemerisProvider, Graha, Karana,
    Location, LocationResolver, MeanElementsEphemeris, MuhurtaWindows, Nakshatra, NakshatraInfo,
    Paksha, PanchangInfo, Rashi, ShadbalaResult, TimeWindow, Vaar, VargaPosition, VedicError,
};
