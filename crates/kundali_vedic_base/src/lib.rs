//! Pure-math Vedic calculations on sidereal longitudes.
//!
//! This crate provides:
//! - A linear ayanamsa model and tropical → sidereal conversion
//! - Nakshatra/pada resolution and the five panchang limbs
//! - Muhurta windows (Rahu Kaal, Gulika Kaal, Yamaganda, Abhijit)
//! - Divisional chart (varga) projection
//! - Ashtakavarga and simplified Shadbala
//! - Dasha timelines for nine planet-keyed schemes plus Kalachakra
//!
//! Every function is a pure function of its arguments and immutable tables.
//! Positions come from an [`EphemerisProvider`]; place names are resolved
//! through a [`LocationResolver`].

pub mod ashtakavarga;
pub mod ayanamsha;
pub mod dasha;
pub mod ephemeris;
pub mod error;
pub mod graha;
pub mod location;
pub mod muhurta;
pub mod nakshatra;
pub mod panchang;
pub mod positions;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod varga;

pub use ashtakavarga::{
    AshtakavargaGrid, BAV_TOTALS, SAV_TOTAL, all_ashtakavargas, ashtakavarga, sarvashtakavarga,
};
pub use ayanamsha::AyanamsaModel;
pub use dasha::{
    ALL_DASHA_SYSTEMS, DashaLevel, DashaLord, DashaPeriod, DashaSystem, DashaTimeline,
    dasha_timeline, dasha_timeline_by_key,
};
pub use ephemeris::{EphemerisProvider, MeanElementsEphemeris};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use location::{CityRegistry, Location, LocationResolver};
pub use muhurta::{MuhurtaWindows, TimeWindow, muhurta_windows};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_of,
    pada_position,
};
pub use panchang::{Karana, Paksha, PanchangInfo, Vaar, panchang, tithi_name};
pub use positions::ChartPositions;
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, rashi_of};
pub use shadbala::{BirthContext, ShadbalaBreakdown, ShadbalaResult, all_shadbalas, shadbala};
pub use util::{angular_distance, checked_longitude, normalize_360};
pub use varga::{VargaPosition, varga_name, varga_position};
