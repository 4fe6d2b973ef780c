//! Dasha (planetary period) timelines.
//!
//! Nine planet-keyed schemes share one engine driven by const tables:
//! Vimshottari, Ashtottari, Yogini, Shodashottari, Dwisaptati, Panchottari,
//! Dwadashottari, Chaturvimsati and Shattrimshat. Each generates three
//! levels (Mahadasha, Antardasha, Pratyantardasha). Kalachakra is sign-keyed
//! and generates Mahadashas only.

pub mod balance;
pub mod kaal_chakra;
pub mod kaal_chakra_data;
pub mod nakshatra;
pub mod nakshatra_data;
pub mod query;
pub mod subperiod;
pub mod types;

use kundali_config::DashaConfig;
use tracing::debug;

use crate::error::VedicError;

pub use balance::{nakshatra_birth_balance, pada_birth_balance};
pub use kaal_chakra::kaal_chakra_periods;
pub use kaal_chakra_data::{KALACHAKRA, KCD_RASHI_YEARS, KalachakraConfig, SAVYA_PATHS};
pub use nakshatra::{nakshatra_mahadasha_sequence, nakshatra_periods};
pub use nakshatra_data::{
    ASHTOTTARI, CHATURVIMSATI, DWADASHOTTARI, DWISAPTATI, DashaScheme, DashaSystemConfig,
    PANCHOTTARI, SHATTRIMSHAT, SHODASHOTTARI, VIMSHOTTARI, YOGINI,
};
pub use query::find_active_period;
pub use subperiod::{build_period, cyclic_sequence, snap_last_child_end, subdivide};
pub use types::{
    ALL_DASHA_SYSTEMS, DashaLevel, DashaLord, DashaPeriod, DashaSystem, DashaTimeline,
    MAX_DASHA_DEPTH, MAX_MAHADASHAS, YOGINI_GRAHAS, YOGINI_NAMES,
};

/// Generate a timeline for `system` from the Moon's sidereal longitude.
///
/// `horizon_years` defaults to `config.horizon_years`. The period running
/// across the horizon is kept whole.
pub fn dasha_timeline(
    system: DashaSystem,
    moon_sidereal_lon: f64,
    birth_jd: f64,
    horizon_years: Option<f64>,
    config: &DashaConfig,
) -> Result<DashaTimeline, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    let horizon_years = horizon_years.unwrap_or(config.horizon_years);
    let year_days = config.year_days;
    let periods = match system.scheme() {
        DashaScheme::Planetary(cfg) => {
            nakshatra_periods(birth_jd, moon_sidereal_lon, &cfg, horizon_years, year_days)?
        }
        DashaScheme::Kalachakra(cfg) => {
            kaal_chakra_periods(birth_jd, moon_sidereal_lon, cfg, horizon_years, year_days)?
        }
    };
    debug!(system = system.key(), birth_jd, horizon_years, "dasha timeline");
    Ok(DashaTimeline {
        system,
        birth_jd,
        horizon_jd: birth_jd + horizon_years * year_days,
        periods,
    })
}

/// [`dasha_timeline`] keyed by scheme name (case-insensitive).
pub fn dasha_timeline_by_key(
    system_key: &str,
    moon_sidereal_lon: f64,
    birth_jd: f64,
    horizon_years: Option<f64>,
    config: &DashaConfig,
) -> Result<DashaTimeline, VedicError> {
    let system: DashaSystem = system_key.parse()?;
    dasha_timeline(system, moon_sidereal_lon, birth_jd, horizon_years, config)
}
