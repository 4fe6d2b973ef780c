//! The engine handle: configuration plus the models built from it.

use kundali_config::EngineConfig;
use kundali_time::{CivilDateTime, TimeConverter};
use kundali_vedic_base::{
    AshtakavargaGrid, AyanamsaModel, BirthContext, ChartPositions, DashaTimeline, Graha,
    MuhurtaWindows, NakshatraInfo, PanchangInfo, ShadbalaResult, VargaPosition,
    dasha_timeline_by_key,
};
use tracing::debug;

use crate::error::KundaliError;

/// Explicitly constructed, immutable calculation engine.
///
/// Every method is a pure function of its arguments and the configuration
/// fixed at construction, so one `Engine` can be shared by reference
/// across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    config: EngineConfig,
    time: TimeConverter,
    ayanamsa: AyanamsaModel,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            time: TimeConverter::default(),
            ayanamsa: AyanamsaModel::default(),
        }
    }
}

impl Engine {
    /// Validate `config` and build the models it describes.
    pub fn new(config: EngineConfig) -> Result<Self, KundaliError> {
        config.validate()?;
        let time = config.time_converter()?;
        let ayanamsa = AyanamsaModel::from_config(&config.ayanamsa);
        debug!(
            min_year = time.min_year(),
            max_year = time.max_year(),
            ayanamsa_base = ayanamsa.base_deg(),
            horizon_years = config.dasha.horizon_years,
            "engine constructed"
        );
        Ok(Self {
            config,
            time,
            ayanamsa,
        })
    }

    /// Parse a TOML configuration and build an engine from it.
    pub fn from_toml_str(content: &str) -> Result<Self, KundaliError> {
        Self::new(EngineConfig::from_toml_str(content)?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn time_converter(&self) -> &TimeConverter {
        &self.time
    }

    pub fn ayanamsa_model(&self) -> &AyanamsaModel {
        &self.ayanamsa
    }

    // -----------------------------------------------------------------------
    // Time and zodiac
    // -----------------------------------------------------------------------

    /// Local civil time with a signed timezone offset → UTC Julian Day.
    pub fn to_julian_day(
        &self,
        civil: &CivilDateTime,
        tz_offset_hours: f64,
    ) -> Result<f64, KundaliError> {
        Ok(self.time.to_julian_day(civil, tz_offset_hours)?)
    }

    /// UTC Julian Day → local civil time.
    pub fn from_julian_day(&self, jd: f64, tz_offset_hours: f64) -> CivilDateTime {
        self.time.from_julian_day(jd, tz_offset_hours)
    }

    /// Ayanamsa in degrees at `jd`.
    pub fn ayanamsa(&self, jd: f64) -> f64 {
        self.ayanamsa.ayanamsa(jd)
    }

    pub fn sidereal_longitude(&self, tropical_lon: f64, jd: f64) -> Result<f64, KundaliError> {
        Ok(self.ayanamsa.sidereal_longitude(tropical_lon, jd)?)
    }

    /// Nakshatra of a sidereal longitude in [0, 360).
    pub fn nakshatra_of(&self, moon_lon: f64) -> Result<NakshatraInfo, KundaliError> {
        Ok(kundali_vedic_base::nakshatra_of(moon_lon)?)
    }

    // -----------------------------------------------------------------------
    // Panchang and muhurta
    // -----------------------------------------------------------------------

    pub fn panchang(
        &self,
        sun_lon: f64,
        moon_lon: f64,
        jd: f64,
    ) -> Result<PanchangInfo, KundaliError> {
        Ok(kundali_vedic_base::panchang(sun_lon, moon_lon, jd)?)
    }

    pub fn muhurta_windows(
        &self,
        sunrise_jd: f64,
        sunset_jd: f64,
        jd: f64,
    ) -> Result<MuhurtaWindows, KundaliError> {
        Ok(kundali_vedic_base::muhurta_windows(sunrise_jd, sunset_jd, jd)?)
    }

    // -----------------------------------------------------------------------
    // Chart analysis
    // -----------------------------------------------------------------------

    pub fn varga_position(
        &self,
        longitude: f64,
        division: u16,
    ) -> Result<VargaPosition, KundaliError> {
        Ok(kundali_vedic_base::varga_position(longitude, division)?)
    }

    /// Bhinna Ashtakavarga for `target`; `ascendant_sign` is 1-based.
    pub fn ashtakavarga(
        &self,
        target: Graha,
        positions: &ChartPositions,
        ascendant_sign: u8,
    ) -> Result<AshtakavargaGrid, KundaliError> {
        Ok(kundali_vedic_base::ashtakavarga(
            target,
            positions,
            ascendant_sign,
        )?)
    }

    pub fn shadbala(
        &self,
        graha: Graha,
        positions: &ChartPositions,
        moon_lon: f64,
        sun_lon: f64,
        cusps: &[f64; 12],
        ctx: &BirthContext,
    ) -> Result<ShadbalaResult, KundaliError> {
        Ok(kundali_vedic_base::shadbala(
            graha, positions, moon_lon, sun_lon, cusps, ctx,
        )?)
    }

    // -----------------------------------------------------------------------
    // Dasha
    // -----------------------------------------------------------------------

    /// Dasha timeline by scheme key (case-insensitive).
    ///
    /// `horizon_years` falls back to the configured horizon.
    pub fn dasha_timeline(
        &self,
        system_key: &str,
        moon_lon: f64,
        birth_jd: f64,
        horizon_years: Option<f64>,
    ) -> Result<DashaTimeline, KundaliError> {
        Ok(dasha_timeline_by_key(
            system_key,
            moon_lon,
            birth_jd,
            horizon_years,
            &self.config.dasha,
        )?)
    }
}
