//! Shadbala (six-fold planetary strength), simplified form.
//!
//! **Sapta grahas only** (Sun through Saturn). All components are in virupas
//! (shashtiamsas, 60ths of a rupa):
//! 1. Sthana Bala (positional): proximity to deep exaltation + baseline
//! 2. Dig Bala (directional): proximity to the favoured house cusp
//! 3. Kala Bala (temporal): day/night affinity + lunar phase + baseline
//! 4. Drig Bala (aspectual): piecewise-linear aspect curve, malefics negative
//! 5. Naisargika Bala (natural): fixed per-graha constant
//! 6. Cheshta Bala (motional): speed relative to mean daily motion
//!
//! Sthana and Kala keep only the terms listed above; the classical
//! sub-components (saptavargaja, ojhayugma, abda, masa, hora, ...) are not
//! computed.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::positions::ChartPositions;
use crate::util::{angular_distance, checked_longitude, normalize_360};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Deep exaltation longitude per graha, Sun..Saturn.
pub const EXALTATION_DEG: [f64; 7] = [10.0, 33.0, 298.0, 165.0, 95.0, 357.0, 200.0];

/// Fixed positional baseline added to Sthana Bala.
pub const STHANA_BASELINE: f64 = 30.0;

/// Fixed temporal baseline added to Kala Bala.
pub const KALA_BASELINE: f64 = 30.0;

/// Favoured house (1-based) for Dig Bala: Sun/Mars 10th, Moon/Venus 4th,
/// Mercury/Jupiter 1st, Saturn 7th.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Natural strength in virupas.
pub const NAISARGIKA_BALA: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57];

/// Mean daily motion (deg/day) for Cheshta Bala; unused for Sun and Moon.
pub const MEAN_DAILY_MOTION: [f64; 7] = [0.9856, 13.1764, 0.524, 0.9856, 0.0831, 0.9856, 0.0335];

/// Cheshta Bala of the luminaries, which never retrograde.
pub const LUMINARY_CHESHTA: f64 = 30.0;

/// Minimum total virupas for a graha to count as strong.
pub const REQUIRED_STRENGTH: [f64; 7] = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];

/// Virupas per rupa.
pub const VIRUPAS_PER_RUPA: f64 = 60.0;

const MAX_COMPONENT: f64 = 60.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Birth circumstances needed beyond positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthContext {
    /// Born between sunrise and sunset.
    pub is_day_birth: bool,
}

/// The six components, in virupas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaBreakdown {
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub drig: f64,
    pub naisargika: f64,
    pub cheshta: f64,
}

impl ShadbalaBreakdown {
    pub fn total(&self) -> f64 {
        self.sthana + self.dig + self.kala + self.drig + self.naisargika + self.cheshta
    }
}

/// Shadbala for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadbalaResult {
    pub graha: Graha,
    pub breakdown: ShadbalaBreakdown,
    pub total_virupas: f64,
    /// Total in rupas (`total_virupas / 60`).
    pub pinda: f64,
    pub required_virupas: f64,
    pub is_strong: bool,
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// `(180 - distance) / 3`, 60 at the point and 0 opposite it.
fn proximity_strength(lon: f64, point: f64) -> f64 {
    (180.0 - angular_distance(lon, point)) / 3.0
}

/// Sthana Bala: exaltation proximity plus [`STHANA_BASELINE`].
pub fn sthana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    proximity_strength(sidereal_lon, EXALTATION_DEG[graha.index() as usize]) + STHANA_BASELINE
}

/// Dig Bala from the 12 house cusps (index 0 = 1st house).
pub fn dig_bala(graha: Graha, sidereal_lon: f64, cusps: &[f64; 12]) -> f64 {
    let house = DIG_BALA_BHAVA[graha.index() as usize];
    proximity_strength(sidereal_lon, cusps[(house - 1) as usize])
}

/// Kala Bala: day/night affinity, lunar phase and [`KALA_BASELINE`].
///
/// Malefics gain by day, benefics by night, Mercury always.
pub fn kala_bala(graha: Graha, moon_lon: f64, sun_lon: f64, ctx: &BirthContext) -> f64 {
    let malefic = graha.is_natural_malefic();
    let affinity = if graha == Graha::Buddh || malefic == ctx.is_day_birth {
        MAX_COMPONENT
    } else {
        0.0
    };

    let elong = normalize_360(moon_lon - sun_lon);
    let phase = if elong > 180.0 { 360.0 - elong } else { elong };
    let paksha = if malefic {
        MAX_COMPONENT - phase / 3.0
    } else {
        phase / 3.0
    };

    affinity + paksha + KALA_BASELINE
}

/// Aspect strength for a separation (aspected minus aspecting longitude).
///
/// Rises 30°→90° to 45, falls to 30 at 120°, rises to 60 at 180°,
/// falls to 0 at 300°; zero outside [30, 300].
pub fn aspect_strength(separation: f64) -> f64 {
    let a = normalize_360(separation);
    if (30.0..90.0).contains(&a) {
        (a - 30.0) * 0.75
    } else if (90.0..120.0).contains(&a) {
        45.0 - (a - 90.0) * 0.5
    } else if (120.0..180.0).contains(&a) {
        30.0 + (a - 120.0) * 0.5
    } else if (180.0..=300.0).contains(&a) {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Drig Bala: signed aspect strengths from every other supplied graha, ×¼.
pub fn drig_bala(graha: Graha, positions: &ChartPositions) -> Result<f64, VedicError> {
    let target = positions.longitude(graha)?;
    let mut sum = 0.0;
    for src in positions.grahas().filter(|&g| g != graha) {
        let strength = aspect_strength(target - positions.longitude(src)?);
        if src.is_natural_malefic() {
            sum -= strength;
        } else {
            sum += strength;
        }
    }
    Ok(sum / 4.0)
}

/// Naisargika (natural) bala.
pub fn naisargika_bala(graha: Graha) -> f64 {
    NAISARGIKA_BALA[graha.index() as usize]
}

/// Cheshta Bala from speed in deg/day.
///
/// Sun/Moon: [`LUMINARY_CHESHTA`]. Retrograde: 60. Otherwise
/// `60 - (speed / mean) * 30`, clamped to [0, 60].
pub fn cheshta_bala(graha: Graha, speed_deg_per_day: f64) -> f64 {
    if matches!(graha, Graha::Surya | Graha::Chandra) {
        return LUMINARY_CHESHTA;
    }
    if speed_deg_per_day < 0.0 {
        return MAX_COMPONENT;
    }
    let ratio = speed_deg_per_day / MEAN_DAILY_MOTION[graha.index() as usize];
    (MAX_COMPONENT - ratio * 30.0).clamp(0.0, MAX_COMPONENT)
}

// ---------------------------------------------------------------------------
// Complete Shadbala
// ---------------------------------------------------------------------------

/// Complete Shadbala for one classical graha.
///
/// `positions` must hold the target's longitude (and speed, except for the
/// luminaries); every other graha present contributes to Drig Bala.
pub fn shadbala(
    graha: Graha,
    positions: &ChartPositions,
    moon_lon: f64,
    sun_lon: f64,
    cusps: &[f64; 12],
    ctx: &BirthContext,
) -> Result<ShadbalaResult, VedicError> {
    if !graha.is_sapta() {
        return Err(VedicError::UnsupportedPlanet(graha));
    }
    let moon = checked_longitude(moon_lon)?;
    let sun = checked_longitude(sun_lon)?;
    if let Some(&bad) = cusps.iter().find(|c| !c.is_finite()) {
        return Err(VedicError::InvalidLongitude(bad));
    }

    let lon = normalize_360(positions.longitude(graha)?);
    let speed = if matches!(graha, Graha::Surya | Graha::Chandra) {
        0.0
    } else {
        positions.speed(graha)?
    };

    let breakdown = ShadbalaBreakdown {
        sthana: sthana_bala(graha, lon),
        dig: dig_bala(graha, lon, cusps),
        kala: kala_bala(graha, moon, sun, ctx),
        drig: drig_bala(graha, positions)?,
        naisargika: naisargika_bala(graha),
        cheshta: cheshta_bala(graha, speed),
    };
    let total = breakdown.total();
    let required = REQUIRED_STRENGTH[graha.index() as usize];

    Ok(ShadbalaResult {
        graha,
        breakdown,
        total_virupas: total,
        pinda: total / VIRUPAS_PER_RUPA,
        required_virupas: required,
        is_strong: total >= required,
    })
}

/// Shadbala for all seven classical grahas, Sun..Saturn.
pub fn all_shadbalas(
    positions: &ChartPositions,
    cusps: &[f64; 12],
    ctx: &BirthContext,
) -> Result<Vec<ShadbalaResult>, VedicError> {
    let moon = positions.longitude(Graha::Chandra)?;
    let sun = positions.longitude(Graha::Surya)?;
    SAPTA_GRAHAS
        .iter()
        .map(|&g| shadbala(g, positions, moon, sun, cusps, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(asc: f64) -> [f64; 12] {
        let mut c = [0.0; 12];
        for (i, cusp) in c.iter_mut().enumerate() {
            *cusp = normalize_360(asc + 30.0 * i as f64);
        }
        c
    }

    #[test]
    fn sthana_at_exaltation() {
        assert!((sthana_bala(Graha::Surya, 10.0) - 90.0).abs() < 1e-12);
        assert!((sthana_bala(Graha::Surya, 190.0) - 30.0).abs() < 1e-12);
        // Venus exalted at 357: 3 deg away across 0
        assert!((sthana_bala(Graha::Shukra, 0.0) - (59.0 + 30.0)).abs() < 1e-12);
    }

    #[test]
    fn dig_uses_favoured_cusp() {
        let cusps = equal_cusps(0.0);
        // Sun favours the 10th cusp at 270
        assert!((dig_bala(Graha::Surya, 270.0, &cusps) - 60.0).abs() < 1e-12);
        assert!(dig_bala(Graha::Surya, 90.0, &cusps).abs() < 1e-12);
        // Saturn favours the 7th at 180
        assert!((dig_bala(Graha::Shani, 180.0, &cusps) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn kala_day_night_affinity() {
        let day = BirthContext { is_day_birth: true };
        let night = BirthContext { is_day_birth: false };
        // New moon: phase 0
        assert!((kala_bala(Graha::Surya, 100.0, 100.0, &day) - 150.0).abs() < 1e-12);
        assert!((kala_bala(Graha::Surya, 100.0, 100.0, &night) - 90.0).abs() < 1e-12);
        assert!((kala_bala(Graha::Guru, 100.0, 100.0, &day) - 30.0).abs() < 1e-12);
        assert!((kala_bala(Graha::Guru, 100.0, 100.0, &night) - 90.0).abs() < 1e-12);
        assert!((kala_bala(Graha::Buddh, 100.0, 100.0, &day) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn kala_full_moon_favours_benefics() {
        let day = BirthContext { is_day_birth: true };
        // Phase 180: benefic term 60, malefic 0
        assert!((kala_bala(Graha::Shukra, 280.0, 100.0, &day) - 90.0).abs() < 1e-12);
        assert!((kala_bala(Graha::Shani, 280.0, 100.0, &day) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn aspect_curve_segments() {
        assert!(aspect_strength(20.0).abs() < 1e-12);
        assert!(aspect_strength(30.0).abs() < 1e-12);
        assert!((aspect_strength(90.0) - 45.0).abs() < 1e-12);
        assert!((aspect_strength(120.0) - 30.0).abs() < 1e-12);
        assert!((aspect_strength(180.0) - 60.0).abs() < 1e-12);
        assert!((aspect_strength(240.0) - 30.0).abs() < 1e-12);
        assert!(aspect_strength(300.0).abs() < 1e-12);
        assert!(aspect_strength(330.0).abs() < 1e-12);
    }

    #[test]
    fn drig_signs_by_nature() {
        // Jupiter (benefic) opposite Moon; Saturn (malefic) opposite Venus.
        let p = ChartPositions::new()
            .with_longitude(Graha::Chandra, 0.0)
            .with_longitude(Graha::Guru, 180.0);
        assert!((drig_bala(Graha::Chandra, &p).unwrap() - 15.0).abs() < 1e-12);

        let p = ChartPositions::new()
            .with_longitude(Graha::Shukra, 0.0)
            .with_longitude(Graha::Shani, 180.0);
        assert!((drig_bala(Graha::Shukra, &p).unwrap() + 15.0).abs() < 1e-12);
    }

    #[test]
    fn cheshta_rules() {
        assert!((cheshta_bala(Graha::Surya, 1.0) - 30.0).abs() < 1e-12);
        assert!((cheshta_bala(Graha::Mangal, -0.2) - 60.0).abs() < 1e-12);
        assert!((cheshta_bala(Graha::Mangal, 0.524) - 30.0).abs() < 1e-12);
        assert!(cheshta_bala(Graha::Guru, 1.0).abs() < 1e-12);
        assert!((cheshta_bala(Graha::Shani, 0.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn total_and_pinda() {
        let p = ChartPositions::new()
            .with(Graha::Surya, 10.0, 1.0)
            .with(Graha::Chandra, 40.0, 13.0)
            .with(Graha::Mangal, 298.0, 0.5);
        let ctx = BirthContext { is_day_birth: true };
        let r = shadbala(Graha::Mangal, &p, 40.0, 10.0, &equal_cusps(0.0), &ctx).unwrap();
        let b = r.breakdown;
        let sum = b.sthana + b.dig + b.kala + b.drig + b.naisargika + b.cheshta;
        assert!((r.total_virupas - sum).abs() < 1e-12);
        assert!((r.pinda - sum / 60.0).abs() < 1e-12);
        assert!((b.sthana - 90.0).abs() < 1e-12);
        assert_eq!(r.is_strong, r.total_virupas >= 300.0);
    }

    #[test]
    fn missing_speed_is_unknown_planet() {
        let p = ChartPositions::new().with_longitude(Graha::Guru, 95.0);
        let ctx = BirthContext { is_day_birth: false };
        assert_eq!(
            shadbala(Graha::Guru, &p, 0.0, 0.0, &equal_cusps(0.0), &ctx),
            Err(VedicError::UnknownPlanet(Graha::Guru))
        );
    }

    #[test]
    fn luminaries_need_no_speed() {
        let p = ChartPositions::new().with_longitude(Graha::Chandra, 33.0);
        let ctx = BirthContext { is_day_birth: false };
        let r = shadbala(Graha::Chandra, &p, 33.0, 0.0, &equal_cusps(0.0), &ctx).unwrap();
        assert!((r.breakdown.cheshta - 30.0).abs() < 1e-12);
    }

    #[test]
    fn nodes_unsupported() {
        let p = ChartPositions::new().with(Graha::Rahu, 10.0, -0.05);
        let ctx = BirthContext { is_day_birth: true };
        assert_eq!(
            shadbala(Graha::Rahu, &p, 0.0, 0.0, &equal_cusps(0.0), &ctx),
            Err(VedicError::UnsupportedPlanet(Graha::Rahu))
        );
    }
}
