//! Const configuration data for the nakshatra-keyed dasha schemes.
//!
//! Every scheme is a cyclic lord order with full durations in years. The
//! Moon's nakshatra, shifted by the scheme's starting offset, picks the first
//! lord. Yogini and Chaturvimsati replace the generic offset with their own
//! constant through `offset_override`.

use serde::Serialize;

use crate::graha::Graha;

use super::kaal_chakra_data::{KALACHAKRA, KalachakraConfig};
use super::types::{DashaLord, DashaSystem};

/// Immutable definition of one planet-keyed scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaSystemConfig {
    pub system: DashaSystem,
    /// Sum of `lord_years`.
    pub total_cycle_years: f64,
    pub lord_order: &'static [DashaLord],
    /// Full duration per lord, parallel to `lord_order`.
    pub lord_years: &'static [f64],
    /// Nakshatra index (0 = Ashwini) at which the cycle starts.
    pub starting_nakshatra_offset: u8,
    /// Scheme-specific constant replacing `starting_nakshatra_offset`.
    pub offset_override: Option<u8>,
}

impl DashaSystemConfig {
    /// Offset actually applied to the Moon's nakshatra.
    pub fn effective_offset(&self) -> u8 {
        self.offset_override
            .unwrap_or(self.starting_nakshatra_offset)
    }

    /// Position in `lord_order` of the first period for a nakshatra index.
    pub fn first_lord_index(&self, nakshatra_index: u8) -> usize {
        let offset = (self.effective_offset() % 27) as usize;
        let adjusted = (nakshatra_index as usize % 27 + 27 - offset) % 27;
        adjusted % self.lord_order.len()
    }

    /// Position of `lord` in the cycle.
    pub fn position_of(&self, lord: DashaLord) -> Option<usize> {
        self.lord_order.iter().position(|&l| l == lord)
    }
}

/// Scheme definition: planet-keyed cycle or the sign-keyed Kalachakra tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DashaScheme {
    Planetary(DashaSystemConfig),
    Kalachakra(&'static KalachakraConfig),
}

const fn sum(years: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut i = 0;
    while i < years.len() {
        total += years[i];
        i += 1;
    }
    total
}

const fn planetary(
    system: DashaSystem,
    lord_order: &'static [DashaLord],
    lord_years: &'static [f64],
    starting_nakshatra_offset: u8,
    offset_override: Option<u8>,
) -> DashaSystemConfig {
    DashaSystemConfig {
        system,
        total_cycle_years: sum(lord_years),
        lord_order,
        lord_years,
        starting_nakshatra_offset,
        offset_override,
    }
}

use DashaLord::Graha as G;

// ---------------------------------------------------------------------------
// Vimshottari (120 years, 9 grahas)
// ---------------------------------------------------------------------------

const VIMSHOTTARI_LORDS: [DashaLord; 9] = [
    G(Graha::Ketu),
    G(Graha::Shukra),
    G(Graha::Surya),
    G(Graha::Chandra),
    G(Graha::Mangal),
    G(Graha::Rahu),
    G(Graha::Guru),
    G(Graha::Shani),
    G(Graha::Buddh),
];
const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

pub const VIMSHOTTARI: DashaSystemConfig = planetary(
    DashaSystem::Vimshottari,
    &VIMSHOTTARI_LORDS,
    &VIMSHOTTARI_YEARS,
    0,
    None,
);

// ---------------------------------------------------------------------------
// Ashtottari (108 years, 8 grahas, starts at Ardra)
// ---------------------------------------------------------------------------

const ASHTOTTARI_LORDS: [DashaLord; 8] = [
    G(Graha::Surya),
    G(Graha::Chandra),
    G(Graha::Mangal),
    G(Graha::Buddh),
    G(Graha::Shani),
    G(Graha::Guru),
    G(Graha::Rahu),
    G(Graha::Shukra),
];
const ASHTOTTARI_YEARS: [f64; 8] = [6.0, 15.0, 8.0, 17.0, 10.0, 19.0, 12.0, 21.0];

pub const ASHTOTTARI: DashaSystemConfig = planetary(
    DashaSystem::Ashtottari,
    &ASHTOTTARI_LORDS,
    &ASHTOTTARI_YEARS,
    5,
    None,
);

// ---------------------------------------------------------------------------
// Yogini (36 years, 8 yoginis)
// ---------------------------------------------------------------------------

const YOGINI_LORDS: [DashaLord; 8] = [
    DashaLord::Yogini(0),
    DashaLord::Yogini(1),
    DashaLord::Yogini(2),
    DashaLord::Yogini(3),
    DashaLord::Yogini(4),
    DashaLord::Yogini(5),
    DashaLord::Yogini(6),
    DashaLord::Yogini(7),
];
const YOGINI_YEARS: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

/// Ardra (index 5) maps to Mangala; with the mod-27 shift that is offset 24.
pub const YOGINI: DashaSystemConfig = planetary(
    DashaSystem::Yogini,
    &YOGINI_LORDS,
    &YOGINI_YEARS,
    0,
    Some(24),
);

// ---------------------------------------------------------------------------
// Shodashottari (116 years, 8 grahas, starts at Pushya)
// ---------------------------------------------------------------------------

const SHODASHOTTARI_LORDS: [DashaLord; 8] = [
    G(Graha::Surya),
    G(Graha::Mangal),
    G(Graha::Guru),
    G(Graha::Shani),
    G(Graha::Ketu),
    G(Graha::Chandra),
    G(Graha::Buddh),
    G(Graha::Shukra),
];
const SHODASHOTTARI_YEARS: [f64; 8] = [11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0];

pub const SHODASHOTTARI: DashaSystemConfig = planetary(
    DashaSystem::Shodashottari,
    &SHODASHOTTARI_LORDS,
    &SHODASHOTTARI_YEARS,
    7,
    None,
);

// ---------------------------------------------------------------------------
// Equal-period schemes: Dwisaptati (72), Chaturvimsati (24), Shattrimshat (36)
// ---------------------------------------------------------------------------

const EIGHT_GRAHAS: [DashaLord; 8] = [
    G(Graha::Surya),
    G(Graha::Chandra),
    G(Graha::Mangal),
    G(Graha::Buddh),
    G(Graha::Guru),
    G(Graha::Shukra),
    G(Graha::Shani),
    G(Graha::Rahu),
];

const DWISAPTATI_YEARS: [f64; 8] = [9.0; 8];

pub const DWISAPTATI: DashaSystemConfig = planetary(
    DashaSystem::Dwisaptati,
    &EIGHT_GRAHAS,
    &DWISAPTATI_YEARS,
    18,
    None,
);

const CHATURVIMSATI_YEARS: [f64; 8] = [3.0; 8];

/// Cycle starts at Swati (index 14).
pub const CHATURVIMSATI: DashaSystemConfig = planetary(
    DashaSystem::Chaturvimsati,
    &EIGHT_GRAHAS,
    &CHATURVIMSATI_YEARS,
    0,
    Some(14),
);

const SHATTRIMSHAT_LORDS: [DashaLord; 8] = [
    G(Graha::Chandra),
    G(Graha::Surya),
    G(Graha::Guru),
    G(Graha::Mangal),
    G(Graha::Buddh),
    G(Graha::Shani),
    G(Graha::Shukra),
    G(Graha::Rahu),
];
const SHATTRIMSHAT_YEARS: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

pub const SHATTRIMSHAT: DashaSystemConfig = planetary(
    DashaSystem::Shattrimshat,
    &SHATTRIMSHAT_LORDS,
    &SHATTRIMSHAT_YEARS,
    21,
    None,
);

// ---------------------------------------------------------------------------
// Panchottari (105 years, 7 grahas, starts at Anuradha)
// ---------------------------------------------------------------------------

const PANCHOTTARI_LORDS: [DashaLord; 7] = [
    G(Graha::Surya),
    G(Graha::Buddh),
    G(Graha::Shani),
    G(Graha::Mangal),
    G(Graha::Shukra),
    G(Graha::Chandra),
    G(Graha::Guru),
];
const PANCHOTTARI_YEARS: [f64; 7] = [12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0];

pub const PANCHOTTARI: DashaSystemConfig = planetary(
    DashaSystem::Panchottari,
    &PANCHOTTARI_LORDS,
    &PANCHOTTARI_YEARS,
    16,
    None,
);

// ---------------------------------------------------------------------------
// Dwadashottari (112 years, 8 grahas, starts at Bharani)
// ---------------------------------------------------------------------------

const DWADASHOTTARI_LORDS: [DashaLord; 8] = [
    G(Graha::Surya),
    G(Graha::Guru),
    G(Graha::Ketu),
    G(Graha::Buddh),
    G(Graha::Rahu),
    G(Graha::Mangal),
    G(Graha::Shani),
    G(Graha::Chandra),
];
const DWADASHOTTARI_YEARS: [f64; 8] = [7.0, 9.0, 11.0, 13.0, 15.0, 17.0, 19.0, 21.0];

pub const DWADASHOTTARI: DashaSystemConfig = planetary(
    DashaSystem::Dwadashottari,
    &DWADASHOTTARI_LORDS,
    &DWADASHOTTARI_YEARS,
    1,
    None,
);

impl DashaSystem {
    /// Definition tables for this scheme.
    pub const fn scheme(self) -> DashaScheme {
        match self {
            Self::Vimshottari => DashaScheme::Planetary(VIMSHOTTARI),
            Self::Ashtottari => DashaScheme::Planetary(ASHTOTTARI),
            Self::Yogini => DashaScheme::Planetary(YOGINI),
            Self::Shodashottari => DashaScheme::Planetary(SHODASHOTTARI),
            Self::Dwisaptati => DashaScheme::Planetary(DWISAPTATI),
            Self::Panchottari => DashaScheme::Planetary(PANCHOTTARI),
            Self::Dwadashottari => DashaScheme::Planetary(DWADASHOTTARI),
            Self::Chaturvimsati => DashaScheme::Planetary(CHATURVIMSATI),
            Self::Shattrimshat => DashaScheme::Planetary(SHATTRIMSHAT),
            Self::Kalachakra => DashaScheme::Kalachakra(&KALACHAKRA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::ALL_DASHA_SYSTEMS;

    fn planetary_configs() -> Vec<DashaSystemConfig> {
        ALL_DASHA_SYSTEMS
            .iter()
            .filter_map(|s| match s.scheme() {
                DashaScheme::Planetary(c) => Some(c),
                DashaScheme::Kalachakra(_) => None,
            })
            .collect()
    }

    #[test]
    fn vimshottari_totals_120() {
        let sum: f64 = VIMSHOTTARI.lord_years.iter().sum();
        assert!((sum - 120.0).abs() < 1e-12);
        assert!((VIMSHOTTARI.total_cycle_years - 120.0).abs() < 1e-12);
    }

    #[test]
    fn cycle_totals() {
        let expected = [
            (DashaSystem::Vimshottari, 120.0),
            (DashaSystem::Ashtottari, 108.0),
            (DashaSystem::Yogini, 36.0),
            (DashaSystem::Shodashottari, 116.0),
            (DashaSystem::Dwisaptati, 72.0),
            (DashaSystem::Panchottari, 105.0),
            (DashaSystem::Dwadashottari, 112.0),
            (DashaSystem::Chaturvimsati, 24.0),
            (DashaSystem::Shattrimshat, 36.0),
        ];
        for (sys, total) in expected {
            let DashaScheme::Planetary(cfg) = sys.scheme() else {
                panic!("{sys:?} should be planet-keyed");
            };
            assert!((cfg.total_cycle_years - total).abs() < 1e-12, "{sys:?}");
        }
    }

    #[test]
    fn tables_are_parallel() {
        for cfg in planetary_configs() {
            assert_eq!(cfg.lord_order.len(), cfg.lord_years.len(), "{:?}", cfg.system);
            assert!(cfg.lord_years.iter().all(|&y| y > 0.0));
        }
        assert_eq!(planetary_configs().len(), 9);
    }

    #[test]
    fn vimshottari_index_24_is_jupiter() {
        let i = VIMSHOTTARI.first_lord_index(24);
        assert_eq!(i, 6);
        assert_eq!(VIMSHOTTARI.lord_order[i], G(Graha::Guru));
        assert!((VIMSHOTTARI.lord_years[i] - 16.0).abs() < 1e-12);
    }

    #[test]
    fn override_replaces_offset() {
        assert_eq!(YOGINI.effective_offset(), 24);
        assert_eq!(CHATURVIMSATI.effective_offset(), 14);
        assert_eq!(ASHTOTTARI.effective_offset(), 5);
        // Ardra starts with Mangala
        assert_eq!(YOGINI.first_lord_index(5), 0);
        // Ardra starts Ashtottari with the Sun
        assert_eq!(ASHTOTTARI.first_lord_index(5), 0);
    }

    #[test]
    fn offset_wraps_below_zero() {
        // Ashwini with offset 5: (0 - 5 + 27) % 27 = 22 -> 22 % 8 = 6
        assert_eq!(ASHTOTTARI.first_lord_index(0), 6);
    }
}
