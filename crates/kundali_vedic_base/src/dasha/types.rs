//! Core types for dasha (planetary period) calculations.
//!
//! A timeline is an owned tree: each Mahadasha owns its Antardashas, each
//! Antardasha owns its Pratyantardashas. Nothing points back up the tree.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Depth of the generated tree for planet-keyed schemes.
pub const MAX_DASHA_DEPTH: usize = 3;

/// Safety cap on Mahadashas in one timeline.
pub const MAX_MAHADASHAS: usize = 10_000;

/// Yogini names (0-indexed), in dasha order.
pub const YOGINI_NAMES: [&str; 8] = [
    "Mangala", "Pingala", "Dhanya", "Bhramari", "Bhadrika", "Ulka", "Siddha", "Sankata",
];

/// Graha ruling each yogini, parallel to [`YOGINI_NAMES`].
pub const YOGINI_GRAHAS: [Graha; 8] = [
    Graha::Chandra,
    Graha::Surya,
    Graha::Guru,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Shani,
    Graha::Shukra,
    Graha::Rahu,
];

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// 0 for Mahadasha.
    pub const fn depth(self) -> usize {
        self as usize
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// What rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DashaLord {
    Graha(Graha),
    /// Yogini index 0..=7, see [`YOGINI_NAMES`].
    Yogini(u8),
    /// Sign-keyed schemes (Kalachakra).
    Rashi(Rashi),
}

impl DashaLord {
    pub fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Yogini(y) => YOGINI_NAMES[(y % 8) as usize],
            Self::Rashi(r) => r.name(),
        }
    }

    /// Ruling graha: the graha itself, a yogini's planet, or a sign's lord.
    pub const fn graha(self) -> Graha {
        match self {
            Self::Graha(g) => g,
            Self::Yogini(y) => YOGINI_GRAHAS[(y % 8) as usize],
            Self::Rashi(r) => rashi_lord(r),
        }
    }
}

impl fmt::Display for DashaLord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a dasha tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: DashaLord,
    pub level: DashaLevel,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub duration_years: f64,
    /// Sub-periods in order; empty at the deepest level.
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    /// Sum of the children's durations in years.
    pub fn children_duration_years(&self) -> f64 {
        self.children.iter().map(|c| c.duration_years).sum()
    }
}

/// Supported dasha schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DashaSystem {
    Vimshottari,
    Ashtottari,
    Yogini,
    Shodashottari,
    Dwisaptati,
    Panchottari,
    Dwadashottari,
    Chaturvimsati,
    Shattrimshat,
    Kalachakra,
}

/// All schemes in order.
pub const ALL_DASHA_SYSTEMS: [DashaSystem; 10] = [
    DashaSystem::Vimshottari,
    DashaSystem::Ashtottari,
    DashaSystem::Yogini,
    DashaSystem::Shodashottari,
    DashaSystem::Dwisaptati,
    DashaSystem::Panchottari,
    DashaSystem::Dwadashottari,
    DashaSystem::Chaturvimsati,
    DashaSystem::Shattrimshat,
    DashaSystem::Kalachakra,
];

impl DashaSystem {
    /// Lower-case lookup key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vimshottari => "vimshottari",
            Self::Ashtottari => "ashtottari",
            Self::Yogini => "yogini",
            Self::Shodashottari => "shodashottari",
            Self::Dwisaptati => "dwisaptati",
            Self::Panchottari => "panchottari",
            Self::Dwadashottari => "dwadashottari",
            Self::Chaturvimsati => "chaturvimsati",
            Self::Shattrimshat => "shattrimshat",
            Self::Kalachakra => "kalachakra",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Ashtottari => "Ashtottari",
            Self::Yogini => "Yogini",
            Self::Shodashottari => "Shodashottari",
            Self::Dwisaptati => "Dwisaptati Sama",
            Self::Panchottari => "Panchottari",
            Self::Dwadashottari => "Dwadashottari",
            Self::Chaturvimsati => "Chaturvimsati Sama",
            Self::Shattrimshat => "Shat-Trimsha Sama",
            Self::Kalachakra => "Kalachakra",
        }
    }
}

impl FromStr for DashaSystem {
    type Err = VedicError;

    /// Case-insensitive match on [`DashaSystem::key`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ALL_DASHA_SYSTEMS
            .into_iter()
            .find(|sys| sys.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| VedicError::UnsupportedDashaSystem(s.to_string()))
    }
}

/// Generated timeline for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub system: DashaSystem,
    pub birth_jd: f64,
    /// `birth_jd + horizon_years * year_days`; the last period may run past it.
    pub horizon_jd: f64,
    /// Mahadashas in chronological order.
    pub periods: Vec<DashaPeriod>,
}
