//! Vedic planet (graha) enum and rashi lordship.
//!
//! The 9 grahas key every per-planet table in this crate. Tables that only
//! cover the 7 classical planets are indexed by [`Graha::index`] and sized 7.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the seven classical planets.
    pub const fn is_sapta(self) -> bool {
        self.index() < 7
    }

    /// Natural malefics: Sun, Mars, Saturn and the nodes.
    pub const fn is_natural_malefic(self) -> bool {
        matches!(
            self,
            Self::Surya | Self::Mangal | Self::Shani | Self::Rahu | Self::Ketu
        )
    }

    /// Look up a graha by English or Sanskrit name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_GRAHAS.into_iter().find(|g| {
            g.english_name().eq_ignore_ascii_case(name) || g.name().eq_ignore_ascii_case(name)
        })
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment:
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
