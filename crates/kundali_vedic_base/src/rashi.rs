//! Rashi (zodiac sign) lookup.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::checked_longitude;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Odd signs in the 1-based count (Mesha, Mithuna, ...), i.e. even 0-based index.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Rashi and degrees within it for a longitude; non-finite input is rejected.
pub fn rashi_of(longitude: f64) -> Result<(Rashi, f64), VedicError> {
    let lon = checked_longitude(longitude)?;
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    Ok((Rashi::from_index(idx), lon - idx as f64 * RASHI_SPAN))
}
