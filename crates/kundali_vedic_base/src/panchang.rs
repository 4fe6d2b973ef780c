//! Panchang: the five daily limbs (tithi, vara, nakshatra, yoga, karana)
//! derived from sidereal Sun and Moon longitudes and a Julian Day.

use kundali_time::weekday_index;
use serde::Serialize;

use crate::error::VedicError;
use crate::nakshatra::{NAKSHATRA_SPAN_27, NakshatraInfo, nakshatra_of};
use crate::util::{checked_longitude, normalize_360};

/// Moon-Sun elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Moon-Sun elongation covered by one karana (half tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// First karana value of the fixed terminal run.
const TERMINAL_KARANA_START: u8 = 57;

// ---------------------------------------------------------------------------
// Tithi and paksha
// ---------------------------------------------------------------------------

/// Names of tithis 1..=15 within a paksha; the 15th differs between pakshas.
const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shasthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half.
    Shukla,
    /// Waning half.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// "waxing" or "waning".
    pub const fn phase(self) -> &'static str {
        match self {
            Self::Shukla => "waxing",
            Self::Krishna => "waning",
        }
    }
}

/// Name of tithi `index` (1..=30).
pub fn tithi_name(index: u8) -> &'static str {
    match index {
        15 => "Purnima",
        30 => "Amavasya",
        i => TITHI_NAMES[((i.clamp(1, 30) - 1) % 15).min(13) as usize],
    }
}

// ---------------------------------------------------------------------------
// Vara
// ---------------------------------------------------------------------------

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday of a UTC Julian Day: `floor(jd + 1.5) mod 7`.
    pub fn from_jd(jd: f64) -> Self {
        ALL_VAARS[weekday_index(jd) as usize]
    }
}

// ---------------------------------------------------------------------------
// Yoga
// ---------------------------------------------------------------------------

/// The 27 luni-solar yogas.
pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

// ---------------------------------------------------------------------------
// Karana
// ---------------------------------------------------------------------------

/// The 11 karanas: 7 movable (cycling) and 4 fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kintughna,
}

/// Movable karanas in cycle order.
const CYCLIC_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

/// Fixed karanas at the end of the lunar month.
const TERMINAL_KARANAS: [Karana; 3] = [Karana::Shakuni, Karana::Chatushpada, Karana::Naga];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kintughna => "Kintughna",
        }
    }

    /// Karana for a half-tithi value `floor(elongation / 6)`.
    ///
    /// Value 0 is always Kintughna, values from 57 up are the fixed terminal
    /// karanas, everything between cycles through the seven movable ones.
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::Kintughna,
            v if v >= TERMINAL_KARANA_START => {
                TERMINAL_KARANAS[((v - TERMINAL_KARANA_START) as usize).min(2)]
            }
            v => CYCLIC_KARANAS[((v - 1) % 7) as usize],
        }
    }
}

// ---------------------------------------------------------------------------
// Panchang
// ---------------------------------------------------------------------------

/// The five limbs for one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangInfo {
    /// Moon - Sun, normalized.
    pub elongation_deg: f64,
    /// Tithi 1..=30.
    pub tithi_index: u8,
    pub tithi_name: &'static str,
    /// Tithi number within the paksha, 1..=15.
    pub tithi_in_paksha: u8,
    pub paksha: Paksha,
    pub vaar: Vaar,
    pub nakshatra: NakshatraInfo,
    /// Yoga 0..=26.
    pub yoga_index: u8,
    pub yoga_name: &'static str,
    /// Raw half-tithi value 0..=59.
    pub karana_value: u8,
    pub karana: Karana,
}

/// Compute the panchang from sidereal Sun/Moon longitudes and a UTC JD.
pub fn panchang(sun_lon: f64, moon_lon: f64, jd: f64) -> Result<PanchangInfo, VedicError> {
    let sun = checked_longitude(sun_lon)?;
    let moon = checked_longitude(moon_lon)?;
    if !jd.is_finite() {
        return Err(VedicError::InvalidInput("julian day must be finite"));
    }

    let diff = normalize_360(moon - sun);
    let tithi_index = ((diff / TITHI_SEGMENT_DEG).floor() as u8 + 1).min(30);
    let paksha = if diff < 180.0 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };

    let yoga_index = ((normalize_360(sun + moon) / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let karana_value = ((diff / KARANA_SEGMENT_DEG).floor() as u8).min(59);

    Ok(PanchangInfo {
        elongation_deg: diff,
        tithi_index,
        tithi_name: tithi_name(tithi_index),
        tithi_in_paksha: (tithi_index - 1) % 15 + 1,
        paksha,
        vaar: Vaar::from_jd(jd),
        nakshatra: nakshatra_of(moon)?,
        yoga_index,
        yoga_name: YOGA_NAMES[yoga_index as usize],
        karana_value,
        karana: Karana::from_value(karana_value),
    })
}
