//! Varga (divisional chart) projection.
//!
//! Each varga divides the 30-degree rashi span into N equal sectors and maps
//! each sector to a target rashi. Most divisions use the generic
//! `(source * N + sector) mod 12` progression; Hora, Drekkana, Navamsha and
//! Dashamsha have their own start rules.

use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{RASHI_SPAN, Rashi};
use crate::util::checked_longitude;

/// Navamsha start sign by source sign: fire → Mesha, earth → Makara,
/// air → Tula, water → Karka.
const NAVAMSHA_START: [u8; 12] = [0, 9, 6, 3, 0, 9, 6, 3, 0, 9, 6, 3];

/// Dashamsha offset applied to even signs.
const DASHAMSHA_EVEN_OFFSET: u8 = 8;

/// Hora boundary within a sign, degrees.
const HORA_SPLIT_DEG: f64 = 15.0;

/// Projected position in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPosition {
    pub division: u16,
    pub source_sign: Rashi,
    pub target_sign: Rashi,
    /// Position scaled into the 30-degree target sign, [0, 30).
    pub degrees_in_sign: f64,
}

impl VargaPosition {
    /// Absolute longitude in the divisional chart.
    pub fn longitude(&self) -> f64 {
        self.target_sign.index() as f64 * RASHI_SPAN + self.degrees_in_sign
    }
}

/// Target sign index for a source sign and 0-based sector.
fn target_sign_index(division: u16, source: u8, sector: u16, arc_in_sign: f64) -> u8 {
    let odd = Rashi::from_index(source).is_odd();
    let stepped = |start: u8| ((start as u16 + sector) % 12) as u8;
    match division {
        2 => {
            let first_half = arc_in_sign <= HORA_SPLIT_DEG;
            // Sun's sign Simha, Moon's sign Karka
            if odd == first_half { 4 } else { 3 }
        }
        3 => ((source as u16 + sector * 4) % 12) as u8,
        9 => stepped(NAVAMSHA_START[source as usize]),
        10 => {
            if odd {
                stepped(source)
            } else {
                stepped((source + DASHAMSHA_EVEN_OFFSET) % 12)
            }
        }
        n => ((source as u32 * n as u32 + sector as u32) % 12) as u8,
    }
}

/// Project a sidereal longitude into divisional chart `division`.
pub fn varga_position(longitude: f64, division: u16) -> Result<VargaPosition, VedicError> {
    if division == 0 {
        return Err(VedicError::InvalidDivision(division));
    }
    let lon = checked_longitude(longitude)?;
    let source = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let arc = lon - source as f64 * RASHI_SPAN;
    let varga_arc = RASHI_SPAN / division as f64;
    let sector = ((arc / varga_arc).floor() as u16).min(division - 1);

    let target = target_sign_index(division, source, sector, arc);
    let within_sector = (arc - sector as f64 * varga_arc).max(0.0);
    let degrees_in_sign = (within_sector / varga_arc * RASHI_SPAN).min(RASHI_SPAN);

    Ok(VargaPosition {
        division,
        source_sign: Rashi::from_index(source),
        target_sign: Rashi::from_index(target),
        degrees_in_sign: if degrees_in_sign >= RASHI_SPAN { 0.0 } else { degrees_in_sign },
    })
}

/// Classical name of a divisional chart, if it has one.
pub const fn varga_name(division: u16) -> Option<&'static str> {
    Some(match division {
        1 => "Rashi",
        2 => "Hora",
        3 => "Drekkana",
        4 => "Chaturthamsha",
        7 => "Saptamsha",
        9 => "Navamsha",
        10 => "Dashamsha",
        12 => "Dwadashamsha",
        16 => "Shodashamsha",
        20 => "Vimshamsha",
        24 => "Chaturvimshamsha",
        27 => "Bhamsha",
        30 => "Trimshamsha",
        40 => "Khavedamsha",
        45 => "Akshavedamsha",
        60 => "Shashtiamsha",
        _ => return None,
    })
}
