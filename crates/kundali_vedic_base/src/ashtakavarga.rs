//! Ashtakavarga (benefic points) grids.
//!
//! For each of the 7 classical grahas, 8 contributors (7 grahas + Lagna)
//! mark benefic houses counted from their own sign. Summing the marks per
//! sign gives the graha's Bhinna Ashtakavarga; summing all seven grids
//! gives the Sarvashtakavarga.
//!
//! Totals across the 12 signs are constant for every chart:
//! Sun 48, Moon 49, Mars 39, Mercury 54, Jupiter 56, Venus 52, Saturn 39;
//! Sarvashtakavarga 337.

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::positions::ChartPositions;
use crate::rashi::RASHI_SPAN;
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Rules table (bitmask encoding)
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Benefic offsets: RULES[target][contributor] = bitmask of favourable house offsets.
///
/// target_graha: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn
/// contributor:  0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn, 7=Lagna
///
/// Offsets are 1-based (1=same rashi, 2=next rashi, ..., 12=previous rashi).
const RULES: [[u16; 8]; 7] = [
    // Sun (total: 48)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),     // from Sun
        bits(&[3, 6, 10, 11]),                    // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),       // from Mars
        bits(&[3, 5, 6, 9, 10, 11, 12]),          // from Mercury
        bits(&[5, 6, 9, 11]),                      // from Jupiter
        bits(&[6, 7, 12]),                         // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),       // from Saturn
        bits(&[3, 4, 6, 10, 11, 12]),             // from Lagna
    ],
    // Moon (total: 49)
    [
        bits(&[3, 6, 7, 8, 10, 11]),             // from Sun
        bits(&[1, 3, 6, 7, 10, 11]),             // from Moon
        bits(&[2, 3, 5, 6, 9, 10, 11]),          // from Mars
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),       // from Mercury
        bits(&[1, 4, 7, 8, 10, 11, 12]),          // from Jupiter
        bits(&[3, 4, 5, 7, 9, 10, 11]),           // from Venus
        bits(&[3, 5, 6, 11]),                      // from Saturn
        bits(&[3, 6, 10, 11]),                     // from Lagna
    ],
    // Mars (total: 39)
    [
        bits(&[3, 5, 6, 10, 11]),                 // from Sun
        bits(&[3, 6, 11]),                         // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),           // from Mars
        bits(&[3, 5, 6, 11]),                      // from Mercury
        bits(&[6, 10, 11, 12]),                    // from Jupiter
        bits(&[6, 8, 11, 12]),                     // from Venus
        bits(&[1, 4, 7, 8, 9, 10, 11]),           // from Saturn
        bits(&[1, 3, 6, 10, 11]),                  // from Lagna
    ],
    // Mercury (total: 54)
    [
        bits(&[5, 6, 9, 11, 12]),                 // from Sun
        bits(&[2, 4, 6, 8, 10, 11]),              // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),        // from Mars
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),       // from Mercury
        bits(&[6, 8, 11, 12]),                     // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),         // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),        // from Saturn
        bits(&[1, 2, 4, 6, 8, 10, 11]),            // from Lagna
    ],
    // Jupiter (total: 56)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),    // from Sun
        bits(&[2, 5, 7, 9, 11]),                   // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),            // from Mars
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),         // from Mercury
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),         // from Jupiter
        bits(&[2, 5, 6, 9, 10, 11]),               // from Venus
        bits(&[3, 5, 6, 12]),                       // from Saturn
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),     // from Lagna
    ],
    // Venus (total: 52)
    [
        bits(&[8, 11, 12]),                        // from Sun
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),     // from Moon
        bits(&[3, 4, 6, 9, 11, 12]),               // from Mars
        bits(&[3, 5, 6, 9, 11]),                    // from Mercury
        bits(&[5, 8, 9, 10, 11]),                   // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),      // from Venus
        bits(&[3, 4, 5, 8, 9, 10, 11]),             // from Saturn
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),           // from Lagna
    ],
    // Saturn (total: 39)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),           // from Sun
        bits(&[3, 6, 11]),                          // from Moon
        bits(&[3, 5, 6, 10, 11, 12]),              // from Mars
        bits(&[6, 8, 9, 10, 11, 12]),              // from Mercury
        bits(&[5, 6, 11, 12]),                      // from Jupiter
        bits(&[6, 11, 12]),                         // from Venus
        bits(&[3, 5, 6, 11]),                       // from Saturn
        bits(&[1, 3, 4, 6, 10, 11]),               // from Lagna
    ],
];

/// Expected grid totals per graha, Sun..Saturn.
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

/// Expected Sarvashtakavarga total.
pub const SAV_TOTAL: u16 = 337;

/// Number of contributors: 7 grahas plus the Ascendant.
pub const CONTRIBUTORS: usize = 8;

// ---------------------------------------------------------------------------
// Grids
// ---------------------------------------------------------------------------

/// Benefic points per sign for one target graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AshtakavargaGrid {
    pub graha: Graha,
    /// Points per sign, index 0 = Mesha; each value in 0..=8.
    pub points: [u8; 12],
}

impl AshtakavargaGrid {
    /// Total points across all 12 signs.
    pub fn total(&self) -> u8 {
        self.points.iter().sum()
    }

    /// Points in a 1-based sign (1 = Mesha).
    pub fn points_in_sign(&self, sign: u8) -> Option<u8> {
        self.points.get((sign as usize).checked_sub(1)?).copied()
    }
}

/// 1-based sign (1..=12) of a longitude.
fn sign_of(longitude: f64) -> u8 {
    ((normalize_360(longitude) / RASHI_SPAN).floor() as u8).min(11) + 1
}

fn check_ascendant(ascendant_sign: u8) -> Result<(), VedicError> {
    if (1..=12).contains(&ascendant_sign) {
        Ok(())
    } else {
        Err(VedicError::OutOfRange {
            what: "ascendant sign",
            value: ascendant_sign as f64,
        })
    }
}

/// Contributor signs (1-based) in RULES order: Sun..Saturn, then Lagna.
fn contributor_signs(
    positions: &ChartPositions,
    ascendant_sign: u8,
) -> Result<[u8; CONTRIBUTORS], VedicError> {
    let mut signs = [ascendant_sign; CONTRIBUTORS];
    for (i, g) in SAPTA_GRAHAS.iter().enumerate() {
        signs[i] = sign_of(positions.longitude(*g)?);
    }
    Ok(signs)
}

fn grid_from_signs(target: Graha, signs: &[u8; CONTRIBUTORS]) -> AshtakavargaGrid {
    let rules = &RULES[target.index() as usize];
    let mut points = [0u8; 12];
    for (mask, &reference) in rules.iter().zip(signs.iter()) {
        for offset in 1u8..=12 {
            if (mask >> offset) & 1 == 1 {
                let bin = (reference as usize + offset as usize + 10) % 12;
                points[bin] += 1;
            }
        }
    }
    AshtakavargaGrid {
        graha: target,
        points,
    }
}

/// Bhinna Ashtakavarga grid for `target`.
///
/// `positions` must hold sidereal longitudes for the seven classical grahas;
/// `ascendant_sign` is 1-based (1 = Mesha).
pub fn ashtakavarga(
    target: Graha,
    positions: &ChartPositions,
    ascendant_sign: u8,
) -> Result<AshtakavargaGrid, VedicError> {
    if !target.is_sapta() {
        return Err(VedicError::UnsupportedPlanet(target));
    }
    check_ascendant(ascendant_sign)?;
    let signs = contributor_signs(positions, ascendant_sign)?;
    Ok(grid_from_signs(target, &signs))
}

/// Grids for all seven classical grahas, Sun..Saturn.
pub fn all_ashtakavargas(
    positions: &ChartPositions,
    ascendant_sign: u8,
) -> Result<[AshtakavargaGrid; 7], VedicError> {
    check_ascendant(ascendant_sign)?;
    let signs = contributor_signs(positions, ascendant_sign)?;
    Ok(SAPTA_GRAHAS.map(|g| grid_from_signs(g, &signs)))
}

/// Sarvashtakavarga: the seven grids summed per sign.
pub fn sarvashtakavarga(
    positions: &ChartPositions,
    ascendant_sign: u8,
) -> Result<[u16; 12], VedicError> {
    let grids = all_ashtakavargas(positions, ascendant_sign)?;
    let mut totals = [0u16; 12];
    for grid in &grids {
        for (t, &p) in totals.iter_mut().zip(grid.points.iter()) {
            *t += p as u16;
        }
    }
    Ok(totals)
}
