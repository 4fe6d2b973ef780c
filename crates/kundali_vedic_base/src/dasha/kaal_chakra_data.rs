//! Kalachakra dasha tables: fixed sign durations and the four Savya paths.
//!
//! Each path is a sequence of 9 signs. A Moon pada selects a path with
//! `floor(total_padas / 9) mod 4`.

use serde::Serialize;

use crate::rashi::Rashi;

/// Fixed sign durations in years (indexed by rashi 0-11: Mesha..Meena).
pub const KCD_RASHI_YEARS: [f64; 12] = [
    7.0,  // Mesha
    16.0, // Vrishabha
    9.0,  // Mithuna
    21.0, // Karka
    5.0,  // Simha
    9.0,  // Kanya
    16.0, // Tula
    7.0,  // Vrischika
    10.0, // Dhanu
    4.0,  // Makara
    4.0,  // Kumbha
    10.0, // Meena
];

/// Signs per Savya path.
pub const SIGNS_PER_PATH: usize = 9;

use Rashi::*;

/// The four Savya paths, in pada-cycle order.
pub const SAVYA_PATHS: [[Rashi; SIGNS_PER_PATH]; 4] = [
    // span 100
    [Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu],
    // span 85
    [Makara, Kumbha, Meena, Vrischika, Tula, Kanya, Karka, Simha, Mithuna],
    // span 83
    [Vrishabha, Mesha, Meena, Kumbha, Makara, Dhanu, Mesha, Vrishabha, Mithuna],
    // span 86
    [Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara, Kumbha, Meena],
];

/// Sign-keyed scheme definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KalachakraConfig {
    pub rashi_years: [f64; 12],
    pub paths: [[Rashi; SIGNS_PER_PATH]; 4],
}

impl KalachakraConfig {
    /// Full duration of one sign, in years.
    pub fn years_of(&self, rashi: Rashi) -> f64 {
        self.rashi_years[rashi.index() as usize]
    }

    /// Path selected by a total pada index (0..=107).
    pub fn path_index(total_padas: u8) -> usize {
        (total_padas as usize / SIGNS_PER_PATH) % 4
    }

    /// Sum of the sign durations along one path.
    pub fn path_span(&self, path: usize) -> f64 {
        self.paths[path % 4].iter().map(|&r| self.years_of(r)).sum()
    }
}

pub const KALACHAKRA: KalachakraConfig = KalachakraConfig {
    rashi_years: KCD_RASHI_YEARS,
    paths: SAVYA_PATHS,
};
