//! Muhurta windows: inauspicious kaal periods and Abhijit muhurta.
//!
//! Daylight (sunrise to sunset) is split into 8 equal portions. Rahu Kaal,
//! Gulika Kaal and Yamaganda Kaal each occupy one portion, chosen by a fixed
//! weekday table.

use kundali_time::weekday_index;
use serde::Serialize;

use crate::error::VedicError;

/// Number of equal day portions used by the kaal windows.
pub const DAY_PORTIONS: u8 = 8;

/// Number of muhurtas in the daylight span.
pub const DAY_MUHURTAS: u8 = 15;

/// Rahu Kaal portion per weekday (0=Sunday .. 6=Saturday).
pub const RAHU_KAAL_PORTION: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];

/// Gulika Kaal portion per weekday.
pub const GULIKA_KAAL_PORTION: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Yamaganda Kaal portion per weekday.
pub const YAMAGANDA_KAAL_PORTION: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

/// Abhijit is the 8th of 15 day muhurtas (0-based 7).
const ABHIJIT_MUHURTA: u8 = 7;

/// A time window as UTC Julian Days, start inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TimeWindow {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// All windows for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuhurtaWindows {
    /// Weekday used for the lookups, 0 = Sunday.
    pub weekday: u8,
    pub rahu_kaal: TimeWindow,
    pub gulika_kaal: TimeWindow,
    pub yamaganda_kaal: TimeWindow,
    pub abhijit: TimeWindow,
}

/// Split `[start, end]` into `parts` equal pieces and return piece `index`.
fn portion(start: f64, end: f64, parts: u8, index: u8) -> TimeWindow {
    let len = (end - start) / parts as f64;
    let s = start + index as f64 * len;
    TimeWindow {
        start_jd: s,
        end_jd: s + len,
    }
}

/// Compute kaal windows and Abhijit for the day containing `jd`.
///
/// `jd` only selects the weekday; the windows come from sunrise/sunset.
pub fn muhurta_windows(
    sunrise_jd: f64,
    sunset_jd: f64,
    jd: f64,
) -> Result<MuhurtaWindows, VedicError> {
    if !(sunrise_jd.is_finite() && sunset_jd.is_finite()) || sunset_jd <= sunrise_jd {
        return Err(VedicError::InvalidInterval {
            start: sunrise_jd,
            end: sunset_jd,
        });
    }
    if !jd.is_finite() {
        return Err(VedicError::InvalidInput("julian day must be finite"));
    }
    let weekday = weekday_index(jd);
    let w = weekday as usize;
    Ok(MuhurtaWindows {
        weekday,
        rahu_kaal: portion(sunrise_jd, sunset_jd, DAY_PORTIONS, RAHU_KAAL_PORTION[w]),
        gulika_kaal: portion(sunrise_jd, sunset_jd, DAY_PORTIONS, GULIKA_KAAL_PORTION[w]),
        yamaganda_kaal: portion(sunrise_jd, sunset_jd, DAY_PORTIONS, YAMAGANDA_KAAL_PORTION[w]),
        abhijit: portion(sunrise_jd, sunset_jd, DAY_MUHURTAS, ABHIJIT_MUHURTA),
    })
}
