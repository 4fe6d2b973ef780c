//! Civil calendar date/time with sub-second precision.
//!
//! `CivilDateTime` carries no timezone of its own: the offset travels
//! alongside it into [`crate::TimeConverter`], which normalizes to UTC.

use serde::{Deserialize, Serialize};

/// Calendar date and wall-clock time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Wall-clock time as decimal hours.
    pub fn decimal_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> f64 {
        self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
