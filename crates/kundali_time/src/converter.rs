//! Validated civil time ↔ Julian Day conversion with timezone normalization.

use serde::{Deserialize, Serialize};

use crate::civil_time::CivilDateTime;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};

/// Default lower bound of the supported year range.
pub const DEFAULT_MIN_YEAR: i32 = -5000;

/// Default upper bound of the supported year range.
pub const DEFAULT_MAX_YEAR: i32 = 5000;

/// Largest timezone offset accepted, in hours either side of UTC.
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// Converts civil date/time plus timezone offset into UTC Julian Days and back.
///
/// Holds only the supported year range, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeConverter {
    min_year: i32,
    max_year: i32,
}

impl Default for TimeConverter {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl TimeConverter {
    /// Create a converter accepting years in `min_year..=max_year`.
    pub fn new(min_year: i32, max_year: i32) -> Result<Self, TimeError> {
        if min_year > max_year {
            return Err(TimeError::invalid_date(format!(
                "year range {min_year}..={max_year} is empty"
            )));
        }
        Ok(Self { min_year, max_year })
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Check every calendar field and the timezone offset.
    pub fn validate(&self, civil: &CivilDateTime, tz_offset_hours: f64) -> Result<(), TimeError> {
        if civil.year < self.min_year || civil.year > self.max_year {
            return Err(TimeError::invalid_date(format!(
                "year {} outside supported range {}..={}",
                civil.year, self.min_year, self.max_year
            )));
        }
        if !(1..=12).contains(&civil.month) {
            return Err(TimeError::invalid_date(format!(
                "month {} outside 1..=12",
                civil.month
            )));
        }
        if !(1..=31).contains(&civil.day) {
            return Err(TimeError::invalid_date(format!(
                "day {} outside 1..=31",
                civil.day
            )));
        }
        let month_len = days_in_month(civil.year, civil.month);
        if civil.day > month_len {
            return Err(TimeError::invalid_date(format!(
                "day {} beyond end of {:04}-{:02} ({month_len} days)",
                civil.day, civil.year, civil.month
            )));
        }
        if civil.hour > 23 || civil.minute > 59 {
            return Err(TimeError::invalid_date(format!(
                "clock time {:02}:{:02} out of range",
                civil.hour, civil.minute
            )));
        }
        if !civil.second.is_finite() || !(0.0..60.0).contains(&civil.second) {
            return Err(TimeError::invalid_date(format!(
                "second {} outside [0, 60)",
                civil.second
            )));
        }
        if !tz_offset_hours.is_finite() || tz_offset_hours.abs() > MAX_TZ_OFFSET_HOURS {
            return Err(TimeError::invalid_date(format!(
                "timezone offset {tz_offset_hours}h outside ±{MAX_TZ_OFFSET_HOURS}h"
            )));
        }
        Ok(())
    }

    /// Convert a local civil date/time to a UTC Julian Day.
    ///
    /// `tz_offset_hours` is signed, east positive (e.g. +5.5 for IST).
    pub fn to_julian_day(
        &self,
        civil: &CivilDateTime,
        tz_offset_hours: f64,
    ) -> Result<f64, TimeError> {
        self.validate(civil, tz_offset_hours)?;
        let decimal_hours_utc = civil.decimal_hours() - tz_offset_hours;
        Ok(calendar_to_jd(
            civil.year,
            civil.month,
            civil.day,
            decimal_hours_utc,
        ))
    }

    /// Convert a UTC Julian Day back to local civil date/time.
    ///
    /// Inverse of [`Self::to_julian_day`] to the millisecond. Times within
    /// half a millisecond of local midnight come back as midnight of the
    /// following date.
    pub fn from_julian_day(&self, jd: f64, tz_offset_hours: f64) -> CivilDateTime {
        let local_jd = jd + tz_offset_hours / 24.0;
        let (year, month, day, seconds) = jd_to_calendar(local_jd);
        let seconds = seconds.clamp(0.0, SECONDS_PER_DAY);
        let hour = (seconds / 3600.0).floor() as u32;
        let minute = ((seconds % 3600.0) / 60.0).floor() as u32;
        let second = seconds % 60.0;
        CivilDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}
