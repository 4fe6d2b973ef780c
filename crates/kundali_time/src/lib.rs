//! Civil calendar ↔ Julian Day conversions for the kundali engine.
//!
//! This crate provides:
//! - Proleptic Gregorian ↔ Julian Day arithmetic (noon-based, UTC)
//! - Timezone normalization of local civil time to UTC
//! - A validating [`TimeConverter`] with a configurable supported year range
//!
//! Julian Days are the internal time axis of every downstream calculation.

pub mod civil_time;
pub mod converter;
pub mod error;
pub mod julian;

pub use civil_time::CivilDateTime;
pub use converter::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, MAX_TZ_OFFSET_HOURS, TimeConverter};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, jd_to_centuries, jdn_to_calendar, julian_day_number, weekday_index,
};
