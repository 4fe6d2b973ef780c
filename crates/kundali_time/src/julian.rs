//! Julian Day ↔ proleptic Gregorian calendar conversions.
//!
//! Julian Days are UTC-referenced with the day boundary at noon, so a JD
//! ending in `.0` is 12:00 UTC and one ending in `.5` is 00:00 UTC.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for invalid months.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number (integer day count, noon-based) of a Gregorian date.
///
/// Fliegel–Van Flandern style integer arithmetic with floor division so the
/// result stays correct for years before -4800 + 1.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Julian Day for a Gregorian date and decimal UTC hours.
///
/// `decimal_hours_utc` may fall outside `[0, 24)`; the excess simply moves
/// the result into the neighbouring day.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, decimal_hours_utc: f64) -> f64 {
    julian_day_number(year, month, day) as f64 + (decimal_hours_utc - 12.0) / 24.0
}

/// Inverse of [`julian_day_number`]: Gregorian `(year, month, day)`.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u32, day as u32)
}

/// Convert a Julian Day to `(year, month, day, seconds_of_day)`.
///
/// Seconds are rounded to the millisecond, which is coarser than the f64
/// resolution of a modern JD. A time in the last half-millisecond of a day
/// rounds up to a full day and is returned as 00:00:00 of the next date, so
/// a round trip preserves the instant rather than every calendar field.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, u32, f64) {
    let shifted = jd + 0.5;
    let mut jdn = shifted.floor() as i64;
    let mut seconds = ((shifted - shifted.floor()) * SECONDS_PER_DAY * 1e3).round() / 1e3;
    if seconds >= SECONDS_PER_DAY {
        seconds -= SECONDS_PER_DAY;
        jdn += 1;
    }
    let (year, month, day) = jdn_to_calendar(jdn);
    (year, month, day, seconds)
}

/// Weekday index of a Julian Day: 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert!((calendar_to_jd(2000, 1, 1, 12.0) - J2000_JD).abs() < 1e-12);
    }

    #[test]
    fn unix_epoch_midnight() {
        assert!((calendar_to_jd(1970, 1, 1, 0.0) - 2_440_587.5).abs() < 1e-12);
    }

    #[test]
    fn jdn_inverse() {
        for jdn in [0_i64, 1_721_426, 2_299_161, 2_451_545, 2_460_000] {
            let (y, m, d) = jdn_to_calendar(jdn);
            assert_eq!(julian_day_number(y, m, d), jdn, "jdn {jdn}");
        }
    }

    #[test]
    fn negative_year_roundtrip() {
        let jdn = julian_day_number(-4999, 3, 1);
        assert_eq!(jdn_to_calendar(jdn), (-4999, 3, 1));
    }

    #[test]
    fn jd_to_calendar_midnight() {
        let (y, m, d, s) = jd_to_calendar(2_440_587.5);
        assert_eq!((y, m, d), (1970, 1, 1));
        assert!(s.abs() < 1e-6);
    }

    #[test]
    fn jd_to_calendar_rolls_over_near_midnight() {
        let (y, m, d, s) = jd_to_calendar(2_440_588.5 - 1e-9);
        assert_eq!((y, m, d), (1970, 1, 2));
        assert!(s.abs() < 1e-3);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn weekday_of_j2000_is_saturday() {
        // 2000-01-01 was a Saturday.
        assert_eq!(weekday_index(J2000_JD), 6);
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
