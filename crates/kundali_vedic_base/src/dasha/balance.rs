//! Birth balance: how much of the first period remains at birth.
//!
//! - Nakshatra-keyed schemes use the Moon's position within its nakshatra.
//! - Kalachakra uses the Moon's position within its pada.

use crate::error::VedicError;
use crate::nakshatra::{nakshatra_of, pada_position};
use crate::util::checked_longitude;

/// Nakshatra birth balance for a planet-keyed scheme.
///
/// Returns `(nakshatra_index, balance_years, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra
/// - `balance_years`: remaining years of the entry lord's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(
    moon_sidereal_lon: f64,
    entry_period_years: f64,
) -> Result<(u8, f64, f64), VedicError> {
    let lon = checked_longitude(moon_sidereal_lon)?;
    let info = nakshatra_of(lon)?;
    let balance = entry_period_years * (1.0 - info.fraction_consumed);
    Ok((info.nakshatra_index, balance, info.fraction_consumed))
}

/// Pada birth position for Kalachakra.
///
/// Returns `(total_padas, elapsed_fraction)` with `total_padas` in 0..=107.
pub fn pada_birth_balance(moon_sidereal_lon: f64) -> Result<(u8, f64), VedicError> {
    let lon = checked_longitude(moon_sidereal_lon)?;
    pada_position(lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::{NAKSHATRA_SPAN_27, PADA_SPAN};

    #[test]
    fn balance_at_start_of_nakshatra() {
        let (idx, balance, frac) = nakshatra_birth_balance(0.0, 7.0).unwrap();
        assert_eq!(idx, 0);
        assert!((balance - 7.0).abs() < 1e-12);
        assert!(frac.abs() < 1e-12);
    }

    #[test]
    fn balance_at_midpoint() {
        let mid = NAKSHATRA_SPAN_27 / 2.0;
        let (idx, balance, frac) = nakshatra_birth_balance(mid, 7.0).unwrap();
        assert_eq!(idx, 0);
        assert!((frac - 0.5).abs() < 1e-10);
        assert!((balance - 3.5).abs() < 1e-9);
    }

    #[test]
    fn balance_near_end() {
        let (_, balance, _) = nakshatra_birth_balance(NAKSHATRA_SPAN_27 - 0.001, 7.0).unwrap();
        assert!(balance < 0.001);
    }

    #[test]
    fn rohini_start() {
        let (idx, balance, frac) = nakshatra_birth_balance(40.0, 10.0).unwrap();
        assert_eq!(idx, 3);
        assert!(frac.abs() < 1e-10);
        assert!((balance - 10.0).abs() < 1e-9);
    }

    #[test]
    fn negative_longitude_wraps() {
        // -1 -> 359 -> Revati
        let (idx, _, _) = nakshatra_birth_balance(-1.0, 17.0).unwrap();
        assert_eq!(idx, 26);
    }

    #[test]
    fn nan_rejected() {
        assert!(matches!(
            nakshatra_birth_balance(f64::NAN, 7.0),
            Err(VedicError::InvalidLongitude(_))
        ));
        assert!(matches!(
            pada_birth_balance(f64::INFINITY),
            Err(VedicError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn pada_midpoint() {
        let (total, frac) = pada_birth_balance(PADA_SPAN * 9.5).unwrap();
        assert_eq!(total, 9);
        assert!((frac - 0.5).abs() < 1e-9);
    }
}
