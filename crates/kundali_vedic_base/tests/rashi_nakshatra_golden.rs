//! Integration tests for rashi and nakshatra resolution.

use approx::assert_abs_diff_eq;
use kundali_vedic_base::{
    ALL_NAKSHATRAS_27, ALL_RASHIS, NAKSHATRA_SPAN_27, Nakshatra, PADA_SPAN, Rashi, VedicError,
    nakshatra_of, normalize_360, pada_position, rashi_of,
};

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_sweep_all_12() {
    for (i, r) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let (rashi, deg) = rashi_of(lon).unwrap();
        assert_eq!(rashi, *r, "rashi at {lon} deg");
        assert_abs_diff_eq!(deg, 15.0, epsilon = 1e-12);
    }
}

#[test]
fn rashi_boundaries() {
    assert_eq!(rashi_of(0.0).unwrap().0, Rashi::Mesha);
    assert_eq!(rashi_of(29.999_999).unwrap().0, Rashi::Mesha);
    assert_eq!(rashi_of(30.0).unwrap().0, Rashi::Vrishabha);
    assert_eq!(rashi_of(359.999).unwrap().0, Rashi::Meena);
}

// ---------------------------------------------------------------------------
// Nakshatra
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_sweep_all_27() {
    for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
        let lon = (i as f64 + 0.5) * NAKSHATRA_SPAN_27;
        let info = nakshatra_of(lon).unwrap();
        assert_eq!(info.nakshatra_index, i as u8, "nakshatra at {lon} deg");
        assert_eq!(info.nakshatra, *n);
        assert_abs_diff_eq!(info.fraction_consumed, 0.5, epsilon = 1e-9);
    }
}

#[test]
fn nakshatra_pada_boundaries() {
    let base = 2.0 * NAKSHATRA_SPAN_27;
    for pada in 1..=4u8 {
        let lon = base + (pada as f64 - 0.5) * PADA_SPAN;
        assert_eq!(nakshatra_of(lon).unwrap().pada, pada);
    }
}

#[test]
fn scenario_moon_in_nakshatra_24() {
    let info = nakshatra_of(320.2).unwrap();
    assert_eq!(info.nakshatra_index, 24);
    assert_eq!(info.nakshatra, Nakshatra::PurvaBhadrapada);
    assert_abs_diff_eq!(info.degrees_in_nakshatra, 0.2, epsilon = 1e-9);
    assert_eq!(info.pada, 1);
}

#[test]
fn fraction_stays_below_one() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let info = nakshatra_of(lon).unwrap();
        assert!((0.0..1.0).contains(&info.fraction_consumed), "{lon}");
        assert!((1..=4).contains(&info.pada));
        lon += 0.37;
    }
}

#[test]
fn pada_count_covers_108() {
    assert_eq!(pada_position(0.0).unwrap().0, 0);
    assert_eq!(pada_position(359.999).unwrap().0, 107);
    let (total, frac) = pada_position(PADA_SPAN * 53.25).unwrap();
    assert_eq!(total, 53);
    assert_abs_diff_eq!(frac, 0.25, epsilon = 1e-9);
}

#[test]
fn unnormalized_input_is_rejected_until_normalized() {
    assert!(matches!(
        nakshatra_of(-3.0),
        Err(VedicError::OutOfRange { .. })
    ));
    assert!(matches!(nakshatra_of(360.0), Err(VedicError::OutOfRange { .. })));
    let info = nakshatra_of(normalize_360(-3.0)).unwrap();
    assert_eq!(info.nakshatra, Nakshatra::Revati);
}
