//! End-to-end scenarios through the `Engine` facade.

use approx::assert_abs_diff_eq;
use kundali_rs::*;

/// 1990-01-15 12:00 UTC.
const BIRTH_JD: f64 = 2_447_907.0;

fn chart() -> ChartPositions {
    ChartPositions::new()
        .with(Graha::Surya, 270.5, 1.019)
        .with(Graha::Chandra, 320.2, 13.2)
        .with(Graha::Mangal, 228.1, 0.66)
        .with(Graha::Buddh, 262.4, -0.35)
        .with(Graha::Guru, 65.9, -0.11)
        .with(Graha::Shukra, 282.3, -0.42)
        .with(Graha::Shani, 261.0, 0.12)
}

#[test]
fn civil_time_roundtrip_in_ist() {
    let engine = Engine::default();
    let civil = CivilDateTime::new(1990, 1, 15, 17, 30, 0.0);
    let jd = engine.to_julian_day(&civil, 5.5).unwrap();
    assert_abs_diff_eq!(jd, BIRTH_JD, epsilon = 1e-9);
    let back = engine.from_julian_day(jd, 5.5);
    assert_eq!((back.year, back.month, back.day, back.hour, back.minute), (1990, 1, 15, 17, 30));
}

#[test]
fn invalid_date_surfaces_as_time_error() {
    let engine = Engine::default();
    let err = engine
        .to_julian_day(&CivilDateTime::date(1990, 2, 30), 5.5)
        .unwrap_err();
    assert!(matches!(err, KundaliError::Time(TimeError::InvalidDate(_))));
}

#[test]
fn birth_scenario_panchang_and_dasha() {
    let engine = Engine::default();

    let p = engine.panchang(255.5, 320.2, BIRTH_JD).unwrap();
    assert_eq!(p.tithi_index, 6);
    assert_eq!(p.paksha, Paksha::Shukla);
    assert_eq!(p.nakshatra.nakshatra_index, 24);
    assert_eq!(p.karana, Karana::Kaulava);

    let tl = engine
        .dasha_timeline("Vimshottari", 320.2, BIRTH_JD, None)
        .unwrap();
    assert_eq!(tl.periods[0].lord, DashaLord::Graha(Graha::Guru));
    assert!(tl.periods[0].duration_years < 16.0);
    let horizon = BIRTH_JD + 120.0 * engine.config().dasha.year_days;
    assert_abs_diff_eq!(tl.horizon_jd, horizon, epsilon = 1e-6);
    assert!(tl.periods.last().unwrap().end_jd >= horizon);

    let chain = tl.active_chain(BIRTH_JD + 365.0);
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].lord, DashaLord::Graha(Graha::Guru));
}

#[test]
fn every_scheme_by_key() {
    let engine = Engine::default();
    for key in [
        "vimshottari",
        "ashtottari",
        "yogini",
        "shodashottari",
        "dwisaptati",
        "panchottari",
        "dwadashottari",
        "chaturvimsati",
        "shattrimshat",
        "kalachakra",
    ] {
        let tl = engine.dasha_timeline(key, 320.2, BIRTH_JD, Some(50.0)).unwrap();
        assert_eq!(tl.system.key(), key);
        assert!(!tl.periods.is_empty());
    }
    assert!(matches!(
        engine.dasha_timeline("chara", 320.2, BIRTH_JD, None),
        Err(KundaliError::Vedic(VedicError::UnsupportedDashaSystem(_)))
    ));
}

#[test]
fn chart_strengths() {
    let engine = Engine::default();
    let positions = chart();
    let grid = engine.ashtakavarga(Graha::Guru, &positions, 4).unwrap();
    assert_eq!(grid.total(), 56);

    let cusps: [f64; 12] = std::array::from_fn(|i| 105.0 + 30.0 * i as f64);
    let sb = engine
        .shadbala(
            Graha::Guru,
            &positions,
            320.2,
            270.5,
            &cusps,
            &BirthContext { is_day_birth: false },
        )
        .unwrap();
    assert_abs_diff_eq!(sb.pinda * 60.0, sb.total_virupas, epsilon = 1e-9);
    // Jupiter at 65.9 is 29.1 degrees from exaltation at 95
    assert_abs_diff_eq!(sb.breakdown.sthana, (180.0 - 29.1) / 3.0 + 30.0, epsilon = 1e-9);
}

#[test]
fn muhurta_and_varga() {
    let engine = Engine::default();
    let m = engine
        .muhurta_windows(BIRTH_JD - 0.24, BIRTH_JD + 0.23, BIRTH_JD)
        .unwrap();
    assert!(m.rahu_kaal.start_jd > BIRTH_JD - 0.24);
    assert!(matches!(
        engine.muhurta_windows(BIRTH_JD, BIRTH_JD - 0.5, BIRTH_JD),
        Err(KundaliError::Vedic(VedicError::InvalidInterval { .. }))
    ));

    let d9 = engine.varga_position(320.2, 9).unwrap();
    assert_eq!(d9.target_sign, Rashi::Mesha);
    assert!(matches!(
        engine.varga_position(320.2, 0),
        Err(KundaliError::Vedic(VedicError::InvalidDivision(0)))
    ));
}

#[test]
fn ephemeris_to_dasha_pipeline() {
    let engine = Engine::default();
    let birth = engine
        .resolve_birth(
            &CityRegistry::with_defaults(),
            "Varanasi",
            &CivilDateTime::new(1990, 1, 15, 17, 30, 0.0),
        )
        .unwrap();
    assert_abs_diff_eq!(birth.jd, BIRTH_JD, epsilon = 1e-9);

    let positions = engine
        .sidereal_positions(
            &MeanElementsEphemeris,
            birth.jd,
            &[Graha::Surya, Graha::Chandra, Graha::Rahu, Graha::Ketu],
        )
        .unwrap();
    let moon = positions.longitude(Graha::Chandra).unwrap();
    let sun = positions.longitude(Graha::Surya).unwrap();
    assert!((0.0..360.0).contains(&moon));

    let info = engine.nakshatra_of(moon).unwrap();
    let p = engine.panchang(sun, moon, birth.jd).unwrap();
    assert_eq!(p.nakshatra, info);

    let tl = engine.dasha_timeline("yogini", moon, birth.jd, None).unwrap();
    assert_abs_diff_eq!(tl.periods[0].start_jd, birth.jd, epsilon = 1e-12);
}

#[test]
fn engine_shared_across_threads() {
    let engine = Engine::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = &engine;
                s.spawn(move || {
                    engine
                        .dasha_timeline("vimshottari", 40.0 * i as f64, BIRTH_JD, None)
                        .map(|tl| tl.periods.len())
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap().unwrap() >= 9);
        }
    });
}
