//! Nakshatra (lunar mansion) lookup.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of 3 deg 20'.
//!
//! The fraction of the nakshatra already traversed by the Moon drives the
//! birth balance of every nakshatra-keyed dasha scheme.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Number of padas around the zodiac.
pub const TOTAL_PADAS: u8 = 108;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

/// Moon (or any point) position within its nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Sanskrit name, same as `nakshatra.name()`.
    pub name: &'static str,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Share of the nakshatra already traversed, [0, 1).
    pub fraction_consumed: f64,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Resolve a normalized longitude to its nakshatra, pada and consumed fraction.
///
/// The longitude must already lie in [0, 360); anything else (including
/// NaN) is reported as [`VedicError::OutOfRange`].
pub fn nakshatra_of(longitude: f64) -> Result<NakshatraInfo, VedicError> {
    if !(0.0..360.0).contains(&longitude) {
        return Err(VedicError::OutOfRange {
            what: "nakshatra longitude",
            value: longitude,
        });
    }
    let index = ((longitude / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let within = (longitude - index as f64 * NAKSHATRA_SPAN_27).max(0.0);
    let pada = ((within / PADA_SPAN).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS_27[index as usize];
    Ok(NakshatraInfo {
        nakshatra,
        nakshatra_index: index,
        name: nakshatra.name(),
        pada,
        fraction_consumed: within / NAKSHATRA_SPAN_27,
        degrees_in_nakshatra: within,
    })
}

/// 0-based pada count from Ashwini pada 1 (0..=107), plus the fraction of
/// that pada already traversed.
pub fn pada_position(longitude: f64) -> Result<(u8, f64), VedicError> {
    if !(0.0..360.0).contains(&longitude) {
        return Err(VedicError::OutOfRange {
            what: "pada longitude",
            value: longitude,
        });
    }
    let total = ((longitude / PADA_SPAN).floor() as u8).min(TOTAL_PADAS - 1);
    let within = (longitude - total as f64 * PADA_SPAN).max(0.0);
    Ok((total, within / PADA_SPAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_ashwini() {
        let info = nakshatra_of(0.0).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert!(info.fraction_consumed.abs() < 1e-15);
    }

    #[test]
    fn last_pada_of_revati() {
        let info = nakshatra_of(359.99).unwrap();
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.nakshatra_index, 26);
        assert_eq!(info.pada, 4);
        assert!(info.fraction_consumed < 1.0);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_of(PADA_SPAN - 1e-9).unwrap().pada, 1);
        assert_eq!(nakshatra_of(PADA_SPAN + 1e-9).unwrap().pada, 2);
        assert_eq!(nakshatra_of(3.0 * PADA_SPAN + 1e-9).unwrap().pada, 4);
    }

    #[test]
    fn moon_at_320_2() {
        let info = nakshatra_of(320.2).unwrap();
        assert_eq!(info.nakshatra_index, 24);
        let expected = (320.2 - 24.0 * NAKSHATRA_SPAN_27) / NAKSHATRA_SPAN_27;
        assert!((info.fraction_consumed - expected).abs() < 1e-12);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn rejects_unnormalized() {
        for bad in [-0.1, 360.0, 725.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(nakshatra_of(bad), Err(VedicError::OutOfRange { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn name_matches_enum() {
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            let info = nakshatra_of(i as f64 * NAKSHATRA_SPAN_27 + 1.0).unwrap();
            assert_eq!(info.name, n.name());
        }
    }

    #[test]
    fn pada_position_counts_from_ashwini() {
        assert_eq!(pada_position(0.0).unwrap().0, 0);
        assert_eq!(pada_position(359.99).unwrap().0, 107);
        let (p, f) = pada_position(PADA_SPAN * 9.5).unwrap();
        assert_eq!(p, 9);
        assert!((f - 0.5).abs() < 1e-9);
    }
}
