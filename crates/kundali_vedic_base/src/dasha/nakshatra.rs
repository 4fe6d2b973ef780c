//! Generic nakshatra-keyed dasha engine (serves all nine planet-keyed schemes).
//!
//! The Moon's nakshatra, shifted by the scheme offset, picks the first lord.
//! The first Mahadasha keeps only the unelapsed share of its full duration;
//! later ones run in full, cycling the lord order until the horizon is
//! reached. Each Mahadasha carries its Antardasha and Pratyantardasha tree.

use tracing::{debug, trace};

use crate::error::VedicError;
use crate::nakshatra::nakshatra_of;
use crate::util::checked_longitude;

use super::balance::nakshatra_birth_balance;
use super::nakshatra_data::DashaSystemConfig;
use super::subperiod::build_period;
use super::types::{DashaLevel, DashaLord, DashaPeriod, MAX_MAHADASHAS};

// ---------------------------------------------------------------------------
// Mahadasha sequence
// ---------------------------------------------------------------------------

/// Mahadasha lords with their durations (years), first one truncated by the
/// birth balance, until the running total reaches `horizon_years`.
pub fn nakshatra_mahadasha_sequence(
    moon_sidereal_lon: f64,
    config: &DashaSystemConfig,
    horizon_years: f64,
) -> Result<Vec<(DashaLord, f64)>, VedicError> {
    if !(horizon_years.is_finite() && horizon_years > 0.0) {
        return Err(VedicError::InvalidInput("dasha horizon must be positive"));
    }
    let lon = checked_longitude(moon_sidereal_lon)?;
    let first = config.first_lord_index(nakshatra_of(lon)?.nakshatra_index);
    let (nak_idx, balance, fraction) = nakshatra_birth_balance(lon, config.lord_years[first])?;
    let n = config.lord_order.len();

    let mut sequence = Vec::new();
    let mut elapsed = 0.0;
    let mut step = 0;
    while elapsed < horizon_years {
        if sequence.len() >= MAX_MAHADASHAS {
            return Err(VedicError::InvalidInput(
                "dasha horizon would exceed MAX_MAHADASHAS",
            ));
        }
        let idx = (first + step) % n;
        let full = config.lord_years[idx];
        let years = if step == 0 { balance } else { full };
        sequence.push((config.lord_order[idx], years));
        elapsed += years;
        step += 1;
    }
    trace!(
        system = config.system.key(),
        nakshatra = nak_idx,
        first_lord = %config.lord_order[first],
        fraction,
        "resolved entry lord"
    );
    Ok(sequence)
}

// ---------------------------------------------------------------------------
// Full tree
// ---------------------------------------------------------------------------

/// Mahadashas from birth to the horizon, each subdivided to Pratyantardasha.
pub fn nakshatra_periods(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &DashaSystemConfig,
    horizon_years: f64,
    year_days: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let sequence = nakshatra_mahadasha_sequence(moon_sidereal_lon, config, horizon_years)?;
    let mut cursor = birth_jd;
    let periods: Vec<DashaPeriod> = sequence
        .into_iter()
        .map(|(lord, years)| {
            let period = build_period(
                lord,
                DashaLevel::Mahadasha,
                cursor,
                years,
                config,
                year_days,
            );
            trace!(
                lord = %period.lord,
                start_jd = period.start_jd,
                end_jd = period.end_jd,
                "mahadasha"
            );
            cursor = period.end_jd;
            period
        })
        .collect();
    debug!(
        system = config.system.key(),
        mahadashas = periods.len(),
        end_jd = cursor,
        "generated nakshatra dasha"
    );
    Ok(periods)
}
