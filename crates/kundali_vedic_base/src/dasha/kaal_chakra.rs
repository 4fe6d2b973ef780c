//! Kalachakra dasha: sign-keyed periods along the Savya paths.
//!
//! The Moon's pada selects a 9-sign path. The first sign keeps only the
//! unelapsed share of the pada; the path is then walked in full, and once
//! exhausted the next path in cycle order takes over until the horizon.
//! Kalachakra periods are not subdivided.

use tracing::{debug, trace};

use crate::error::VedicError;

use super::balance::pada_birth_balance;
use super::kaal_chakra_data::{KalachakraConfig, SIGNS_PER_PATH};
use super::types::{DashaLevel, DashaLord, DashaPeriod, MAX_MAHADASHAS};

/// Kalachakra Mahadashas from birth to the horizon.
pub fn kaal_chakra_periods(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &KalachakraConfig,
    horizon_years: f64,
    year_days: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    if !(horizon_years.is_finite() && horizon_years > 0.0) {
        return Err(VedicError::InvalidInput("dasha horizon must be positive"));
    }
    let (total_padas, fraction) = pada_birth_balance(moon_sidereal_lon)?;
    let first_path = KalachakraConfig::path_index(total_padas);
    trace!(total_padas, path = first_path, fraction, "kalachakra entry");

    let mut periods = Vec::new();
    let mut elapsed = 0.0;
    let mut cursor = birth_jd;
    let mut step = 0usize;
    while elapsed < horizon_years {
        if periods.len() >= MAX_MAHADASHAS {
            return Err(VedicError::InvalidInput(
                "dasha horizon would exceed MAX_MAHADASHAS",
            ));
        }
        let path = (first_path + step / SIGNS_PER_PATH) % config.paths.len();
        let rashi = config.paths[path][step % SIGNS_PER_PATH];
        let full = config.years_of(rashi);
        let years = if step == 0 { (1.0 - fraction) * full } else { full };
        let end = cursor + years * year_days;
        periods.push(DashaPeriod {
            lord: DashaLord::Rashi(rashi),
            level: DashaLevel::Mahadasha,
            start_jd: cursor,
            end_jd: end,
            duration_years: years,
            children: Vec::new(),
        });
        cursor = end;
        elapsed += years;
        step += 1;
    }
    debug!(
        mahadashas = periods.len(),
        end_jd = cursor,
        "generated kalachakra dasha"
    );
    Ok(periods)
}
