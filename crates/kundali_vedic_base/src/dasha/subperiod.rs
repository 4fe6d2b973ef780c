//! Proportional sub-period generation shared by every planet-keyed scheme.
//!
//! A parent of duration `D` ruled by `L` splits into one child per lord,
//! cycling the lord order from `L`, each child lasting
//! `D * child_full_years / total_cycle_years`. The same function produces
//! Antardashas from a Mahadasha and Pratyantardashas from an Antardasha.

use super::nakshatra_data::DashaSystemConfig;
use super::types::{DashaLevel, DashaLord, DashaPeriod};

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Lord order rotated to begin at `parent_lord`, paired with full durations.
///
/// A lord missing from the cycle starts at the head of the order.
pub fn cyclic_sequence(config: &DashaSystemConfig, parent_lord: DashaLord) -> Vec<(DashaLord, f64)> {
    let n = config.lord_order.len();
    let start = config.position_of(parent_lord).unwrap_or(0);
    (0..n)
        .map(|i| {
            let idx = (start + i) % n;
            (config.lord_order[idx], config.lord_years[idx])
        })
        .collect()
}

/// Split one period into proportional children at `child_level`.
///
/// Children are generated recursively down to the deepest level, so the
/// returned periods carry their own sub-periods.
pub fn subdivide(
    parent_lord: DashaLord,
    child_level: DashaLevel,
    start_jd: f64,
    duration_years: f64,
    config: &DashaSystemConfig,
    year_days: f64,
) -> Vec<DashaPeriod> {
    let parent_end_jd = start_jd + duration_years * year_days;
    let mut cursor = start_jd;
    let mut children: Vec<DashaPeriod> = cyclic_sequence(config, parent_lord)
        .into_iter()
        .map(|(lord, full_years)| {
            let years = duration_years * full_years / config.total_cycle_years;
            let end = cursor + years * year_days;
            let grandchildren = match child_level.child_level() {
                Some(next) => subdivide(lord, next, cursor, years, config, year_days),
                None => Vec::new(),
            };
            let period = DashaPeriod {
                lord,
                level: child_level,
                start_jd: cursor,
                end_jd: end,
                duration_years: years,
                children: grandchildren,
            };
            cursor = end;
            period
        })
        .collect();

    if let Some(last) = children.last_mut() {
        let end = last.end_jd;
        // keep the grandchild chain aligned with the snapped boundary
        if let Some(tail) = last.children.last_mut() {
            snap_nested(tail, parent_end_jd, end);
        }
    }
    snap_last_child_end(&mut children, parent_end_jd);
    children
}

fn snap_nested(period: &mut DashaPeriod, new_end: f64, old_end: f64) {
    if period.end_jd == old_end {
        period.end_jd = new_end;
        if let Some(tail) = period.children.last_mut() {
            snap_nested(tail, new_end, old_end);
        }
    }
}

/// Build a period and its full sub-period tree.
pub fn build_period(
    lord: DashaLord,
    level: DashaLevel,
    start_jd: f64,
    duration_years: f64,
    config: &DashaSystemConfig,
    year_days: f64,
) -> DashaPeriod {
    let children = match level.child_level() {
        Some(child_level) => {
            subdivide(lord, child_level, start_jd, duration_years, config, year_days)
        }
        None => Vec::new(),
    };
    let end_jd = start_jd + duration_years * year_days;
    DashaPeriod {
        lord,
        level,
        start_jd,
        end_jd,
        duration_years,
        children,
    }
}
