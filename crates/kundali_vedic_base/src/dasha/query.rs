//! Point-in-time queries over a generated timeline.

use super::types::{DashaPeriod, DashaTimeline};

/// Index of the period containing `jd` in a sorted, contiguous slice.
///
/// Periods are half-open `[start_jd, end_jd)`. Returns `None` before the
/// first start or at/after the last end.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    if !jd.is_finite() {
        return None;
    }
    // first period whose end lies beyond jd
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

impl DashaTimeline {
    /// Active Mahadasha, Antardasha and Pratyantardasha at `jd`, outermost
    /// first. Empty when `jd` lies outside the timeline; shorter than three
    /// for schemes without sub-periods.
    pub fn active_chain(&self, jd: f64) -> Vec<&DashaPeriod> {
        let mut chain = Vec::new();
        let mut level: &[DashaPeriod] = &self.periods;
        while let Some(idx) = find_active_period(level, jd) {
            let period = &level[idx];
            chain.push(period);
            level = &period.children;
        }
        chain
    }

    /// Active Mahadasha at `jd`.
    pub fn active_mahadasha(&self, jd: f64) -> Option<&DashaPeriod> {
        find_active_period(&self.periods, jd).map(|i| &self.periods[i])
    }

    /// End of the last generated period.
    pub fn end_jd(&self) -> Option<f64> {
        self.periods.last().map(|p| p.end_jd)
    }
}
