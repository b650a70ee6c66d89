use crate::domain::{percent, CustomerRecord};

/// Portfolio-wide totals. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateTotals {
    pub total_count: usize,
    pub active_count: usize,
    pub generation_sum: f64,
    pub consumption_sum: f64,
    pub delta_sum: f64,
    /// `None` when the summed consumption is zero (including no records).
    pub delta_percent: Option<f64>,
}

/// Sum generation and consumption over every record, regardless of status.
pub fn compute_totals(records: &[CustomerRecord]) -> AggregateTotals {
    let active_count = records.iter().filter(|r| r.is_active()).count();
    let generation_sum: f64 = records.iter().map(|r| r.generation_kwh).sum();
    let consumption_sum: f64 = records.iter().map(|r| r.consumption_kwh).sum();
    let delta_sum = generation_sum - consumption_sum;

    AggregateTotals {
        total_count: records.len(),
        active_count,
        generation_sum,
        consumption_sum,
        delta_sum,
        delta_percent: percent(delta_sum, consumption_sum),
    }
}
