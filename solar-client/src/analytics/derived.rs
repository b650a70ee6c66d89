use time::Date;

use crate::domain::{percent, CustomerRecord, DailySample};

#[cfg(feature = "serde")]
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Baseline samples are scaled by `customer_total / BASELINE_SCALE_KWH`.
pub const BASELINE_SCALE_KWH: f64 = 1000.0;

/// Generation as a percentage of consumption. `None` when consumption is zero.
pub fn efficiency(record: &CustomerRecord) -> Option<f64> {
    percent(record.generation_kwh, record.consumption_kwh)
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScaledSample {
    #[cfg_attr(feature = "serde", serde(with = "iso_date"))]
    pub date: Date,
    pub generation_kwh: f64,
    pub consumption_kwh: f64,
}

/// Illustrative per-customer curve derived from the shared baseline.
///
/// This is not measured data: `synthetic` is always `true` and travels with
/// the samples so renderers can label it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SyntheticSeries {
    pub customer_id: String,
    pub synthetic: bool,
    pub samples: Vec<ScaledSample>,
}

/// Scale every baseline day by the customer's totals and round to whole kWh.
///
/// Rounding is to the nearest integer with halves away from zero, which is
/// round-half-up for the non-negative values involved.
pub fn scaled_series(baseline: &[DailySample], record: &CustomerRecord) -> SyntheticSeries {
    let gen_factor = record.generation_kwh / BASELINE_SCALE_KWH;
    let cons_factor = record.consumption_kwh / BASELINE_SCALE_KWH;

    let samples = baseline
        .iter()
        .map(|d| ScaledSample {
            date: d.date,
            generation_kwh: (d.generation_kwh * gen_factor).round(),
            consumption_kwh: (d.consumption_kwh * cons_factor).round(),
        })
        .collect();

    SyntheticSeries {
        customer_id: record.id.clone(),
        synthetic: true,
        samples,
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyEfficiency {
    #[cfg_attr(feature = "serde", serde(with = "iso_date"))]
    pub date: Date,
    pub efficiency: Option<f64>,
}

/// Per-day generation/consumption ratio of the baseline curve, in percent.
pub fn daily_efficiency(baseline: &[DailySample]) -> Vec<DailyEfficiency> {
    baseline
        .iter()
        .map(|d| DailyEfficiency {
            date: d.date,
            efficiency: percent(d.generation_kwh, d.consumption_kwh),
        })
        .collect()
}
