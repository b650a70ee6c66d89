//! Pure, synchronous computations over the record store.

pub mod derived;
pub mod totals;
pub mod view;

pub use derived::{daily_efficiency, efficiency, scaled_series, DailyEfficiency, ScaledSample, SyntheticSeries};
pub use totals::{compute_totals, AggregateTotals};
pub use view::{summarize, view, SortKey, StatusFilter, ViewQuery, ViewSummary};
