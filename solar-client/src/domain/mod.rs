pub mod alert;
pub mod customer;
pub mod sample;

pub use alert::{AlertCategory, AlertEvent};
pub use customer::{AccountStatus, CustomerRecord, EquipmentStatus};
pub use sample::{DailySample, MonthlySample};

use time::{macros::format_description, Date, PrimitiveDateTime};

use crate::StoreError;

/// `numerator / denominator * 100`, or `None` when the denominator is zero
/// or the result is not finite.
pub fn percent(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let pct = numerator / denominator * 100.0;
    pct.is_finite().then_some(pct)
}

/// Parse a minute-precision reading timestamp (`2024-01-09 14:30`).
pub fn parse_reading_ts(s: &str) -> Result<PrimitiveDateTime, StoreError> {
    PrimitiveDateTime::parse(s.trim(), format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .map_err(|_| StoreError::InvalidTimestamp(s.to_string()))
}

/// Parse a calendar date (`2024-01-09`).
pub fn parse_date(s: &str) -> Result<Date, StoreError> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| StoreError::InvalidDate(s.to_string()))
}

pub(crate) fn check_energy(owner: &str, field: &'static str, value: f64) -> Result<(), StoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StoreError::InvalidEnergy {
            owner: owner.to_string(),
            field,
            value,
        })
    }
}
