use time::Date;

use super::check_energy;
use crate::StoreError;

#[cfg(feature = "serde")]
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One day of the shared baseline curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySample {
    #[cfg_attr(feature = "serde", serde(with = "iso_date"))]
    pub date: Date,
    pub generation_kwh: f64,
    pub consumption_kwh: f64,
}

impl DailySample {
    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        let owner = format!("daily sample {}", self.date);
        check_energy(&owner, "generation_kwh", self.generation_kwh)?;
        check_energy(&owner, "consumption_kwh", self.consumption_kwh)?;
        Ok(())
    }
}

/// Portfolio-wide monthly history point, labelled like `Jan/24`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlySample {
    pub month: String,
    pub generation_kwh: f64,
    pub consumption_kwh: f64,
}

impl MonthlySample {
    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        let owner = format!("monthly sample {}", self.month);
        check_energy(&owner, "generation_kwh", self.generation_kwh)?;
        check_energy(&owner, "consumption_kwh", self.consumption_kwh)?;
        Ok(())
    }
}
