use std::{fmt, str::FromStr};

use time::PrimitiveDateTime;

use super::{check_energy, percent};
use crate::StoreError;

#[cfg(feature = "serde")]
time::serde::format_description!(reading_ts, PrimitiveDateTime, "[year]-[month]-[day] [hour]:[minute]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(StoreError::UnknownVariant {
                kind: "account status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational state of the installation, independent of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquipmentStatus {
    Active,
    Offline,
    #[cfg_attr(feature = "serde", serde(alias = "under-maintenance", alias = "under_maintenance"))]
    Maintenance,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for EquipmentStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "offline" => Ok(Self::Offline),
            "maintenance" | "under-maintenance" | "under_maintenance" => Ok(Self::Maintenance),
            _ => Err(StoreError::UnknownVariant {
                kind: "equipment status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One customer installation with its cumulative energy readings.
///
/// Delta and delta percentage are always derived from the two energy
/// totals; there is no way to store them independently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub account_status: AccountStatus,
    pub equipment_status: EquipmentStatus,
    pub consumption_kwh: f64,
    pub generation_kwh: f64,
    #[cfg_attr(feature = "serde", serde(with = "reading_ts"))]
    pub last_reading: PrimitiveDateTime,
}

impl CustomerRecord {
    /// Net surplus (positive) or deficit (negative) in kWh.
    pub fn delta(&self) -> f64 {
        self.generation_kwh - self.consumption_kwh
    }

    /// Delta relative to consumption, in percent. `None` when consumption is zero.
    pub fn delta_percentage(&self) -> Option<f64> {
        percent(self.delta(), self.consumption_kwh)
    }

    pub fn is_active(&self) -> bool {
        self.account_status == AccountStatus::Active
    }

    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        check_energy(&self.id, "consumption_kwh", self.consumption_kwh)?;
        check_energy(&self.id, "generation_kwh", self.generation_kwh)?;
        Ok(())
    }
}
