use std::{fmt, str::FromStr};

use time::PrimitiveDateTime;

use crate::StoreError;

#[cfg(feature = "serde")]
time::serde::format_description!(alert_ts, PrimitiveDateTime, "[year]-[month]-[day] [hour]:[minute]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlertCategory {
    Offline,
    Maintenance,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for AlertCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(StoreError::UnknownVariant {
                kind: "alert category",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notable condition on a customer's installation.
///
/// `customer_id` must name an existing customer; the store checks this on
/// construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertEvent {
    pub id: String,
    pub customer_id: String,
    pub category: AlertCategory,
    pub message: String,
    #[cfg_attr(feature = "serde", serde(with = "alert_ts"))]
    pub timestamp: PrimitiveDateTime,
}
