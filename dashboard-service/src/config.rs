use serde::{Deserialize, Serialize};
use std::fs;

use crate::transform;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedFormat {
    Json,
    Csv,
}

/// Where the record store comes from. Absent means the built-in demo portfolio.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub path: String,
    pub format: SeedFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub alerts: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Wh,
    #[serde(rename = "kWh")]
    KWh,
    #[serde(rename = "MWh")]
    MWh,
}

impl EnergyUnit {
    pub fn from_kwh(&self, kwh: f64) -> f64 {
        match self {
            Self::Wh => kwh * 1000.0,
            Self::KWh => kwh,
            Self::MWh => kwh / 1000.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Wh => "Wh",
            Self::KWh => "kWh",
            Self::MWh => "MWh",
        }
    }
}

/// Operator-facing preferences. Passed explicitly to whoever renders; never
/// kept in ambient global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub theme: Theme,
    pub refresh_interval_minutes: u32,
    pub time_zone: String,
    pub currency: String,
    pub energy_unit: EnergyUnit,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            profile: ProfileSettings {
                name: "System Administrator".to_string(),
                email: "admin@crmsolar.com".to_string(),
                phone: "(11) 99999-9999".to_string(),
                company: "CRM Solar Ltda".to_string(),
            },
            notifications: NotificationSettings {
                email: true,
                push: false,
                sms: true,
                alerts: true,
            },
            theme: Theme::Light,
            refresh_interval_minutes: 5,
            time_zone: "America/Sao_Paulo".to_string(),
            currency: "BRL".to_string(),
            energy_unit: EnergyUnit::KWh,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub metrics: Option<MetricsConfig>,
    pub seed: Option<SeedConfig>,
    #[serde(default)]
    pub settings: DisplaySettings,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        let path = env::var("DASHBOARD_CONFIG").unwrap_or_else(|_| "dashboard-config.toml".to_string());
        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config '{path}': {e}"))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(contents)?;
        transform::validate_settings(cfg.settings.clone())
            .map_err(|e| anyhow::anyhow!("invalid [settings]: {}", e.describe()))?;
        Ok(cfg)
    }
}
