use std::{fs, path::PathBuf};

use solar_client::Seed;

use super::SeedSource;
use crate::error::DashboardError;

/// JSON seed with `customers` and optional `daily`, `monthly` and `alerts` arrays.
///
/// Timestamps use `YYYY-MM-DD HH:MM`, dates `YYYY-MM-DD`.
pub struct SeedJsonFileSource {
    path: PathBuf,
}

impl SeedJsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_seed(contents: &str) -> Result<Seed, DashboardError> {
    serde_json::from_str(contents).map_err(|e| DashboardError::Source(format!("invalid seed JSON: {e}")))
}

impl SeedSource for SeedJsonFileSource {
    fn load(&self) -> Result<Seed, DashboardError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            DashboardError::Source(format!("failed to open seed file {}: {e}", self.path.display()))
        })?;
        parse_seed(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_client::{AlertCategory, EquipmentStatus, RecordStore};

    const SEED: &str = r#"{
        "customers": [
            {
                "id": "c-10",
                "name": "Beatriz Lopes",
                "email": "bia@email.com",
                "phone": "(21) 12345-6789",
                "address": "Rua Azul, 5, Rio de Janeiro",
                "account_status": "active",
                "equipment_status": "maintenance",
                "consumption_kwh": 400,
                "generation_kwh": 520.5,
                "last_reading": "2024-02-01 09:45"
            }
        ],
        "daily": [
            { "date": "2024-02-01", "generation_kwh": 40, "consumption_kwh": 30 }
        ],
        "alerts": [
            {
                "id": "a-1",
                "customer_id": "c-10",
                "category": "maintenance",
                "message": "Inverter replacement",
                "timestamp": "2024-02-01 08:00"
            }
        ]
    }"#;

    #[test]
    fn parses_seed_document() {
        let seed = parse_seed(SEED).unwrap();
        assert_eq!(seed.customers.len(), 1);
        assert_eq!(seed.customers[0].equipment_status, EquipmentStatus::Maintenance);
        assert_eq!(seed.customers[0].delta(), 120.5);
        assert!(seed.monthly.is_empty());
        assert_eq!(seed.alerts[0].category, AlertCategory::Maintenance);

        let store = RecordStore::new(seed).unwrap();
        assert_eq!(store.alerts_for("c-10").len(), 1);
    }

    #[test]
    fn reads_seed_from_disk() {
        let path = std::env::temp_dir().join(format!("solar-seed-{}.json", std::process::id()));
        fs::write(&path, SEED).unwrap();

        let seed = SeedJsonFileSource::new(&path).load();
        let _ = fs::remove_file(&path);
        assert_eq!(seed.unwrap().customers[0].id, "c-10");
    }

    #[test]
    fn accepts_hyphenated_maintenance_status() {
        let hyphenated = SEED.replace(
            r#""equipment_status": "maintenance""#,
            r#""equipment_status": "under-maintenance""#,
        );
        let seed = parse_seed(&hyphenated).unwrap();
        assert_eq!(seed.customers[0].equipment_status, EquipmentStatus::Maintenance);
    }

    #[test]
    fn rejects_bad_timestamp() {
        let broken = SEED.replace("2024-02-01 09:45", "yesterday");
        assert!(matches!(parse_seed(&broken), Err(DashboardError::Source(_))));
    }
}
