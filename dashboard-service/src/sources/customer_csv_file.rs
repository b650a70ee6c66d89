use std::{collections::HashSet, fs::File, io::Read, path::PathBuf};

use csv::StringRecord;
use solar_client::{domain::parse_reading_ts, store::seed, CustomerRecord, Seed};

use super::SeedSource;
use crate::error::DashboardError;

/// CSV seed carrying customers only.
///
/// Expected header columns (by name):
/// - id
/// - name
/// - email
/// - phone
/// - address
/// - status (`active` | `inactive`)
/// - equipment_status (`active` | `offline` | `maintenance`, also `under-maintenance`)
/// - consumption_kwh
/// - generation_kwh
/// - last_reading (`YYYY-MM-DD HH:MM`)
///
/// Daily and monthly baselines come from the built-in seed, as do the
/// built-in alerts whose customer id appears in the file.
pub struct CustomerCsvFileSource {
    path: PathBuf,
}

impl CustomerCsvFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

fn parse_kwh(field: &str, raw: &str) -> Result<f64, DashboardError> {
    raw.trim()
        .parse()
        .map_err(|e| DashboardError::Source(format!("invalid {field} '{raw}': {e}")))
}

fn record_to_customer(record: &StringRecord, headers: &StringRecord) -> Result<CustomerRecord, DashboardError> {
    let get = |name: &str| -> Result<&str, DashboardError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .and_then(|idx| record.get(idx))
            .ok_or_else(|| DashboardError::Source(format!("missing column '{name}' in CSV record")))
    };

    let id = get("id")?.trim().to_string();
    if id.is_empty() {
        return Err(DashboardError::Source("empty customer id in CSV record".to_string()));
    }

    Ok(CustomerRecord {
        id,
        name: get("name")?.trim().to_string(),
        email: get("email")?.trim().to_string(),
        phone: get("phone")?.trim().to_string(),
        address: get("address")?.trim().to_string(),
        account_status: get("status")?.parse()?,
        equipment_status: get("equipment_status")?.parse()?,
        consumption_kwh: parse_kwh("consumption_kwh", get("consumption_kwh")?)?,
        generation_kwh: parse_kwh("generation_kwh", get("generation_kwh")?)?,
        last_reading: parse_reading_ts(get("last_reading")?)?,
    })
}

pub fn read_customers<R: Read>(reader: R) -> Result<Vec<CustomerRecord>, DashboardError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| DashboardError::Source(format!("failed to read CSV headers: {e}")))?
        .clone();

    let mut customers = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| DashboardError::Source(format!("failed to read CSV record: {e}")))?;

        match record_to_customer(&record, &headers) {
            Ok(c) => customers.push(c),
            Err(e) => {
                metrics::counter!("seed_csv_parse_errors_total").increment(1);
                return Err(e);
            }
        }
    }

    Ok(customers)
}

impl SeedSource for CustomerCsvFileSource {
    fn load(&self) -> Result<Seed, DashboardError> {
        let file = File::open(&self.path).map_err(|e| {
            DashboardError::Source(format!("failed to open CSV file {}: {e}", self.path.display()))
        })?;
        let customers = read_customers(file)?;

        let builtin = seed::builtin();
        let ids: HashSet<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        let (alerts, dropped): (Vec<_>, Vec<_>) = builtin
            .alerts
            .into_iter()
            .partition(|a| ids.contains(a.customer_id.as_str()));
        if !dropped.is_empty() {
            tracing::debug!(dropped = dropped.len(), "built-in alerts without a matching CSV customer skipped");
        }

        Ok(Seed {
            customers,
            daily: builtin.daily,
            monthly: builtin.monthly,
            alerts,
        })
    }
}
