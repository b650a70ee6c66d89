pub mod customer_csv_file;
pub mod seed_json_file;

pub use customer_csv_file::CustomerCsvFileSource;
pub use seed_json_file::SeedJsonFileSource;

use solar_client::{store::seed, RecordStore, Seed};

use crate::config::{SeedConfig, SeedFormat};
use crate::error::DashboardError;

/// Produces the records the store is built from. Called once at startup.
pub trait SeedSource: Send + Sync {
    fn load(&self) -> Result<Seed, DashboardError>;
}

/// The demo portfolio compiled into the binary.
#[derive(Clone, Default)]
pub struct BuiltinSeedSource;

impl SeedSource for BuiltinSeedSource {
    fn load(&self) -> Result<Seed, DashboardError> {
        Ok(seed::builtin())
    }
}

pub fn from_config(cfg: Option<&SeedConfig>) -> Box<dyn SeedSource> {
    match cfg {
        None => Box::new(BuiltinSeedSource),
        Some(c) => match c.format {
            SeedFormat::Json => Box::new(SeedJsonFileSource::new(&c.path)),
            SeedFormat::Csv => Box::new(CustomerCsvFileSource::new(&c.path)),
        },
    }
}

/// Load and validate a store from `source`.
pub fn load_store(source: &dyn SeedSource) -> Result<RecordStore, DashboardError> {
    let store = RecordStore::new(source.load()?)?;
    tracing::info!(
        customers = store.customers().len(),
        daily_samples = store.daily().len(),
        alerts = store.alerts().len(),
        "record store loaded"
    );
    Ok(store)
}
