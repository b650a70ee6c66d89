pub mod analytics;
pub mod domain;
pub mod error;
pub mod store;

pub use domain::{
    AccountStatus, AlertCategory, AlertEvent, CustomerRecord, DailySample, EquipmentStatus,
    MonthlySample,
};
pub use error::StoreError;
pub use store::{RecordStore, Seed};
