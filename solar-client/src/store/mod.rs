pub mod seed;

use std::collections::HashSet;

use crate::domain::{AlertEvent, CustomerRecord, DailySample, MonthlySample};
use crate::StoreError;

/// Raw input for a [`RecordStore`], as produced by a loader.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seed {
    pub customers: Vec<CustomerRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub daily: Vec<DailySample>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub monthly: Vec<MonthlySample>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alerts: Vec<AlertEvent>,
}

/// Read-only owner of every record for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct RecordStore {
    customers: Vec<CustomerRecord>,
    daily: Vec<DailySample>,
    monthly: Vec<MonthlySample>,
    alerts: Vec<AlertEvent>,
}

impl RecordStore {
    /// Validate a seed and take ownership of it.
    ///
    /// Rules:
    /// - energy values are finite and non-negative.
    /// - customer ids are unique.
    /// - every alert points at an existing customer id.
    pub fn new(seed: Seed) -> Result<Self, StoreError> {
        let mut ids = HashSet::with_capacity(seed.customers.len());
        for customer in &seed.customers {
            customer.validate()?;
            if !ids.insert(customer.id.as_str()) {
                return Err(StoreError::DuplicateCustomer(customer.id.clone()));
            }
        }

        for sample in &seed.daily {
            sample.validate()?;
        }
        for sample in &seed.monthly {
            sample.validate()?;
        }

        if let Some(alert) = seed
            .alerts
            .iter()
            .find(|a| !ids.contains(a.customer_id.as_str()))
        {
            return Err(StoreError::UnknownAlertCustomer {
                alert_id: alert.id.clone(),
                customer_id: alert.customer_id.clone(),
            });
        }

        Ok(Self {
            customers: seed.customers,
            daily: seed.daily,
            monthly: seed.monthly,
            alerts: seed.alerts,
        })
    }

    /// Store built from [`seed::builtin`].
    pub fn builtin() -> Result<Self, StoreError> {
        Self::new(seed::builtin())
    }

    pub fn customers(&self) -> &[CustomerRecord] {
        &self.customers
    }

    pub fn daily(&self) -> &[DailySample] {
        &self.daily
    }

    pub fn monthly(&self) -> &[MonthlySample] {
        &self.monthly
    }

    pub fn alerts(&self) -> &[AlertEvent] {
        &self.alerts
    }

    pub fn find_customer(&self, id: &str) -> Option<&CustomerRecord> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn alerts_for(&self, customer_id: &str) -> Vec<&AlertEvent> {
        self.alerts
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .collect()
    }
}
