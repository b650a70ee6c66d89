#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("{owner}: {field} must be a non-negative finite number, got {value}")]
    InvalidEnergy {
        owner: String,
        field: &'static str,
        value: f64,
    },
    #[error("duplicate customer id '{0}'")]
    DuplicateCustomer(String),
    #[error("alert '{alert_id}' references unknown customer '{customer_id}'")]
    UnknownAlertCustomer { alert_id: String, customer_id: String },
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("invalid date '{0}'")]
    InvalidDate(String),
}
