//! Read-only HTTP query API over the record store.
//!
//! Write endpoints validate and acknowledge; none of them change the store.

mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use solar_client::{AlertEvent, CustomerRecord, RecordStore};

use crate::config::DisplaySettings;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub settings: Arc<DisplaySettings>,
}

impl AppState {
    pub fn new(store: RecordStore, settings: DisplaySettings) -> Self {
        Self {
            store: Arc::new(store),
            settings: Arc::new(settings),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/api/totals", get(handlers::totals))
        .route(
            "/api/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route("/api/customers/:id", get(handlers::customer_detail))
        .route("/api/customers/:id/series", get(handlers::customer_series))
        .route("/api/daily", get(handlers::daily))
        .route("/api/daily/efficiency", get(handlers::daily_efficiency))
        .route("/api/monthly", get(handlers::monthly))
        .route("/api/alerts", get(handlers::alerts))
        .route("/api/reports", post(handlers::request_report))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .with_state(state)
}

/// A customer with its derived figures, as rendered in tables.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRow {
    #[serde(flatten)]
    pub customer: CustomerRecord,
    pub delta: f64,
    pub delta_percentage: Option<f64>,
}

impl From<CustomerRecord> for CustomerRow {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            delta: customer.delta(),
            delta_percentage: customer.delta_percentage(),
            customer,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertRow {
    #[serde(flatten)]
    pub alert: AlertEvent,
    pub customer_name: Option<String>,
}
