use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use solar_client::{
    analytics::{self, AggregateTotals, DailyEfficiency, SortKey, StatusFilter, SyntheticSeries, ViewQuery, ViewSummary},
    AlertEvent, DailySample, MonthlySample,
};

use super::{AlertRow, AppState, CustomerRow};
use crate::config::DisplaySettings;
use crate::error::{DashboardError, FieldError};
use crate::transform::{self, NewCustomerAccepted, NewCustomerRequest, ReportAccepted, ReportRequest};

fn hit(route: &'static str) {
    metrics::counter!("dashboard_http_requests_total", "route" => route).increment(1);
}

/// Unwrap a form body. Well-formed JSON of the wrong shape counts as a
/// rejected form; anything else is a bad request.
fn form_body<T>(payload: Result<Json<T>, JsonRejection>, rejected_counter: &'static str) -> Result<T, DashboardError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::JsonDataError(e)) => Err(transform::rejected(
            rejected_counter,
            vec![FieldError::new("body", e.body_text())],
        )),
        Err(other) => Err(DashboardError::BadRequest(other.body_text())),
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn totals(State(state): State<AppState>) -> Json<AggregateTotals> {
    hit("totals");
    Json(analytics::compute_totals(state.store.customers()))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    search: String,
    status: Option<String>,
    sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CustomerList {
    summary: ViewSummary,
    customers: Vec<CustomerRow>,
}

pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerList>, DashboardError> {
    hit("customers");

    let status = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => transform::status_filter(raw)?,
    };
    let sort = params.sort.as_deref().map(transform::sort_key).unwrap_or(SortKey::Name);

    let query = ViewQuery {
        search: params.search,
        status,
        sort,
    };
    let records = state.store.customers();
    let matches = analytics::view(records, &query);
    let summary = analytics::summarize(records, &matches);

    Ok(Json(CustomerList {
        summary,
        customers: matches.into_iter().map(CustomerRow::from).collect(),
    }))
}

#[derive(Debug, Serialize)]
pub struct CustomerDetail {
    customer: CustomerRow,
    efficiency: Option<f64>,
    alerts: Vec<AlertEvent>,
}

pub async fn customer_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerDetail>, DashboardError> {
    hit("customer_detail");

    let record = state
        .store
        .find_customer(&id)
        .ok_or_else(|| DashboardError::NotFound(format!("customer '{id}'")))?;

    Ok(Json(CustomerDetail {
        efficiency: analytics::efficiency(record),
        alerts: state.store.alerts_for(&id).into_iter().cloned().collect(),
        customer: CustomerRow::from(record.clone()),
    }))
}

pub async fn customer_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SyntheticSeries>, DashboardError> {
    hit("customer_series");

    let record = state
        .store
        .find_customer(&id)
        .ok_or_else(|| DashboardError::NotFound(format!("customer '{id}'")))?;

    Ok(Json(analytics::scaled_series(state.store.daily(), record)))
}

pub async fn daily(State(state): State<AppState>) -> Json<Vec<DailySample>> {
    hit("daily");
    Json(state.store.daily().to_vec())
}

pub async fn daily_efficiency(State(state): State<AppState>) -> Json<Vec<DailyEfficiency>> {
    hit("daily_efficiency");
    Json(analytics::daily_efficiency(state.store.daily()))
}

pub async fn monthly(State(state): State<AppState>) -> Json<Vec<MonthlySample>> {
    hit("monthly");
    Json(state.store.monthly().to_vec())
}

pub async fn alerts(State(state): State<AppState>) -> Json<Vec<AlertRow>> {
    hit("alerts");

    let rows = state
        .store
        .alerts()
        .iter()
        .map(|alert| AlertRow {
            customer_name: state
                .store
                .find_customer(&alert.customer_id)
                .map(|c| c.name.clone()),
            alert: alert.clone(),
        })
        .collect();

    Json(rows)
}

pub async fn create_customer(
    payload: Result<Json<NewCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NewCustomerAccepted>), DashboardError> {
    hit("create_customer");

    let req = form_body(payload, transform::NEW_CUSTOMER_REJECTED)?;
    let accepted = transform::validate_new_customer(req)?;
    tracing::info!(name = %accepted.name, "new customer accepted (not persisted)");
    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

pub async fn request_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportAccepted>), DashboardError> {
    hit("reports");

    let req = form_body(payload, transform::REPORT_REQUEST_REJECTED)?;
    let accepted = transform::validate_report_request(req, &state.store)?;
    tracing::info!(
        report_type = ?accepted.report_type,
        format = ?accepted.format,
        customers = accepted.customer_count,
        "report request accepted (no file generated)"
    );
    Ok((StatusCode::ACCEPTED, Json(accepted)))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<DisplaySettings> {
    hit("settings");
    Json(state.settings.as_ref().clone())
}

pub async fn put_settings(
    payload: Result<Json<DisplaySettings>, JsonRejection>,
) -> Result<Json<DisplaySettings>, DashboardError> {
    hit("settings");

    let settings = form_body(payload, transform::SETTINGS_REJECTED)?;
    let settings = transform::validate_settings(settings)?;
    tracing::info!(theme = ?settings.theme, "settings accepted (not persisted)");
    Ok(Json(settings))
}
