use serde::{Deserialize, Serialize};
use solar_client::{
    analytics::{SortKey, StatusFilter},
    domain::parse_date,
    AccountStatus, RecordStore,
};

use crate::config::DisplaySettings;
use crate::error::{DashboardError, FieldError};

pub const REFRESH_INTERVALS_MINUTES: [u32; 4] = [1, 5, 10, 30];
pub const SUPPORTED_TIME_ZONES: [&str; 3] = ["America/Sao_Paulo", "America/New_York", "Europe/London"];

pub const NEW_CUSTOMER_REJECTED: &str = "new_customer_rejected_total";
pub const REPORT_REQUEST_REJECTED: &str = "report_request_rejected_total";
pub const SETTINGS_REJECTED: &str = "settings_rejected_total";

/// Status filter from a query parameter. Unknown values are a client error.
pub fn status_filter(raw: &str) -> Result<StatusFilter, DashboardError> {
    StatusFilter::parse(raw).ok_or_else(|| {
        DashboardError::BadRequest(format!(
            "unknown status filter '{raw}' (expected all, active or inactive)"
        ))
    })
}

/// Sort key from a query parameter, falling back to name order.
pub fn sort_key(raw: &str) -> SortKey {
    if SortKey::parse(raw).is_none() {
        tracing::debug!(sort = raw, "unknown sort key, using name");
    }
    SortKey::from_param(raw)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Acknowledgement for a submitted customer. Nothing is written to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomerAccepted {
    pub name: String,
    pub email: String,
    pub status: AccountStatus,
    pub persisted: bool,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub(crate) fn rejected(counter: &'static str, errors: Vec<FieldError>) -> DashboardError {
    metrics::counter!(counter).increment(1);
    DashboardError::Validation(errors)
}

/// Pure validation of the new-customer form.
///
/// Rules:
/// - name, email, phone and address are required.
/// - email must contain `@`.
/// - status is active or inactive, defaulting to active.
pub fn validate_new_customer(req: NewCustomerRequest) -> Result<NewCustomerAccepted, DashboardError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("name", &req.name),
        ("email", &req.email),
        ("phone", &req.phone),
        ("address", &req.address),
    ] {
        if blank(value) {
            errors.push(FieldError::new(field, "is required"));
        }
    }
    if !blank(&req.email) && !req.email.contains('@') {
        errors.push(FieldError::new("email", "must be an email address"));
    }

    let status = match req.status.as_deref().filter(|s| !blank(s)) {
        None => Some(AccountStatus::Active),
        Some(raw) => match raw.parse::<AccountStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push(FieldError::new("status", format!("unknown status '{raw}'")));
                None
            }
        },
    };

    match status {
        Some(status) if errors.is_empty() => Ok(NewCustomerAccepted {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            status,
            persisted: false,
        }),
        _ => Err(rejected(NEW_CUSTOMER_REJECTED, errors)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Generation,
    Consumption,
    Delta,
    Complete,
    Monthly,
    Annual,
}

impl ReportType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generation" => Some(Self::Generation),
            "consumption" => Some(Self::Consumption),
            "delta" => Some(Self::Delta),
            "complete" => Some(Self::Complete),
            "monthly" => Some(Self::Monthly),
            "annual" => Some(Self::Annual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    #[serde(rename = "7")]
    Last7Days,
    #[serde(rename = "30")]
    Last30Days,
    #[serde(rename = "90")]
    Last90Days,
    Month,
    Year,
    Custom,
}

impl ReportPeriod {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7" => Some(Self::Last7Days),
            "30" => Some(Self::Last30Days),
            "90" => Some(Self::Last90Days),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "excel" => Some(Self::Excel),
            _ => None,
        }
    }
}

/// Report form as submitted. Choice fields stay raw strings so that bad
/// values come back as field errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    pub customer_ids: Vec<String>,
    pub select_all: bool,
    pub report_type: Option<String>,
    pub period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub format: Option<String>,
}

/// Acknowledgement for a report request. No file is produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportAccepted {
    pub report_type: ReportType,
    pub format: ExportFormat,
    pub period: Option<ReportPeriod>,
    pub customer_ids: Vec<String>,
    pub customer_count: usize,
    pub generated: bool,
}

fn required_choice<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Option<T> {
    match raw.filter(|s| !blank(s)) {
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(raw) => {
            let parsed = parse(raw);
            if parsed.is_none() {
                errors.push(FieldError::new(field, format!("unknown value '{raw}'")));
            }
            parsed
        }
    }
}

/// Validate a report request against the store.
///
/// Rules:
/// - at least one customer is selected, by id or with `select_all`.
/// - every customer id must exist.
/// - report type and export format are required and known.
/// - a custom period needs both dates, with start not after end.
pub fn validate_report_request(
    req: ReportRequest,
    store: &RecordStore,
) -> Result<ReportAccepted, DashboardError> {
    let mut errors = Vec::new();

    let selection = ReportSelection::from_request(&req, store);
    if selection.selected().is_empty() {
        errors.push(FieldError::new("customer_ids", "select at least one customer"));
    }
    for id in selection.selected() {
        if store.find_customer(id).is_none() {
            errors.push(FieldError::new("customer_ids", format!("unknown customer '{id}'")));
        }
    }

    let report_type = required_choice(&mut errors, "report_type", req.report_type.as_deref(), ReportType::parse);

    let period = match req.period.as_deref().filter(|s| !blank(s)) {
        None => None,
        Some(raw) => {
            let period = ReportPeriod::parse(raw);
            if period.is_none() {
                errors.push(FieldError::new("period", format!("unknown value '{raw}'")));
            }
            period
        }
    };

    if period == Some(ReportPeriod::Custom) {
        let start = req.start_date.as_deref().map(parse_date);
        let end = req.end_date.as_deref().map(parse_date);
        match (start, end) {
            (Some(Ok(start)), Some(Ok(end))) if start > end => {
                errors.push(FieldError::new("end_date", "must not be before start_date"));
            }
            (Some(Ok(_)), Some(Ok(_))) => {}
            (start, end) => {
                if !matches!(start, Some(Ok(_))) {
                    errors.push(FieldError::new("start_date", "a valid YYYY-MM-DD date is required"));
                }
                if !matches!(end, Some(Ok(_))) {
                    errors.push(FieldError::new("end_date", "a valid YYYY-MM-DD date is required"));
                }
            }
        }
    }

    let format = required_choice(&mut errors, "format", req.format.as_deref(), ExportFormat::parse);

    match (report_type, format) {
        (Some(report_type), Some(format)) if errors.is_empty() => Ok(ReportAccepted {
            report_type,
            format,
            period,
            customer_count: selection.selected().len(),
            customer_ids: selection.into_selected(),
            generated: false,
        }),
        _ => Err(rejected(REPORT_REQUEST_REJECTED, errors)),
    }
}

/// Customers picked for a report, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSelection {
    selected: Vec<String>,
}

impl ReportSelection {
    /// Selection described by a report form: every customer in store order
    /// when `select_all` is set, otherwise the listed ids without repeats.
    pub fn from_request(req: &ReportRequest, store: &RecordStore) -> Self {
        let mut selection = Self::default();
        if req.select_all {
            selection.toggle_all(store);
        } else {
            for id in &req.customer_ids {
                selection.select(id);
            }
        }
        selection
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }

    pub fn select(&mut self, customer_id: &str) {
        if !self.selected.iter().any(|id| id == customer_id) {
            self.selected.push(customer_id.to_string());
        }
    }

    pub fn toggle(&mut self, customer_id: &str) {
        if let Some(pos) = self.selected.iter().position(|id| id == customer_id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(customer_id.to_string());
        }
    }

    /// True when the selection is exactly the store's customers.
    pub fn is_all_selected(&self, store: &RecordStore) -> bool {
        let customers = store.customers();
        self.selected.len() == customers.len()
            && customers.iter().all(|c| self.selected.contains(&c.id))
    }

    /// Clear when everything is selected, otherwise select every customer in store order.
    pub fn toggle_all(&mut self, store: &RecordStore) {
        if self.is_all_selected(store) {
            self.selected.clear();
        } else {
            self.selected = store.customers().iter().map(|c| c.id.clone()).collect();
        }
    }
}

/// Validate operator settings before they are echoed back or used at startup.
///
/// Rules:
/// - refresh interval is one of 1, 5, 10 or 30 minutes.
/// - time zone is one of the supported zones.
/// - profile name and email are present; email contains `@`.
pub fn validate_settings(settings: DisplaySettings) -> Result<DisplaySettings, DashboardError> {
    let mut errors = Vec::new();

    if !REFRESH_INTERVALS_MINUTES.contains(&settings.refresh_interval_minutes) {
        errors.push(FieldError::new(
            "refresh_interval_minutes",
            format!("must be one of {REFRESH_INTERVALS_MINUTES:?}"),
        ));
    }
    if !SUPPORTED_TIME_ZONES.contains(&settings.time_zone.as_str()) {
        errors.push(FieldError::new("time_zone", format!("unsupported time zone '{}'", settings.time_zone)));
    }
    if blank(&settings.profile.name) {
        errors.push(FieldError::new("profile.name", "is required"));
    }
    if !settings.profile.email.contains('@') {
        errors.push(FieldError::new("profile.email", "must be an email address"));
    }

    if errors.is_empty() {
        Ok(settings)
    } else {
        Err(rejected(SETTINGS_REJECTED, errors))
    }
}
