use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dashboard_service::{config::DisplaySettings, router, AppState};
use serde_json::{json, Value};
use solar_client::RecordStore;
use tower::ServiceExt;

fn make_test_app() -> Router {
    let store = RecordStore::builtin().expect("builtin seed is valid");
    router(AppState::new(store, DisplaySettings::default()))
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let response = make_test_app().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
}

async fn send_json(method: &str, uri: &str, payload: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await
}

fn names(json: &Value) -> Vec<String> {
    json["customers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn totals_cover_the_whole_portfolio() {
    let (status, json) = get("/api/totals").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_count"], 5);
    assert_eq!(json["active_count"], 4);
    assert_eq!(json["generation_sum"], 5440.0);
    assert_eq!(json["consumption_sum"], 4300.0);
    assert_eq!(json["delta_sum"], 1140.0);
    assert!((json["delta_percent"].as_f64().unwrap() - 26.51).abs() < 0.01);
}

#[tokio::test]
async fn list_defaults_to_name_order() {
    let (status, json) = get("/api/customers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&json),
        vec!["Ana Oliveira", "Carlos Mendes", "João Silva", "Maria Santos", "Pedro Costa"]
    );
    assert_eq!(json["summary"]["total_count"], 5);
    assert_eq!(json["summary"]["match_count"], 5);

    let first = &json["customers"][0];
    assert_eq!(first["id"], "4");
    assert_eq!(first["delta"], 140.0);
    assert_eq!(first["last_reading"], "2024-01-05 10:20");
}

#[tokio::test]
async fn list_filters_by_search_and_status() {
    let (_, json) = get("/api/customers?search=maria&status=all&sort=name").await;
    assert_eq!(names(&json), vec!["Maria Santos"]);
    assert_eq!(json["summary"]["match_count"], 1);
    assert_eq!(json["summary"]["active_count"], 4);

    let (_, json) = get("/api/customers?status=inactive").await;
    assert_eq!(names(&json), vec!["Ana Oliveira"]);
}

#[tokio::test]
async fn list_sorts_by_delta_descending() {
    let (_, json) = get("/api/customers?sort=delta").await;
    assert_eq!(
        names(&json),
        vec!["Pedro Costa", "João Silva", "Carlos Mendes", "Ana Oliveira", "Maria Santos"]
    );
}

#[tokio::test]
async fn unknown_sort_key_falls_back_to_name() {
    let (status, json) = get("/api/customers?sort=economia").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json)[0], "Ana Oliveira");
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() {
    let (status, json) = get("/api/customers?status=offline").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("offline"));
}

#[tokio::test]
async fn customer_detail_includes_efficiency_and_alerts() {
    let (status, json) = get("/api/customers/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["customer"]["name"], "Maria Santos");
    assert_eq!(json["customer"]["equipment_status"], "offline");
    assert_eq!(json["customer"]["delta"], -60.0);
    assert!((json["efficiency"].as_f64().unwrap() - 93.68).abs() < 0.01);
    assert_eq!(json["alerts"].as_array().unwrap().len(), 1);
    assert_eq!(json["alerts"][0]["category"], "offline");
}

#[tokio::test]
async fn unknown_customer_is_not_found() {
    let (status, json) = get("/api/customers/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("99"));

    let (status, _) = get("/api/customers/99/series").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customer_series_is_labelled_synthetic() {
    let (status, json) = get("/api/customers/1/series").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["synthetic"], true);
    assert_eq!(json["customer_id"], "1");

    let samples = json["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 9);
    assert_eq!(samples[0]["date"], "2024-01-01");
    assert_eq!(samples[0]["generation_kwh"], 54.0);
    assert_eq!(samples[0]["consumption_kwh"], 32.0);
}

#[tokio::test]
async fn baseline_endpoints() {
    let (_, daily) = get("/api/daily").await;
    assert_eq!(daily.as_array().unwrap().len(), 9);

    let (_, eff) = get("/api/daily/efficiency").await;
    assert_eq!(eff.as_array().unwrap().len(), 9);
    assert_eq!(eff[0]["date"], "2024-01-01");

    let (_, monthly) = get("/api/monthly").await;
    assert_eq!(monthly[6]["month"], "Jan/24");
}

#[tokio::test]
async fn alerts_resolve_customer_names() {
    let (_, json) = get("/api/alerts").await;
    let alerts = json.as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["customer_id"], "2");
    assert_eq!(alerts[0]["customer_name"], "Maria Santos");
    assert_eq!(alerts[1]["category"], "maintenance");
}

#[tokio::test]
async fn new_customer_is_acknowledged_not_stored() {
    let (status, json) = send_json(
        "POST",
        "/api/customers",
        json!({
            "name": "Luiza Ramos",
            "email": "luiza@email.com",
            "phone": "(11) 44444-4444",
            "address": "Rua Nova, 10"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["status"], "active");
    assert_eq!(json["persisted"], false);

    let (_, totals) = get("/api/totals").await;
    assert_eq!(totals["total_count"], 5);
}

#[tokio::test]
async fn new_customer_with_missing_fields_is_unprocessable() {
    let (status, json) = send_json("POST", "/api/customers", json!({ "name": "Luiza" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "phone", "address"]);
}

#[tokio::test]
async fn report_requests_are_validated() {
    let (status, json) = send_json(
        "POST",
        "/api/reports",
        json!({ "customer_ids": ["1", "2"], "report_type": "delta", "period": "30", "format": "excel" }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["customer_count"], 2);
    assert_eq!(json["generated"], false);

    let (status, _) = send_json(
        "POST",
        "/api/reports",
        json!({ "customer_ids": [], "format": "pdf" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn settings_round_trip() {
    let (status, current) = get("/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["energy_unit"], "kWh");
    assert_eq!(current["theme"], "light");

    let mut changed = current.clone();
    changed["theme"] = json!("dark");
    let (status, echoed) = send_json("PUT", "/api/settings", changed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed["theme"], "dark");

    let mut invalid = current;
    invalid["refresh_interval_minutes"] = json!(3);
    let (status, json) = send_json("PUT", "/api/settings", invalid).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["fields"][0]["field"], "refresh_interval_minutes");
}

#[tokio::test]
async fn healthz_responds() {
    let response = make_test_app()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

fn field_names(json: &Value) -> Vec<String> {
    json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn report_with_missing_or_unknown_choices_lists_fields() {
    let (status, json) = send_json(
        "POST",
        "/api/reports",
        json!({ "customer_ids": ["1"], "report_type": "delta" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&json), vec!["format"]);

    let (status, json) = send_json(
        "POST",
        "/api/reports",
        json!({ "customer_ids": ["1"], "report_type": "weekly", "format": "pdf" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&json), vec!["report_type"]);
}

#[tokio::test]
async fn report_can_select_every_customer() {
    let (status, json) = send_json(
        "POST",
        "/api/reports",
        json!({ "select_all": true, "report_type": "complete", "format": "pdf" }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["customer_count"], 5);
    assert_eq!(json["customer_ids"], json!(["1", "2", "3", "4", "5"]));
}

#[tokio::test]
async fn new_customer_with_unknown_status_lists_field() {
    let (status, json) = send_json(
        "POST",
        "/api/customers",
        json!({
            "name": "Luiza Ramos",
            "email": "luiza@email.com",
            "phone": "(11) 44444-4444",
            "address": "Rua Nova, 10",
            "status": "todos"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&json), vec!["status"]);
}

#[tokio::test]
async fn mistyped_settings_body_is_a_json_field_error() {
    let (_, mut settings) = get("/api/settings").await;
    settings["theme"] = json!("neon");

    let (status, json) = send_json("PUT", "/api/settings", settings).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(field_names(&json), vec!["body"]);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (status, json) = send(
        Request::builder()
            .method("POST")
            .uri("/api/customers")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}
