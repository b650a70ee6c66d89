use anyhow::Result;
use dashboard_service::{config::AppConfig, observability, sources, transform};
use solar_client::analytics::{self, ViewQuery};
use std::env;

fn fmt_pct(pct: Option<f64>) -> String {
    pct.map(|p| format!("{p:+.1}%")).unwrap_or_else(|| "n/a".to_string())
}

fn fmt_ratio(pct: Option<f64>) -> String {
    pct.map(|p| format!("{p:.1}%")).unwrap_or_else(|| "n/a".to_string())
}

fn main() -> Result<()> {
    observability::init_tracing();

    // usage: portfolio_summary [search] [status] [sort]
    let args: Vec<String> = env::args().skip(1).collect();
    let search = args.first().cloned().unwrap_or_default();
    let status = transform::status_filter(args.get(1).map(String::as_str).unwrap_or("all"))?;
    let sort = args.get(2).map(|s| transform::sort_key(s)).unwrap_or_default();

    let cfg = AppConfig::load()?;
    let unit = cfg.settings.energy_unit;

    let source = sources::from_config(cfg.seed.as_ref());
    let store = sources::load_store(source.as_ref())?;

    let energy = |kwh: f64| format!("{:.2} {}", unit.from_kwh(kwh), unit.symbol());

    let totals = analytics::compute_totals(store.customers());
    let generation = energy(totals.generation_sum);
    let consumption = energy(totals.consumption_sum);
    let delta = energy(totals.delta_sum);
    let delta_percent = fmt_pct(totals.delta_percent);
    tracing::info!(
        customers = totals.total_count,
        active = totals.active_count,
        %generation,
        %consumption,
        %delta,
        %delta_percent,
        "portfolio totals"
    );

    let query = ViewQuery { search, status, sort };
    let rows = analytics::view(store.customers(), &query);
    let summary = analytics::summarize(store.customers(), &rows);
    tracing::info!(matches = summary.match_count, sort = ?query.sort, "customer view");

    for r in &rows {
        let delta = energy(r.delta());
        let delta_percent = fmt_pct(r.delta_percentage());
        let efficiency = fmt_ratio(analytics::efficiency(r));
        tracing::info!(
            id = %r.id,
            name = %r.name,
            status = %r.account_status,
            equipment = %r.equipment_status,
            %delta,
            %delta_percent,
            %efficiency,
            "customer"
        );
    }

    Ok(())
}
