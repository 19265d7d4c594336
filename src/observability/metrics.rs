//! Metrics collection and exposition.
//!
//! # Metrics
//! - `pokedex_requests_total` (counter): requests by route, status
//! - `pokedex_request_duration_seconds` (histogram): latency by route
//! - `pokedex_dataset_records` (gauge): index entries by kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::data::DatasetSummary;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one handled request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    let route = route.to_string();
    metrics::counter!(
        "pokedex_requests_total",
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("pokedex_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Publish the size of the loaded dataset.
pub fn record_dataset(summary: DatasetSummary) {
    metrics::gauge!("pokedex_dataset_records", "kind" => "types").set(summary.types as f64);
    metrics::gauge!("pokedex_dataset_records", "kind" => "pokemons").set(summary.pokemons as f64);
    metrics::gauge!("pokedex_dataset_records", "kind" => "moves").set(summary.moves as f64);
}
