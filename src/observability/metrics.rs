//! Metrics collection and exposition.
//!
//! # Metrics
//! - `qrserv_renders_total` (counter): renders by variant and outcome
//! - `qrserv_render_duration_seconds` (histogram): encode + serialize latency

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter, serving scrapes on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one pass through the render pipeline.
pub fn record_render(variant: &'static str, success: bool, start: Instant) {
    let outcome = if success { "ok" } else { "error" };
    ::metrics::counter!("qrserv_renders_total", "variant" => variant, "outcome" => outcome)
        .increment(1);
    ::metrics::histogram!("qrserv_render_duration_seconds", "variant" => variant)
        .record(start.elapsed().as_secs_f64());
}
