//! Prometheus metrics

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

/// External collaborators whose latency is tracked
#[derive(Debug, Clone, Copy)]
pub enum GatewayMetric {
    /// Market data (price bars)
    MarketData,
    /// News headlines
    News,
}

impl GatewayMetric {
    fn label(self) -> &'static str {
        match self {
            GatewayMetric::MarketData => "market_data",
            GatewayMetric::News => "news",
        }
    }
}

/// Install the Prometheus exporter with an HTTP scrape listener
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus metrics exporter listening");
    Ok(())
}

/// Record a gateway round-trip
pub fn record_gateway_latency(metric: GatewayMetric, duration: Duration) {
    metrics::histogram!("stockpulse_gateway_latency_ms", "gateway" => metric.label())
        .record(duration.as_secs_f64() * 1000.0);
}

/// Count a completed scan cycle
pub fn record_scan_cycle(duration: Duration) {
    metrics::counter!("stockpulse_scan_cycles_total").increment(1);
    metrics::histogram!("stockpulse_scan_cycle_duration_ms").record(duration.as_secs_f64() * 1000.0);
}

/// Count a fired alert
pub fn record_alert_fired(symbol: &str) {
    metrics::counter!("stockpulse_alerts_fired_total", "symbol" => symbol.to_string()).increment(1);
}

/// Count a symbol skipped for the cycle
pub fn record_symbol_skipped(reason: &'static str) {
    metrics::counter!("stockpulse_symbols_skipped_total", "reason" => reason).increment(1);
}

/// Current alert feed length
pub fn set_feed_len(len: usize) {
    metrics::gauge!("stockpulse_alert_feed_len").set(len as f64);
}
