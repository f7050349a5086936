// =============================================================================
// METRICS MODULE
// =============================================================================
// Prometheus metrics for observability. The exporter uses a pull model:
// the Prometheus server scrapes the /metrics endpoint periodically.
// =============================================================================

use anyhow::Result;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

// =============================================================================
// METRIC NAMES (Constants)
// =============================================================================
// Names follow Prometheus conventions: snake_case, unit suffixes,
// _total for counters.

/// HTTP request counter
/// Labels: method (GET/POST), endpoint (/api/v1/products), status (200/404)
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// HTTP request duration histogram
/// Labels: method, endpoint
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Catalog provider operation duration histogram (includes the simulated
/// latency). Labels: operation (list_all/get_by_id/search/...)
pub const CATALOG_FETCH_DURATION_SECONDS: &str = "catalog_fetch_duration_seconds";

/// Gauge: number of lines currently in the cart
pub const CART_LINES: &str = "cart_lines";

/// Gauge: current cart total value
pub const CART_TOTAL_VALUE: &str = "cart_total_value";

/// Counter of mocked auth attempts
/// Labels: flow (login/register), outcome (success/failed)
pub const AUTH_ATTEMPTS_TOTAL: &str = "auth_attempts_total";

// =============================================================================
// SETUP FUNCTION
// =============================================================================
/// Initialize the Prometheus recorder and return the handle used by the
/// /metrics endpoint to render the exposition text.
pub fn setup_metrics() -> Result<PrometheusHandle> {
    // Bucket boundaries sized for HTTP-ish latencies: sub-millisecond pure
    // handlers up to multi-second simulated provider delays.
    let latency_buckets = &[
        0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_REQUEST_DURATION_SECONDS.to_string()),
            latency_buckets,
        )?
        .set_buckets_for_metric(
            Matcher::Full(CATALOG_FETCH_DURATION_SECONDS.to_string()),
            latency_buckets,
        )?
        .install_recorder()?;

    describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests received");

    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "HTTP request latency in seconds"
    );

    describe_histogram!(
        CATALOG_FETCH_DURATION_SECONDS,
        "Catalog provider operation latency in seconds (includes simulated delay)"
    );

    describe_gauge!(CART_LINES, "Number of lines currently in the cart");

    describe_gauge!(CART_TOTAL_VALUE, "Current cart total value");

    describe_counter!(AUTH_ATTEMPTS_TOTAL, "Total number of mocked auth attempts");

    Ok(handle)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================
// Thin wrappers around the metrics macros with the proper labels.

/// Record an HTTP request with its status and duration.
pub fn record_http_request(method: &str, endpoint: &str, status: u16, duration_secs: f64) {
    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "method" => method.to_string(),
        "endpoint" => endpoint.to_string()
    )
    .record(duration_secs);
}

/// Record a catalog provider operation duration.
pub fn record_catalog_fetch(operation: &str, duration_secs: f64) {
    histogram!(
        CATALOG_FETCH_DURATION_SECONDS,
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}

/// Update the cart gauges after a cart mutation or read.
pub fn set_cart_gauges(lines: usize, total: f64) {
    gauge!(CART_LINES).set(lines as f64);
    gauge!(CART_TOTAL_VALUE).set(total);
}

/// Record a mocked auth attempt.
pub fn record_auth_attempt(flow: &str, success: bool) {
    let outcome = if success { "success" } else { "failed" };
    counter!(
        AUTH_ATTEMPTS_TOTAL,
        "flow" => flow.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
}
