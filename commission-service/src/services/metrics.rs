//! Prometheus metrics for commission operations.

use once_cell::sync::Lazy;
use prometheus::{
    histogram_opts, opts, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec,
    IntCounterVec, TextEncoder,
};
use std::sync::OnceLock;
use std::time::Duration;

/// HTTP request counter
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        opts!("commission_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL")
});

/// HTTP request duration histogram
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        histogram_opts!(
            "commission_http_request_duration_seconds",
            "HTTP request duration"
        ),
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION")
});

/// Commission calculations counter by contract type and outcome
pub static CALCULATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Reporting operations counter (estimate, compare, break_even, simulate, stats)
pub static OPERATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Error counter for alerting
pub static ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup; safe to call again.
pub fn init_metrics() {
    // Touch the lazily registered HTTP metrics so they exist before the
    // first request.
    Lazy::force(&HTTP_REQUESTS_TOTAL);
    Lazy::force(&HTTP_REQUEST_DURATION);

    CALCULATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "commission_calculations_total",
                "Commission calculations by contract type and outcome"
            ),
            &["contract_type", "outcome"]
        )
        .expect("Failed to register CALCULATIONS_TOTAL")
    });

    OPERATIONS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!(
                "commission_operations_total",
                "Reporting operations by kind"
            ),
            &["operation"]
        )
        .expect("Failed to register OPERATIONS_TOTAL")
    });

    ERRORS_TOTAL.get_or_init(|| {
        register_int_counter_vec!(
            opts!("commission_errors_total", "Errors by kind"),
            &["kind"]
        )
        .expect("Failed to register ERRORS_TOTAL")
    });
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

pub fn record_calculation(contract_type: &str, is_free: bool) {
    if let Some(counter) = CALCULATIONS_TOTAL.get() {
        let outcome = if is_free { "free" } else { "charged" };
        counter.with_label_values(&[contract_type, outcome]).inc();
    }
}

pub fn record_operation(operation: &str) {
    if let Some(counter) = OPERATIONS_TOTAL.get() {
        counter.with_label_values(&[operation]).inc();
    }
}

pub fn record_error(kind: &str) {
    if let Some(counter) = ERRORS_TOTAL.get() {
        counter.with_label_values(&[kind]).inc();
    }
}

/// Encode all registered metrics in the Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
