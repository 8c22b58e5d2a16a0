//! Metric names and recording helpers

use std::sync::OnceLock;

use opentelemetry::{KeyValue, global, metrics::Counter};

/// Failures rendered as error envelopes, by category and status
pub const FAILURES_HANDLED: &str = "catalog.failures.handled";

fn failures_handled() -> &'static Counter<u64> {
    static COUNTER: OnceLock<Counter<u64>> = OnceLock::new();
    COUNTER.get_or_init(|| {
        global::meter("catalog")
            .u64_counter(FAILURES_HANDLED)
            .with_description("Failures translated into error envelopes")
            .build()
    })
}

/// Count one handled failure
pub fn record_failure(error_type: &'static str, status: u16) {
    failures_handled().add(
        1,
        &[
            KeyValue::new("error.type", error_type),
            KeyValue::new("http.response.status_code", i64::from(status)),
        ],
    );
}
