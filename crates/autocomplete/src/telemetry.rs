//! Tracing setup and autocomplete metrics
//!
//! Counters go through the `metrics` facade; without an installed
//! recorder they are no-ops.

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the JSON tracing subscriber. Later calls do nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            ))
            .with(tracing_subscriber::fmt::layer().json())
            .try_init();

        // Someone else already owns the global subscriber
        if installed.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    });
}

pub(crate) fn record_lookup() {
    metrics::counter!("icd_autocomplete_lookups_total").increment(1);
}

pub(crate) fn record_stale() {
    metrics::counter!("icd_autocomplete_stale_results_total").increment(1);
}

pub(crate) fn record_failure(kind: &'static str) {
    metrics::counter!("icd_autocomplete_failures_total", "kind" => kind).increment(1);
}
