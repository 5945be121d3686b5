//! Remote lookups tagged with the query that produced them

use std::future::Future;
use std::sync::Arc;

use icd_core::{LookupError, Match};

use crate::controller::Query;
use crate::telemetry;

/// Anything that can answer an autocomplete search
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, text: &str) -> impl Future<Output = Result<Vec<Match>, LookupError>> + Send;
}

/// Result of one lookup, carrying its originating query
#[derive(Debug)]
pub struct LookupOutcome {
    pub query: Query,
    pub result: Result<Vec<Match>, LookupError>,
}

/// Build the lookup for `query`. Nothing is sent until the returned
/// future is first polled, and it resolves exactly once.
pub fn perform_lookup<B: SearchBackend>(
    backend: Arc<B>,
    query: Query,
) -> impl Future<Output = LookupOutcome> + Send + 'static {
    async move {
        telemetry::record_lookup();
        tracing::info!(query = query.text(), seq = query.seq(), "ICD-11 lookup");
        let result = backend.search(query.text()).await;
        LookupOutcome { query, result }
    }
}
