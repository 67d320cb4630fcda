// Metrics hooks for the `matcher` crate.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then `Engine` reports latency and result counts for each successful
// [`Engine::query`](crate::Engine::query) and the reason for each rejected one.
// This keeps instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::MatchError;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record a completed query.
    ///
    /// `latency` covers validation through ranking, `scanned` is the number of
    /// catalog recipes examined, and `results` is the length of the returned
    /// list (zero is a normal outcome).
    fn record_query(&self, latency: Duration, scanned: usize, results: usize);

    /// Record a request rejected before the catalog scan.
    fn record_rejection(&self, error: &MatchError);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during startup so every `Engine` shares the
/// same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
