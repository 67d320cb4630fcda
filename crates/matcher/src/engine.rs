use std::time::Instant;

use catalog::Recipe;
use tracing::{info, warn, Level};

use crate::filter::passes_canonical;
use crate::metrics::metrics_recorder;
use crate::ranker::rank;
use crate::relevance::covered_count;
use crate::types::{DietaryTable, MatchError, MatchRequest, MatchResult, Query};


/// Recipe matching engine.
///
/// Holds only the dietary table; the catalog is passed into every call and
/// never retained, so one engine can serve concurrent queries against any
/// number of snapshots.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    dietary: DietaryTable,
}

impl Engine {
    pub fn new(dietary: DietaryTable) -> Self {
        Self { dietary }
    }

    pub fn dietary(&self) -> &DietaryTable {
        &self.dietary
    }

    /// Validate `request`, then match, filter and rank `catalog`.
    ///
    /// Validation happens before any recipe is looked at; on error nothing
    /// is scanned. An empty `Ok` list means nothing qualified.
    pub fn query<'c>(
        &self,
        catalog: &'c [Recipe],
        request: &MatchRequest,
    ) -> Result<Vec<MatchResult<'c>>, MatchError> {
        let start = Instant::now();
        let query = self.validate(request)?;

        let span = tracing::span!(
            Level::INFO,
            "matcher.query",
            user_tokens = query.user_tokens.len(),
            scanned = catalog.len()
        );
        let _guard = span.enter();

        let (results, candidates) = self.scan(catalog, &query);
        let latency = start.elapsed();
        info!(
            candidates,
            results = results.len(),
            elapsed_micros = latency.as_micros(),
            "query_success"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_query(latency, catalog.len(), results.len());
        }

        Ok(results)
    }

    /// Resolve `request` against this engine's dietary table.
    ///
    /// Rejections are logged as `query_rejected` and reported to the metrics
    /// recorder. Callers that validate ahead of fetching a catalog go through
    /// here so every rejected request is observed exactly once.
    pub fn validate(&self, request: &MatchRequest) -> Result<Query, MatchError> {
        let start = Instant::now();
        request.validate(&self.dietary).inspect_err(|err| {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, kind = err.kind(), elapsed_micros, "query_rejected");
            if let Some(recorder) = metrics_recorder() {
                recorder.record_rejection(err);
            }
        })
    }

    /// Top-ranked result of [`Engine::query`], if any.
    pub fn best_match<'c>(
        &self,
        catalog: &'c [Recipe],
        request: &MatchRequest,
    ) -> Result<Option<MatchResult<'c>>, MatchError> {
        Ok(self.query(catalog, request)?.into_iter().next())
    }

    /// Run a query produced by [`Engine::validate`] or
    /// [`MatchRequest::validate`]. Pure: no logging, no metrics.
    ///
    /// A [`Query`] can only be built by validation, so its user tokens are
    /// canonical and never empty.
    pub fn execute<'c>(&self, catalog: &'c [Recipe], query: &Query) -> Vec<MatchResult<'c>> {
        self.scan(catalog, query).0
    }

    /// Single pass over the catalog; returns ranked results and the number of
    /// relevance candidates seen before constraint filtering.
    fn scan<'c>(&self, catalog: &'c [Recipe], query: &Query) -> (Vec<MatchResult<'c>>, usize) {
        let mut candidates = 0usize;
        let mut survivors = Vec::new();

        for (catalog_index, item) in catalog.iter().enumerate() {
            let required = canonical::normalize_tokens(&item.required_tokens);
            let match_count = covered_count(&required, &query.user_tokens);
            if match_count == 0 {
                continue;
            }
            candidates += 1;
            if !passes_canonical(item, &required, query) {
                continue;
            }
            survivors.push(MatchResult {
                item,
                match_count,
                catalog_index,
            });
        }

        (rank(survivors), candidates)
    }
}
