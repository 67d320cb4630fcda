//! # Larder Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers "what can I cook with what I have?". Given a snapshot of
//! admitted recipes from the `catalog` crate and a [`MatchRequest`], it finds
//! recipes whose required ingredients overlap the user's, drops the ones that
//! violate the request's constraints, and returns the rest best-first.
//!
//! The engine is a pure function of (catalog, request): it keeps no state
//! between calls, never mutates its inputs, and borrows recipes out of the
//! caller's catalog instead of copying them.
//!
//! ## Pipeline
//!
//! 1. **Validate** - [`MatchRequest::validate`] normalizes ingredients with the
//!    `canonical` crate and resolves difficulty, duration and dietary
//!    restrictions into a [`Query`]. Invalid requests fail here, before any
//!    recipe is looked at.
//! 2. **Relevance** - [`relevance::match_count`] counts required tokens that
//!    overlap a user token by substring containment in either direction. One
//!    overlap makes a recipe a candidate.
//! 3. **Constraints** - [`filter::passes`] applies the duration ceiling, exact
//!    difficulty and whole-token dietary exclusions.
//! 4. **Ranking** - [`ranker::rank`] orders by match count, then rating, then
//!    recipe id, so equal inputs always produce equal output.
//!
//! ## Core Types
//!
//! - [`Engine`]: the entry point; owns the injected [`DietaryTable`].
//! - [`MatchRequest`]: ingredients plus optional constraints, serde-friendly.
//! - [`MatchResult`]: borrowed recipe and its match count.
//! - [`MatchError`]: `EmptyQuery` or `InvalidConstraint`. No results is not an
//!   error.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{seed_catalog, CatalogConfig};
//! use matcher::{Engine, MatchRequest};
//!
//! let catalog = seed_catalog(&CatalogConfig::default()).expect("seed catalog");
//! let engine = Engine::default();
//!
//! let request = MatchRequest::new(["rice", "eggs"])
//!     .with_difficulty("easy")
//!     .with_max_duration(20);
//! let results = engine.query(catalog.recipes(), &request).expect("valid request");
//!
//! assert_eq!(results[0].item.title, "Leftover Rice Fried Rice");
//! assert_eq!(results[0].match_count, 2);
//! ```
//!
//! ## Observability
//!
//! Each query runs inside a `matcher.query` tracing span and ends with a
//! `query_success` or `query_rejected` event. Install a [`MatchMetrics`]
//! implementation via [`set_match_metrics`] to record latency and result
//! counts; this is typically done once during startup.

pub mod engine;
pub mod filter;
pub mod metrics;
pub mod ranker;
pub mod relevance;
pub mod types;

pub use crate::engine::Engine;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{DietaryTable, MatchError, MatchRequest, MatchResult, Query};
