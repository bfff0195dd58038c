//! # Result Fetcher Module
//!
//! ## Purpose
//! Cancellable fetch lifecycle for search requests. Holds the single
//! pending-request slot: starting a new fetch always cancels and discards any
//! prior in-flight request before issuing, so of all fetches issued only the
//! most recently issued one may ever publish a result.
//!
//! ## Input/Output Specification
//! - **Input**: Canonical [`SearchParameters`] snapshots
//! - **Output**: Published [`SearchOutcome`] state plus a loading flag, or a
//!   suppressed outcome when superseded
//! - **Ordering**: Enforced structurally by cancel-before-issue and a
//!   slot-keyed publish check, never by timestamp comparison
//!
//! ## Key Features
//! - At most one live request; replace-then-issue is atomic under the slot lock
//! - Cooperative cancellation: the token is signalled at the network boundary
//!   and re-checked before publishing, since cancelling finished work can only
//!   suppress its effect, not un-deliver the response
//! - Failures reset published state to empty and go to the failure collector;
//!   cancellation is silent and is not an error

use crate::backend::SearchBackend;
use crate::errors::SearchError;
use crate::model::SearchOutcome;
use crate::query::SearchParameters;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Result of one `fetch` call
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// This fetch was the live one and its outcome is now published
    Published(SearchOutcome),
    /// A newer fetch (or teardown) superseded this one; nothing was published
    Superseded,
}

/// Collaborator receiving fetch failures for logging or telemetry
pub trait FailureCollector: Send + Sync {
    fn record(&self, error: &SearchError, params: &SearchParameters);
}

/// Default collector: reports through `tracing`
pub struct TracingFailureCollector;

impl FailureCollector for TracingFailureCollector {
    fn record(&self, error: &SearchError, params: &SearchParameters) {
        tracing::error!(
            category = error.category(),
            query = %params.query_text,
            page = params.page,
            "search fetch failed: {}",
            error
        );
    }
}

/// The at-most-one in-flight request
struct PendingRequest {
    token: CancellationToken,
    seq: u64,
}

/// Published view state owned by the fetcher
#[derive(Debug, Default)]
struct FetchState {
    outcome: SearchOutcome,
    loading: bool,
}

/// Issues search requests and publishes their outcomes.
///
/// Lock ordering is `pending` before `state` everywhere.
pub struct ResultFetcher {
    backend: Arc<dyn SearchBackend>,
    collector: Arc<dyn FailureCollector>,
    pending: Mutex<Option<PendingRequest>>,
    state: Mutex<FetchState>,
    next_seq: AtomicU64,
}

impl ResultFetcher {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self::with_collector(backend, Arc::new(TracingFailureCollector))
    }

    pub fn with_collector(
        backend: Arc<dyn SearchBackend>,
        collector: Arc<dyn FailureCollector>,
    ) -> Self {
        Self {
            backend,
            collector,
            pending: Mutex::new(None),
            state: Mutex::new(FetchState::default()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Currently published outcome
    pub fn outcome(&self) -> SearchOutcome {
        self.state.lock().outcome.clone()
    }

    /// Whether a live, non-superseded request is active
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Issue one search request, superseding any prior pending fetch.
    ///
    /// On success publishes the decoded outcome; on failure records the error
    /// and publishes the empty outcome; when superseded publishes nothing and
    /// leaves prior state authoritative.
    pub async fn fetch(&self, params: SearchParameters) -> FetchOutcome {
        let (token, seq) = self.supersede_and_register();

        let result = tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(seq, "fetch superseded at network boundary");
                return FetchOutcome::Superseded;
            }
            result = self.backend.search(&params) => result,
        };

        match result {
            Ok(response) => self.try_publish(seq, response.into_outcome()),
            Err(error) => {
                // a cancelled request that happened to fail stays silent
                if token.is_cancelled() {
                    return FetchOutcome::Superseded;
                }
                self.collector.record(&error, &params);
                self.try_publish(seq, SearchOutcome::empty())
            }
        }
    }

    /// Clear published state and cancel any pending fetch. Used when the query
    /// text becomes empty.
    pub fn clear(&self) {
        let mut pending = self.pending.lock();
        if let Some(prev) = pending.take() {
            prev.token.cancel();
        }
        let mut state = self.state.lock();
        state.outcome = SearchOutcome::empty();
        state.loading = false;
    }

    /// Cancel any pending fetch without touching published state. Called on
    /// component teardown so nothing publishes into a destroyed view.
    pub fn shutdown(&self) {
        let mut pending = self.pending.lock();
        if let Some(prev) = pending.take() {
            prev.token.cancel();
        }
        self.state.lock().loading = false;
    }

    /// Atomically cancel the previous request and register a new one
    fn supersede_and_register(&self) -> (CancellationToken, u64) {
        let mut pending = self.pending.lock();
        if let Some(prev) = pending.take() {
            prev.token.cancel();
        }
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let token = CancellationToken::new();
        *pending = Some(PendingRequest {
            token: token.clone(),
            seq,
        });
        self.state.lock().loading = true;
        (token, seq)
    }

    /// Publish only if this fetch still owns the slot
    fn try_publish(&self, seq: u64, outcome: SearchOutcome) -> FetchOutcome {
        let mut pending = self.pending.lock();
        let live = matches!(
            pending.as_ref(),
            Some(p) if p.seq == seq && !p.token.is_cancelled()
        );
        if !live {
            tracing::debug!(seq, "fetch completed after supersession, suppressed");
            return FetchOutcome::Superseded;
        }
        *pending = None;
        let mut state = self.state.lock();
        state.outcome = outcome.clone();
        state.loading = false;
        FetchOutcome::Published(outcome)
    }
}

impl Drop for ResultFetcher {
    fn drop(&mut self) {
        if let Some(prev) = self.pending.lock().take() {
            prev.token.cancel();
        }
    }
}
