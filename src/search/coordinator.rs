//! Search request sequencing
//!
//! Every call to [`SearchCoordinator::search`] takes a new request number.
//! A request waits out the debounce interval, and only performs a lookup if
//! no newer request arrived meanwhile. A lookup's results are applied only if
//! it is still the latest request when it completes, so a slow answer to an
//! abandoned query can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;

use super::IngredientSource;
use crate::models::NutritionCandidate;

/// Shortest trimmed query that triggers a lookup
pub const MIN_QUERY_CHARS: usize = 3;

/// Default quiet period before a lookup is dispatched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// The visible search state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    /// Query text as last entered
    pub query: String,
    /// Candidates from the most recent applied lookup
    pub results: Vec<NutritionCandidate>,
    /// A lookup for `query` is pending
    pub loading: bool,
    /// Request number whose outcome `results` reflects
    pub applied_request: u64,
}

/// What happened to one search request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Query too short; no lookup, results cleared
    Suppressed { request: u64 },
    /// A newer request arrived during the debounce; no lookup made
    Superseded { request: u64 },
    /// Lookup finished after a newer request was issued; results discarded
    Stale { request: u64 },
    /// Results are now the visible result set
    Applied {
        request: u64,
        results: Vec<NutritionCandidate>,
    },
}

impl SearchOutcome {
    pub fn request(&self) -> u64 {
        match self {
            SearchOutcome::Suppressed { request }
            | SearchOutcome::Superseded { request }
            | SearchOutcome::Stale { request }
            | SearchOutcome::Applied { request, .. } => *request,
        }
    }
}

/// Gates, debounces and orders lookups against one ingredient source
pub struct SearchCoordinator {
    source: Arc<dyn IngredientSource>,
    debounce: Duration,
    latest_request: AtomicU64,
    state: Mutex<SearchState>,
}

impl SearchCoordinator {
    pub fn new(source: Arc<dyn IngredientSource>, debounce: Duration) -> Self {
        Self {
            source,
            debounce,
            latest_request: AtomicU64::new(0),
            state: Mutex::new(SearchState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        // State is plain data; a panic elsewhere can't leave it half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn is_latest(&self, request: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == request
    }

    /// Handle a change of the search input
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let trimmed = query.trim();
        let too_short = trimmed.chars().count() < MIN_QUERY_CHARS;

        // Numbered under the state lock so request order matches write order.
        let request = {
            let mut state = self.lock_state();
            let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            state.query = query.to_string();
            if too_short {
                state.results.clear();
                state.loading = false;
                state.applied_request = request;
            } else {
                state.loading = true;
            }
            request
        };

        if too_short {
            tracing::debug!(request, "Search query too short, results cleared");
            return SearchOutcome::Suppressed { request };
        }

        tokio::time::sleep(self.debounce).await;
        if !self.is_latest(request) {
            tracing::debug!(request, "Search superseded during debounce");
            return SearchOutcome::Superseded { request };
        }

        tracing::info!(request, query = trimmed, "Dispatching ingredient lookup");
        let results = self.source.search(trimmed).await;

        let mut state = self.lock_state();
        if !self.is_latest(request) {
            tracing::debug!(request, "Discarding stale lookup results");
            return SearchOutcome::Stale { request };
        }
        state.results = results.clone();
        state.loading = false;
        state.applied_request = request;
        SearchOutcome::Applied { request, results }
    }

    /// Snapshot of the visible search state
    pub fn state(&self) -> SearchState {
        self.lock_state().clone()
    }

    /// A candidate from the visible result set
    pub fn candidate(&self, index: usize) -> Option<NutritionCandidate> {
        self.lock_state().results.get(index).cloned()
    }

    pub fn result_count(&self) -> usize {
        self.lock_state().results.len()
    }

    /// Number of requests issued so far
    pub fn latest_request(&self) -> u64 {
        self.latest_request.load(Ordering::SeqCst)
    }

    /// Drop the visible results, e.g. once a candidate has been chosen
    ///
    /// Also invalidates anything still in flight.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        *state = SearchState {
            applied_request: request,
            ..SearchState::default()
        };
    }
}
