//! Debounced query dispatcher.
//!
//! Coalesces rapid input into at most one dispatched query per quiet period
//! and displays only the result of the most recently issued query, whatever
//! order the backend completes in.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::StorefrontConfig;
use crate::view::{ViewRenderer, ViewUpdate};

use super::pending_timer::PendingTimer;
use super::search_errors::SearchError;
use super::search_model::{DispatcherState, QueryRequest, SearchFailurePolicy, SearchResults};
use super::search_traits::SearchBackend;

/// Issuance bookkeeping guarded by one lock.
#[derive(Default)]
struct IssuanceLedger {
    /// Sequence of the latest issued query (0 = none yet).
    latest_issued: u64,
    /// Sequence of the latest issued query whose completion was rendered.
    latest_settled: u64,
    /// Results currently on screen.
    displayed: Option<SearchResults>,
}

struct DispatcherInner {
    backend: Arc<dyn SearchBackend>,
    renderer: Arc<dyn ViewRenderer>,
    debounce: Duration,
    min_query_chars: usize,
    failure_policy: SearchFailurePolicy,
    timer: PendingTimer,
    ledger: Mutex<IssuanceLedger>,
    /// Serializes result rendering; never held together with `ledger`.
    render_lock: Mutex<()>,
}

impl DispatcherInner {
    fn lock_ledger(&self) -> MutexGuard<'_, IssuanceLedger> {
        self.ledger.lock().unwrap_or_else(|poisoned| {
            warn!("Search dispatcher ledger mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn lock_render(&self) -> MutexGuard<'_, ()> {
        self.render_lock.lock().unwrap_or_else(|poisoned| {
            warn!("Search dispatcher render mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn dispatch(self: &Arc<Self>, text: String) -> Option<QueryRequest> {
        if text.chars().count() < self.min_query_chars {
            debug!("Ignoring short query {:?}", text);
            return None;
        }

        let request = {
            let mut ledger = self.lock_ledger();
            ledger.latest_issued += 1;
            QueryRequest::new(ledger.latest_issued, text)
        };
        info!("Dispatching query #{} {:?}", request.sequence, request.text);
        self.renderer
            .render(ViewUpdate::search_loading(request.text.clone()));

        let inner = Arc::clone(self);
        let in_flight = request.clone();
        tokio::spawn(async move {
            let outcome = inner.backend.search(&in_flight.text).await;
            inner.complete(&in_flight, outcome);
        });

        Some(request)
    }

    fn complete(&self, request: &QueryRequest, outcome: Result<SearchResults, SearchError>) {
        let _rendering = self.lock_render();

        let results = {
            let mut ledger = self.lock_ledger();
            if request.sequence != ledger.latest_issued {
                debug!(
                    "Dropping stale completion for query #{} (latest is #{})",
                    request.sequence, ledger.latest_issued
                );
                return;
            }

            let results = match outcome {
                Ok(results) => results,
                Err(e) => {
                    warn!("Search for {:?} failed: {}", request.text, e);
                    match (self.failure_policy, ledger.displayed.as_ref()) {
                        (SearchFailurePolicy::RetainPrevious, Some(previous)) => previous.clone(),
                        _ => SearchResults::empty(request.text.clone()),
                    }
                }
            };

            ledger.latest_settled = request.sequence;
            ledger.displayed = Some(results.clone());
            results
        };

        // The ledger lock is released so the renderer may read dispatcher state.
        self.renderer.render(ViewUpdate::search_results(results));
    }
}

/// Debounced, cancellable search dispatcher.
///
/// Cheap to clone; clones share the same pending timer and issuance ledger.
/// All methods must be called from within a tokio runtime.
#[derive(Clone)]
pub struct SearchDispatcher {
    inner: Arc<DispatcherInner>,
}

impl SearchDispatcher {
    pub fn new(
        backend: Arc<dyn SearchBackend>,
        renderer: Arc<dyn ViewRenderer>,
        config: &StorefrontConfig,
    ) -> Self {
        Self {
            inner: Arc::new(DispatcherInner {
                backend,
                renderer,
                debounce: config.search_debounce,
                min_query_chars: config.min_query_chars,
                failure_policy: config.search_failure_policy,
                timer: PendingTimer::new(),
                ledger: Mutex::new(IssuanceLedger::default()),
                render_lock: Mutex::new(()),
            }),
        }
    }

    /// Handles a raw input change: restarts the quiet period with `text`.
    pub fn on_input(&self, text: impl Into<String>) {
        let text = text.into();
        debug!(
            "Scheduling query {:?} in {}ms",
            text,
            self.inner.debounce.as_millis()
        );
        let inner = Arc::clone(&self.inner);
        self.inner.timer.reschedule(self.inner.debounce, move || {
            inner.dispatch(text);
            std::future::ready(())
        });
    }

    /// Handles an explicit submit: cancels any pending timer and dispatches
    /// immediately.
    ///
    /// Returns the issued request, or `None` when the query was too short.
    pub fn on_submit(&self, text: impl Into<String>) -> Option<QueryRequest> {
        self.inner.timer.cancel();
        self.inner.dispatch(text.into())
    }

    /// Cancels the pending timer without dispatching.
    pub fn cancel(&self) -> bool {
        self.inner.timer.cancel()
    }

    pub fn state(&self) -> DispatcherState {
        if self.inner.timer.is_pending() {
            return DispatcherState::Scheduled;
        }
        let ledger = self.inner.lock_ledger();
        if ledger.latest_settled < ledger.latest_issued {
            DispatcherState::Loading
        } else if ledger.displayed.is_some() {
            DispatcherState::Displayed
        } else {
            DispatcherState::Idle
        }
    }

    /// Results currently on screen.
    pub fn displayed(&self) -> Option<SearchResults> {
        self.inner.lock_ledger().displayed.clone()
    }

    /// Sequence number of the latest issued query (0 when none was issued).
    pub fn latest_issued(&self) -> u64 {
        self.inner.lock_ledger().latest_issued
    }
}
