//! Search module - debounced query dispatch, models and backends.

mod pending_timer;
mod search_dispatcher;
mod search_errors;
mod search_model;
mod search_traits;
mod simulated_backend;


pub use pending_timer::PendingTimer;
pub use search_dispatcher::SearchDispatcher;
pub use search_errors::SearchError;
pub use search_model::{
    DispatcherState, QueryRequest, SearchFailurePolicy, SearchHit, SearchResults,
};
pub use search_traits::SearchBackend;
pub use simulated_backend::SimulatedSearchBackend;
