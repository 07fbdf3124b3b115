use async_trait::async_trait;

use super::search_errors::SearchError;
use super::search_model::SearchResults;

/// Trait for search backends.
///
/// The dispatcher calls `search` once per issued query and decides on its
/// own whether the completion is still current, so implementations need not
/// support cancellation.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError>;
}
