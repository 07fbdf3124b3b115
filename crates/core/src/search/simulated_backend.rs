//! Fixed-latency stand-in for the storefront search API.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::search_errors::SearchError;
use super::search_model::{SearchHit, SearchResults};
use super::search_traits::SearchBackend;

/// Search backend that answers after a fixed delay.
///
/// Without a catalog it returns no hits, which renders as a bare
/// "results for <query>" header.
pub struct SimulatedSearchBackend {
    latency: Duration,
    catalog: Vec<SearchHit>,
}

impl SimulatedSearchBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            catalog: Vec::new(),
        }
    }

    /// Entries whose name contains the query (case-insensitive) are returned
    /// as hits.
    pub fn with_catalog(mut self, catalog: Vec<SearchHit>) -> Self {
        self.catalog = catalog;
        self
    }

    fn matching(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        self.catalog
            .iter()
            .filter(|hit| hit.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SearchBackend for SimulatedSearchBackend {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        tokio::time::sleep(self.latency).await;
        let hits = self.matching(query);
        debug!("Simulated search {:?} matched {} item(s)", query, hits.len());
        Ok(SearchResults::new(query, hits))
    }
}
