//! Search domain models.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A query issued to the search backend.
///
/// `sequence` is the issuance order: strictly increasing per dispatcher.
/// Completions are compared by it, never by arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub sequence: u64,
    pub text: String,
    pub issued_at: DateTime<Utc>,
}

impl QueryRequest {
    pub fn new(sequence: u64, text: impl Into<String>) -> Self {
        Self {
            sequence,
            text: text.into(),
            issued_at: Utc::now(),
        }
    }
}

/// A single matching catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub product_id: String,
    pub name: String,
}

impl SearchHit {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
        }
    }
}

/// Results shown under the "Search results for: <query>" header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        Self {
            query: query.into(),
            hits,
        }
    }

    /// Results with no hits for `query`.
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }
}

/// Observable dispatcher state.
///
/// `Idle → Scheduled → {Idle (superseded), Loading → Displayed}`; the cycle
/// repeats for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatcherState {
    /// Nothing scheduled, nothing in flight, nothing displayed yet.
    Idle,
    /// A debounce timer is pending.
    Scheduled,
    /// The latest issued query has not completed.
    Loading,
    /// The latest issued query's results are displayed.
    Displayed,
}

/// What to show when the backend fails for the latest issued query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFailurePolicy {
    /// Re-show the last displayed results, or empty results if none exist.
    #[default]
    RetainPrevious,
    /// Show empty results for the failed query.
    ShowEmpty,
}

impl FromStr for SearchFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" | "retain_previous" => Ok(Self::RetainPrevious),
            "empty" | "show_empty" => Ok(Self::ShowEmpty),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown search failure policy '{}'",
                other
            ))),
        }
    }
}
