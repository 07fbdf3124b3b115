use thiserror::Error;

/// Errors reported by a search backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search backend unavailable: {0}")]
    Unavailable(String),
}
