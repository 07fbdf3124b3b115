//! Core error types for the storefront core.
//!
//! Most anomalies in this crate degrade to a safe default instead of failing
//! (quantities clamp, stale completions are dropped). The types here cover the
//! remaining cases: strict constructors, configuration and backend failures.

use thiserror::Error;

use crate::search::SearchError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the storefront core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Cart backend failed: {0}")]
    CartBackend(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Unit price for line '{line_id}' must not be negative (got {unit_price})")]
    NegativeUnitPrice {
        line_id: String,
        unit_price: rust_decimal::Decimal,
    },
}
