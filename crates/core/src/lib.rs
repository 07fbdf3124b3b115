//! Storefront Core - debounced search dispatch and cart recalculation.
//!
//! This crate contains the interactive logic behind a storefront page. It is
//! rendering-agnostic: every presentation change leaves through the
//! `ViewRenderer` trait, and the search and add-to-cart backends are traits
//! with fixed-latency simulated implementations.

pub mod cart;
pub mod config;
pub mod constants;
pub mod errors;
pub mod notifications;
pub mod search;
pub mod storefront;
pub mod utils;
pub mod view;

pub use config::StorefrontConfig;
pub use storefront::Storefront;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
