//! Runtime configuration for the storefront core.

use std::time::Duration;

use log::warn;

use crate::constants::{
    MIN_QUERY_CHARS, NOTIFICATION_TTL_MS, SEARCH_DEBOUNCE_MS, SIMULATED_ADD_TO_CART_LATENCY_MS,
    SIMULATED_SEARCH_LATENCY_MS,
};
use crate::search::SearchFailurePolicy;

/// Timing and policy knobs shared by the core components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Quiet period before a typed query is dispatched.
    pub search_debounce: Duration,
    /// Latency of the simulated search backend.
    pub search_latency: Duration,
    /// Latency of the simulated add-to-cart backend.
    pub add_to_cart_latency: Duration,
    /// Delay before a notification dismisses itself.
    pub notification_ttl: Duration,
    /// Queries with fewer characters than this are ignored.
    pub min_query_chars: usize,
    /// What to show when the search backend fails for the current query.
    pub search_failure_policy: SearchFailurePolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            search_latency: Duration::from_millis(SIMULATED_SEARCH_LATENCY_MS),
            add_to_cart_latency: Duration::from_millis(SIMULATED_ADD_TO_CART_LATENCY_MS),
            notification_ttl: Duration::from_millis(NOTIFICATION_TTL_MS),
            min_query_chars: MIN_QUERY_CHARS,
            search_failure_policy: SearchFailurePolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Reads the configuration from `SF_*` environment variables.
    ///
    /// Missing variables use the defaults; unparseable ones fall back to the
    /// default with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let duration = |key: &str, default: Duration| -> Duration {
            match lookup(key) {
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(ms) => Duration::from_millis(ms),
                    Err(_) => {
                        warn!(
                            "Invalid {}={:?}, using default {}ms",
                            key,
                            raw,
                            default.as_millis()
                        );
                        default
                    }
                },
                None => default,
            }
        };

        let min_query_chars = match lookup("SF_MIN_QUERY_CHARS") {
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
                warn!(
                    "Invalid SF_MIN_QUERY_CHARS={:?}, using default {}",
                    raw, defaults.min_query_chars
                );
                defaults.min_query_chars
            }),
            None => defaults.min_query_chars,
        };

        let search_failure_policy = match lookup("SF_SEARCH_FAILURE_POLICY") {
            Some(raw) => raw.parse::<SearchFailurePolicy>().unwrap_or_else(|e| {
                warn!("{}, using default {:?}", e, defaults.search_failure_policy);
                defaults.search_failure_policy
            }),
            None => defaults.search_failure_policy,
        };

        Self {
            search_debounce: duration("SF_SEARCH_DEBOUNCE_MS", defaults.search_debounce),
            search_latency: duration("SF_SEARCH_LATENCY_MS", defaults.search_latency),
            add_to_cart_latency: duration(
                "SF_ADD_TO_CART_LATENCY_MS",
                defaults.add_to_cart_latency,
            ),
            notification_ttl: duration("SF_NOTIFICATION_TTL_MS", defaults.notification_ttl),
            min_query_chars,
            search_failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.search_debounce, Duration::from_millis(500));
        assert_eq!(config.search_latency, Duration::from_millis(1000));
        assert_eq!(config.add_to_cart_latency, Duration::from_millis(1000));
        assert_eq!(config.notification_ttl, Duration::from_millis(5000));
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(
            config.search_failure_policy,
            SearchFailurePolicy::RetainPrevious
        );
    }

    #[test]
    fn test_empty_lookup_yields_defaults() {
        let config = StorefrontConfig::from_lookup(|_| None);
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("SF_SEARCH_DEBOUNCE_MS", "250"),
            ("SF_SEARCH_LATENCY_MS", " 40 "),
            ("SF_MIN_QUERY_CHARS", "3"),
            ("SF_SEARCH_FAILURE_POLICY", "empty"),
        ]));
        assert_eq!(config.search_debounce, Duration::from_millis(250));
        assert_eq!(config.search_latency, Duration::from_millis(40));
        assert_eq!(config.min_query_chars, 3);
        assert_eq!(config.search_failure_policy, SearchFailurePolicy::ShowEmpty);
        assert_eq!(config.notification_ttl, Duration::from_millis(5000));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("SF_SEARCH_DEBOUNCE_MS", "soon"),
            ("SF_MIN_QUERY_CHARS", "-1"),
            ("SF_SEARCH_FAILURE_POLICY", "panic"),
        ]));
        assert_eq!(config, StorefrontConfig::default());
    }
}
