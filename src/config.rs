//! Runtime configuration
//!
//! Read once from the environment at startup; anything missing or malformed
//! falls back to the built-in default.

use std::time::Duration;

use crate::search::coordinator::DEFAULT_DEBOUNCE;
use crate::search::mock::DEFAULT_MOCK_LATENCY;

pub const DEBOUNCE_ENV: &str = "PORTIONS_SEARCH_DEBOUNCE_MS";
pub const MOCK_LATENCY_ENV: &str = "PORTIONS_MOCK_LATENCY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiet period before an ingredient lookup is dispatched
    pub search_debounce: Duration,
    /// Simulated latency of the canned ingredient source
    pub mock_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_DEBOUNCE,
            mock_latency: DEFAULT_MOCK_LATENCY,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests don't have to touch the process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            search_debounce: millis_or(&lookup, DEBOUNCE_ENV, defaults.search_debounce),
            mock_latency: millis_or(&lookup, MOCK_LATENCY_ENV, defaults.mock_latency),
        }
    }
}

fn millis_or<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                tracing::warn!(
                    "Ignoring {}={:?}: expected whole milliseconds, using {}ms",
                    key,
                    raw,
                    default.as_millis()
                );
                default
            }
        },
    }
}
