//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast on malformed values. No process-global
//! state: the loaded value is passed into constructors explicitly.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker loops in the pool.
    pub workers: usize,
    /// Admission queue depth; submissions beyond it are load-shed.
    pub queue_depth: usize,
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this if a .env
    /// file is in play.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let workers = parsed_var("WORKER_COUNT")?.unwrap_or(defaults.workers);
        let queue_depth = parsed_var("QUEUE_DEPTH")?.unwrap_or(workers);
        let log_level =
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| defaults.log_level);

        Ok(Self {
            workers,
            queue_depth,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        let workers = default_workers();
        Self {
            workers,
            queue_depth: workers,
            log_level: "info".to_string(),
        }
    }
}

/// Twice the logical core count, matching the pool's CPU-bound-plus-waiting
/// workload profile.
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(8)
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("invalid value for {name}: {raw}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.workers >= 2);
        assert_eq!(config.queue_depth, config.workers);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_numeric_var_is_a_config_error() {
        let err = parsed_var::<usize>("PATH").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
