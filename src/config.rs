use crate::warn;
use std::{env, time::Duration};

/// Environment variable holding the base URL of the command endpoint.
pub const COMMAND_URL_VAR: &str = "RT_COMMAND_URL";
/// Environment variable holding the request timeout in milliseconds.
pub const COMMAND_TIMEOUT_VAR: &str = "RT_COMMAND_TIMEOUT_MS";

const DEFAULT_URL: &str = "http://localhost:8085";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to reach the flight computer command endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for SinkConfig {
    fn default() -> Self { Self { base_url: DEFAULT_URL.to_string(), timeout: DEFAULT_TIMEOUT } }
}

impl SinkConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self { base_url: base_url.to_string(), timeout }
    }

    /// Reads [`COMMAND_URL_VAR`] and [`COMMAND_TIMEOUT_VAR`], falling back to
    /// `http://localhost:8085` and 5 s.
    pub fn from_env() -> Self { Self::from_lookup(|key| env::var(key).ok()) }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let base_url = lookup(COMMAND_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let timeout = lookup(COMMAND_TIMEOUT_VAR).map_or(DEFAULT_TIMEOUT, |raw| {
            raw.trim().parse::<u64>().map(Duration::from_millis).unwrap_or_else(|_| {
                warn!("Ignoring invalid {COMMAND_TIMEOUT_VAR}={raw}, using {DEFAULT_TIMEOUT:?}");
                DEFAULT_TIMEOUT
            })
        });
        Self { base_url, timeout }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub fn timeout(&self) -> Duration { self.timeout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SinkConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SinkConfig::default());
        assert_eq!(config.base_url(), "http://localhost:8085");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = SinkConfig::from_lookup(lookup(&[
            (COMMAND_URL_VAR, "http://ksp-host:9000"),
            (COMMAND_TIMEOUT_VAR, " 250 "),
        ]));
        assert_eq!(config, SinkConfig::new("http://ksp-host:9000", Duration::from_millis(250)));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SinkConfig::from_lookup(lookup(&[
            (COMMAND_URL_VAR, "  "),
            (COMMAND_TIMEOUT_VAR, "soon"),
        ]));
        assert_eq!(config, SinkConfig::default());
    }
}
