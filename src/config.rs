//! Service configuration
//!
//! Loaded once at startup (CLI flags or environment) and injected into
//! the handler. Nothing reads configuration from ambient globals during
//! request handling, which keeps tests free to build their own.

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Accepted API keys. A request must present one of these verbatim.
    pub api_keys: Vec<String>,
    /// Team/service identity reported in responses.
    pub team: String,
}

impl Config {
    /// Build a config from a comma-separated key list and a team name.
    /// Entries are trimmed; empty entries are dropped.
    pub fn new(api_keys_csv: &str, team: &str) -> Self {
        let api_keys = api_keys_csv
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        Self {
            api_keys,
            team: team.to_string(),
        }
    }

    /// True when `key` is on the allow-list.
    pub fn key_allowed(&self, key: &str) -> bool {
        self.api_keys.iter().any(|k| k == key)
    }
}
