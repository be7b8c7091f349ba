//! Transport configuration.

use serde::Deserialize;

/// Configuration for the reqwest command transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Per-request timeout in seconds. Commands exceeding it are reported
    /// as transport failures.
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn should_deserialize_from_toml() {
        let config: TransportConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: TransportConfig = toml::from_str("").unwrap();
        assert_eq!(config.timeout_secs, 30);
    }
}
