//! Back-office configuration

use serde::Deserialize;

use crate::access::Role;

/// Runtime configuration for the back office
#[derive(Debug, Clone, Deserialize)]
pub struct BackOfficeConfig {
    /// Whether to start from the bundled sample dataset
    pub seed_sample_data: bool,
    /// Role the workspace starts in
    pub default_role: Role,
    /// Log level
    pub log_level: String,
}

impl Default for BackOfficeConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            default_role: Role::Agent,
            log_level: "info".to_string(),
        }
    }
}

impl BackOfficeConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("BACKOFFICE"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackOfficeConfig::default();
        assert!(config.seed_sample_data);
        assert_eq!(config.default_role, Role::Agent);
        assert_eq!(config.log_level, "info");
    }
}
