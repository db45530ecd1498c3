use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::errors::ConfigError;
use super::instance::InstanceConfig;
use super::logging::LoggingConfig;

/// Main configuration structure for remoteip-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Backend configuration
    #[serde(default)]
    pub backend: BackendSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BackendSection {
    /// Responder instances, one per answered domain
    #[serde(default)]
    pub instances: Vec<InstanceConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. remoteip-dns.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            Self::from_file(path)
        } else if std::path::Path::new("remoteip-dns.toml").exists() {
            Self::from_file("remoteip-dns.toml")
        } else {
            Ok(Self::default())
        }
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    ///
    /// An instance with an empty domain would never match any query, so it
    /// is rejected here instead of running inert.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.instances.is_empty() {
            return Err(ConfigError::Validation(
                "No backend instances configured".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for instance in &self.backend.instances {
            if instance.domain.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Instance '{}' has an empty domain",
                    instance.name
                )));
            }
            if !seen.insert(instance.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate instance name '{}'",
                    instance.name
                )));
            }
        }

        Ok(())
    }

    /// Look up a configured instance by name.
    pub fn instance(&self, name: &str) -> Option<&InstanceConfig> {
        self.backend.instances.iter().find(|i| i.name == name)
    }
}
