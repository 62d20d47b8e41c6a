//! Config loading, validation, and conversion to node settings.

use super::model::Config;
use crate::error::{NodeError, Result};
use crate::node::NodeSettings;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(NodeError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NodeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the config at `path`, or the defaults when no path is given.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| NodeError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            NodeError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `command` must be non-empty
    /// - `default_model` must be non-empty
    /// - `default_timeout_seconds` must be a positive, finite number
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(NodeError::ConfigError(
                "config validation failed: command must be non-empty".to_string(),
            ));
        }

        if self.default_model.trim().is_empty() {
            return Err(NodeError::ConfigError(
                "config validation failed: default_model must be non-empty".to_string(),
            ));
        }

        if !self.default_timeout_seconds.is_finite() || self.default_timeout_seconds <= 0.0 {
            return Err(NodeError::ConfigError(format!(
                "config validation failed: default_timeout_seconds must be greater than 0 (found {})",
                self.default_timeout_seconds
            )));
        }

        Ok(())
    }

    /// Settings for one execution of the node.
    pub fn node_settings(&self) -> NodeSettings {
        NodeSettings {
            command: self.command.clone(),
            default_model: self.default_model.clone(),
            default_timeout_seconds: self.default_timeout_seconds,
            mode: self.invocation,
            continue_on_fail: self.continue_on_fail,
        }
    }
}
