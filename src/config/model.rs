//! Config struct definition and default implementation.

use crate::node::DEFAULT_MODEL;
use crate::runner::{DEFAULT_TIMEOUT_SECONDS, InvocationMode};
use serde::{Deserialize, Serialize};

/// Configuration for the node.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CLI program name or path (default: "auggie").
    #[serde(default = "default_command")]
    pub command: String,

    /// Model used when an item does not select one.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Timeout used when an item does not set one.
    #[serde(default = "default_timeout_seconds")]
    pub default_timeout_seconds: f64,

    /// Launch the CLI directly or through the platform shell.
    #[serde(default)]
    pub invocation: InvocationMode,

    /// Record failing items as error records instead of aborting.
    #[serde(default)]
    pub continue_on_fail: bool,
}

// Default value functions for serde
fn default_command() -> String {
    "auggie".to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_timeout_seconds() -> f64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: default_command(),
            default_model: default_model(),
            default_timeout_seconds: default_timeout_seconds(),
            invocation: InvocationMode::default(),
            continue_on_fail: false,
        }
    }
}
