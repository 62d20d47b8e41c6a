//! Per-item node parameters.

use serde::{Deserialize, Serialize};

/// Model used when no `--model` flag is passed to the CLI.
pub const DEFAULT_MODEL: &str = "sonnet-4.5";

/// Models offered by the node. Other values are passed through unchanged.
pub const KNOWN_MODELS: &[&str] = &["sonnet-4.5", "sonnet-4", "gpt-5"];

/// How the CLI reports its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Execute once and return output.
    #[default]
    Print,
    /// Only the final output, without intermediate steps.
    Quiet,
    /// Tool calls, results and final response as one line each.
    Compact,
}

impl OutputMode {
    /// The CLI flag selecting this mode.
    pub fn flag(self) -> &'static str {
        match self {
            OutputMode::Print => "--print",
            OutputMode::Quiet => "--quiet",
            OutputMode::Compact => "--compact",
        }
    }
}

/// Optional settings grouped under "Additional Options".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdditionalOptions {
    /// Log execution details and stream CLI output to the log.
    pub debug: bool,
    /// Extra arguments, separated by whitespace.
    pub custom_args: String,
}

/// Parameters for one input item, as resolved by the host.
///
/// Field names match the host's JSON (`projectPath`, `outputMode`, ...).
/// Missing fields take their defaults; `timeout` falls back to the
/// configured default when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeParameters {
    /// Instruction sent to the CLI. Required.
    pub prompt: String,
    /// Working directory for the CLI; empty means the current directory.
    pub project_path: String,
    pub output_mode: OutputMode,
    /// Model selector; None uses the configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Timeout in seconds; None uses the configured default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
    pub additional_options: AdditionalOptions,
}

impl NodeParameters {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// A prompt that is empty or only whitespace.
    pub fn has_blank_prompt(&self) -> bool {
        self.prompt.trim().is_empty()
    }

    /// Prompt shortened for log lines.
    pub fn prompt_preview(&self) -> String {
        let preview: String = self.prompt.chars().take(100).collect();
        format!("{}...", preview)
    }
}
