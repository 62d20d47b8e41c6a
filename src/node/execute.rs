//! Per-item execution of the Auggie CLI.

use super::args::{build_arguments, render_command_line, resolve_working_directory};
use super::params::{DEFAULT_MODEL, KNOWN_MODELS, NodeParameters};
use super::records::{ErrorKind, ErrorRecord, NodeItem, ResultRecord};
use crate::error::{NodeError, Result};
use crate::runner::{
    self, DEFAULT_TIMEOUT_SECONDS, DiagnosticSink, InvocationMode, InvocationRequest, TracingSink,
};
use std::time::Instant;

/// Settings shared by every item in one execution.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSettings {
    /// CLI program name or path.
    pub command: String,
    /// Model used when an item does not select one.
    pub default_model: String,
    /// Timeout used when an item does not set one.
    pub default_timeout_seconds: f64,
    pub mode: InvocationMode,
    /// Record item failures instead of aborting.
    pub continue_on_fail: bool,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            command: "auggie".to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            default_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            mode: InvocationMode::default(),
            continue_on_fail: false,
        }
    }
}

/// Run the CLI once per item, in order.
///
/// With `continue_on_fail`, a failing item yields an error record and
/// processing moves on. Otherwise the first failure is returned as
/// `NodeError::ItemFailed`.
///
/// Output of items with the debug option set is streamed to the log.
pub async fn execute_items(items: &[NodeParameters], settings: &NodeSettings) -> Result<Vec<NodeItem>> {
    let sink = TracingSink::new(&settings.command);
    execute_items_with_sink(items, settings, &sink).await
}

/// Like [`execute_items`], streaming output of debug items to `sink`.
pub async fn execute_items_with_sink(
    items: &[NodeParameters],
    settings: &NodeSettings,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<NodeItem>> {
    let mut output = Vec::with_capacity(items.len());

    for (item_index, params) in items.iter().enumerate() {
        let timeout_seconds = params.timeout.unwrap_or(settings.default_timeout_seconds);

        match execute_item(item_index, params, timeout_seconds, settings, sink).await {
            Ok(record) => output.push(NodeItem::result(record, item_index)),
            Err(err) if settings.continue_on_fail => {
                tracing::warn!(item_index, error = %err, "item failed, continuing");
                output.push(NodeItem::error(ErrorRecord {
                    error: err.to_string(),
                    error_type: if err.is_timeout() {
                        ErrorKind::Timeout
                    } else {
                        ErrorKind::ExecutionError
                    },
                    error_details: Some(err.detail()),
                    item_index,
                }));
            }
            Err(err) => return Err(err.into_item_failure(timeout_seconds, item_index)),
        }
    }

    Ok(output)
}

async fn execute_item(
    item_index: usize,
    params: &NodeParameters,
    timeout_seconds: f64,
    settings: &NodeSettings,
    sink: &dyn DiagnosticSink,
) -> Result<ResultRecord> {
    if params.has_blank_prompt() {
        return Err(NodeError::ValidationError(
            "Prompt is required and cannot be empty".to_string(),
        ));
    }

    if !timeout_seconds.is_finite() || timeout_seconds <= 0.0 {
        return Err(NodeError::ValidationError(format!(
            "Timeout must be a positive number of seconds (got {})",
            timeout_seconds
        )));
    }

    let model = params.model.as_deref().unwrap_or(&settings.default_model);
    let debug = params.additional_options.debug;

    if debug {
        let project_path = match params.project_path.trim() {
            "" => "current directory",
            trimmed => trimmed,
        };
        tracing::info!(
            item_index,
            prompt = %params.prompt_preview(),
            timeout = %format!("{}s", timeout_seconds),
            output_mode = ?params.output_mode,
            model,
            project_path,
            "Starting Auggie CLI execution"
        );
    }

    if !KNOWN_MODELS.contains(&model) {
        tracing::debug!(item_index, model, "model not in the known list, passing it through");
    }

    let args = build_arguments(params, model, DEFAULT_MODEL);
    let cwd = resolve_working_directory(&params.project_path)?;

    if debug {
        tracing::info!(
            command = %settings.command,
            args = ?args,
            cwd = %cwd.display(),
            "Executing Auggie CLI command"
        );
    }

    let request = InvocationRequest::new(&settings.command, args.clone(), cwd)
        .with_timeout_seconds(timeout_seconds)
        .with_verbose(debug)
        .with_mode(settings.mode);

    let start = Instant::now();
    let outcome = runner::run(&request, sink).await?;
    let duration_ms = start.elapsed().as_millis() as u64;

    if debug {
        tracing::info!(
            duration_ms,
            success = outcome.succeeded,
            output_length = outcome.combined_output.len(),
            "Auggie CLI execution completed"
        );
    }

    Ok(ResultRecord {
        result: outcome.combined_output,
        success: outcome.succeeded,
        duration_ms,
        command: render_command_line(&settings.command, &args),
        exit_code: outcome.exit_code,
        error: outcome.error_text,
    })
}
