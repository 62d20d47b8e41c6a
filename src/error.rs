//! Error types for auggie-node.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::runner::InvocationFailure;
use thiserror::Error;

/// Main error type for node operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum NodeError {
    /// User provided invalid arguments or input.
    #[error("{0}")]
    UserError(String),

    /// The configuration file could not be read or is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An item's parameters were rejected before any process was spawned.
    #[error("{0}")]
    ValidationError(String),

    /// The runner failed to start the CLI or the CLI timed out.
    #[error(transparent)]
    Invocation(#[from] InvocationFailure),

    /// An item failed and continue-on-fail is not active.
    #[error("{message}")]
    ItemFailed {
        message: String,
        description: String,
        item_index: usize,
        /// Exit code of the underlying error.
        code: i32,
    },
}

impl NodeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NodeError::UserError(_) => exit_codes::USER_ERROR,
            NodeError::ConfigError(_) => exit_codes::USER_ERROR,
            NodeError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            NodeError::Invocation(_) => exit_codes::EXECUTION_FAILURE,
            NodeError::ItemFailed { code, .. } => *code,
        }
    }

    /// Whether the underlying failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, NodeError::Invocation(failure) if failure.is_timeout())
    }

    /// Short description of the error, prefixed by its kind.
    pub fn detail(&self) -> String {
        let kind = match self {
            NodeError::UserError(_) => "user error",
            NodeError::ConfigError(_) => "config error",
            NodeError::ValidationError(_) => "validation error",
            NodeError::Invocation(InvocationFailure::Startup { .. }) => "startup failure",
            NodeError::Invocation(InvocationFailure::Timeout { .. }) => "timeout",
            NodeError::ItemFailed { .. } => "item failure",
        };
        format!("{}: {}", kind, self)
    }

    /// Convert an item-level error into the fatal error shown to the user.
    pub fn into_item_failure(self, timeout_seconds: f64, item_index: usize) -> NodeError {
        let code = self.exit_code();
        let description = self.to_string();
        let message = if self.is_timeout() {
            format!(
                "Operation timed out after {} seconds. Consider increasing the timeout.",
                timeout_seconds
            )
        } else {
            format!("Auggie CLI execution failed: {}", description)
        };

        NodeError::ItemFailed {
            message,
            description,
            item_index,
            code,
        }
    }
}

/// Result type alias for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
