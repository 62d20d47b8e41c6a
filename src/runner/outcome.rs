//! Terminal results of a runner invocation.

use thiserror::Error;

/// Error text reported for a failed process that wrote nothing to stderr.
pub const NO_ERROR_OUTPUT: &str = "Process failed with no error output";

/// Result of a process that ran to completion.
///
/// A non-zero exit code is still an outcome, not a failure: the caller
/// decides what an unsuccessful run means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutcome {
    /// True exactly when `exit_code == 0`.
    pub succeeded: bool,
    /// Stdout text, or stderr text when stdout was empty.
    pub combined_output: String,
    /// Exit code of the process (-1 when it was ended by a signal).
    pub exit_code: i32,
    /// Stderr text (or [`NO_ERROR_OUTPUT`]) for unsuccessful runs.
    pub error_text: Option<String>,
}

impl InvocationOutcome {
    /// Assemble an outcome from the final accumulator contents.
    pub fn from_streams(exit_code: i32, stdout: String, stderr: String) -> Self {
        let succeeded = exit_code == 0;

        let error_text = if succeeded {
            None
        } else if stderr.is_empty() {
            Some(NO_ERROR_OUTPUT.to_string())
        } else {
            Some(stderr.clone())
        };

        let combined_output = if stdout.is_empty() { stderr } else { stdout };

        Self {
            succeeded,
            combined_output,
            exit_code,
            error_text,
        }
    }
}

/// A runner fault: the invocation did not produce an outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvocationFailure {
    /// The process could not be launched (e.g. command not found).
    #[error("{message}")]
    Startup { message: String },

    /// The process was still running when the timeout fired.
    #[error("{message}")]
    Timeout {
        timeout_seconds: f64,
        message: String,
    },
}

impl InvocationFailure {
    pub fn startup(command: &str, err: impl std::fmt::Display) -> Self {
        InvocationFailure::Startup {
            message: format!("Failed to start {}: {}", command, err),
        }
    }

    pub fn timeout(command: &str, timeout_seconds: f64) -> Self {
        InvocationFailure::Timeout {
            timeout_seconds,
            message: format!(
                "{} execution timed out after {} seconds",
                command, timeout_seconds
            ),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, InvocationFailure::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success_without_error_text() {
        let outcome = InvocationOutcome::from_streams(0, "done\n".into(), "warn\n".into());
        assert!(outcome.succeeded);
        assert_eq!(outcome.combined_output, "done\n");
        assert_eq!(outcome.error_text, None);
    }

    #[test]
    fn empty_streams_with_zero_exit_give_empty_output() {
        let outcome = InvocationOutcome::from_streams(0, String::new(), String::new());
        assert!(outcome.succeeded);
        assert_eq!(outcome.combined_output, "");
        assert_eq!(outcome.error_text, None);
    }

    #[test]
    fn stderr_fills_in_for_empty_stdout() {
        let outcome = InvocationOutcome::from_streams(2, String::new(), "boom".into());
        assert!(!outcome.succeeded);
        assert_eq!(outcome.combined_output, "boom");
        assert_eq!(outcome.error_text.as_deref(), Some("boom"));
    }

    #[test]
    fn silent_failure_uses_fallback_error_text() {
        let outcome = InvocationOutcome::from_streams(1, "partial".into(), String::new());
        assert!(!outcome.succeeded);
        assert_eq!(outcome.combined_output, "partial");
        assert_eq!(outcome.error_text.as_deref(), Some(NO_ERROR_OUTPUT));
    }

    #[test]
    fn timeout_message_names_the_timeout() {
        let err = InvocationFailure::timeout("auggie", 300.0);
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "auggie execution timed out after 300 seconds"
        );

        let err = InvocationFailure::timeout("auggie", 0.5);
        assert!(err.to_string().contains("0.5 seconds"));
    }

    #[test]
    fn startup_message_carries_system_error() {
        let err = InvocationFailure::startup("auggie", "No such file or directory (os error 2)");
        assert!(!err.is_timeout());
        assert_eq!(
            err.to_string(),
            "Failed to start auggie: No such file or directory (os error 2)"
        );
    }
}
