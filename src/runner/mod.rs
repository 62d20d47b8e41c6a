//! Bounded process runner.
//!
//! Runs one external command per invocation with:
//!
//! - Captured stdout/stderr accumulated in private buffers
//! - A single-shot timeout that terminates the child
//! - Optional streaming of chunks to an injected diagnostic sink
//! - Final-argument quoting for shell invocation
//!
//! Each call ends in exactly one terminal state: an [`InvocationOutcome`]
//! (the process exited, with any exit code), or an [`InvocationFailure`]
//! (the process could not be started, or it timed out).

mod executor;
mod outcome;
mod quoting;
mod sink;


pub use executor::{DEFAULT_TIMEOUT_SECONDS, InvocationMode, InvocationRequest, run};
pub use outcome::{InvocationFailure, InvocationOutcome, NO_ERROR_OUTPUT};
pub use quoting::{quote_final_argument, render_shell_line};
pub use sink::{DiagnosticSink, NullSink, TracingSink};
