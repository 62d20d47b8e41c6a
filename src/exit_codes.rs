//! Exit code constants for the auggie-node CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input or config)
//! - 2: Validation failure (item parameters rejected)
//! - 3: Execution failure (CLI failed to start or timed out)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: item parameters rejected before spawning.
pub const VALIDATION_FAILURE: i32 = 2;

/// Execution failure: the CLI could not be started or timed out.
pub const EXECUTION_FAILURE: i32 = 3;
