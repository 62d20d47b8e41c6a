//! Logging initialization.
//!
//! Logs go to stderr so that stdout carries only the JSON output items.
//! `RUST_LOG` takes precedence; otherwise the filter is `warn` with this
//! crate at `info` (so per-item debug output is shown), or at `debug` when
//! verbose logging is requested.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter_spec = default_filter(verbose);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_spec));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,auggie_node=debug"
    } else {
        "warn,auggie_node=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_shows_item_debug_output() {
        assert_eq!(default_filter(false), "warn,auggie_node=info");
        assert_eq!(default_filter(true), "warn,auggie_node=debug");
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
    }
}
