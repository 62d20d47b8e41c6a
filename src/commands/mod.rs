//! Command implementations for auggie-node.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod execute;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// Loads the config once and applies global flag overrides before
/// routing to the handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_ref())?;

    let mut settings = config.node_settings();
    if cli.continue_on_fail {
        settings.continue_on_fail = true;
    }

    match cli.command {
        Command::Execute(args) => execute::cmd_execute(args, &settings).await,
        Command::Run(args) => execute::cmd_run(args, &settings).await,
    }
}
