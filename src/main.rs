//! auggie-node: run the Auggie CLI as a workflow node.
//!
//! This is the main entry point for the `auggie-node` CLI. It parses
//! arguments, initializes logging, dispatches to the command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
mod logging;
pub mod node;
pub mod runner;

use cli::Cli;
use error::NodeError;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            if let NodeError::ItemFailed {
                description,
                item_index,
                ..
            } = &err
            {
                eprintln!("  item {}: {}", item_index, description);
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
