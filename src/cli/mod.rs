//! CLI argument parsing for auggie-node.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::node::OutputMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// auggie-node: run the Auggie CLI as a workflow node.
///
/// Each input item is one CLI invocation with a bounded timeout. Output
/// items are printed to stdout as JSON; logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "auggie-node")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to an auggie-node.yaml config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Record failing items as error records instead of aborting.
    #[arg(long, global = true)]
    pub continue_on_fail: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for auggie-node.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a batch of items read as JSON.
    ///
    /// Input is a JSON array of parameter objects (or a single object) with
    /// the fields prompt, projectPath, outputMode, model, timeout and
    /// additionalOptions.
    Execute(ExecuteArgs),

    /// Execute a single item given on the command line.
    Run(RunArgs),
}

/// Arguments for the `execute` command.
#[derive(Args, Debug)]
pub struct ExecuteArgs {
    /// JSON input file, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Output modes accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputModeArg {
    Print,
    Quiet,
    Compact,
}

impl From<OutputModeArg> for OutputMode {
    fn from(arg: OutputModeArg) -> Self {
        match arg {
            OutputModeArg::Print => OutputMode::Print,
            OutputModeArg::Quiet => OutputMode::Quiet,
            OutputModeArg::Compact => OutputMode::Compact,
        }
    }
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// The prompt or instruction to send to the CLI.
    #[arg(short, long)]
    pub prompt: String,

    /// Directory the CLI runs in (default: current directory).
    #[arg(long, default_value = "")]
    pub project_path: String,

    /// How the CLI reports its work.
    #[arg(long, value_enum, default_value_t = OutputModeArg::Print)]
    pub output_mode: OutputModeArg,

    /// Model to use (default: from config).
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum time to wait for completion, in seconds (default: from config).
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Log execution details and stream CLI output to the log.
    #[arg(long)]
    pub debug: bool,

    /// Additional arguments passed to the CLI, separated by whitespace.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub custom_args: String,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_execute_defaults() {
        let cli = Cli::try_parse_from(["auggie-node", "execute"]).unwrap();
        match cli.command {
            Command::Execute(args) => {
                assert_eq!(args.input, "-");
                assert!(!args.pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.continue_on_fail);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli = Cli::try_parse_from([
            "auggie-node",
            "--continue-on-fail",
            "run",
            "--prompt",
            "fix the tests",
            "--output-mode",
            "compact",
            "--model",
            "gpt-5",
            "--timeout",
            "90",
            "--custom-args",
            "--verbose --max-turns 3",
            "--config",
            "auggie-node.yaml",
        ])
        .unwrap();

        assert!(cli.continue_on_fail);
        assert_eq!(cli.config, Some(PathBuf::from("auggie-node.yaml")));
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.prompt, "fix the tests");
                assert_eq!(args.output_mode, OutputModeArg::Compact);
                assert_eq!(args.model.as_deref(), Some("gpt-5"));
                assert_eq!(args.timeout, Some(90.0));
                assert_eq!(args.custom_args, "--verbose --max-turns 3");
                assert!(!args.debug);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_requires_prompt() {
        assert!(Cli::try_parse_from(["auggie-node", "run"]).is_err());
    }

    #[test]
    fn test_output_mode_conversion() {
        assert_eq!(OutputMode::from(OutputModeArg::Quiet), OutputMode::Quiet);
    }
}
