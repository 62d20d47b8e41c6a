//! CLI argument construction.

use super::params::NodeParameters;
use crate::error::{NodeError, Result};
use std::path::PathBuf;

/// Build the argument vector for one item.
///
/// Order: output-mode flag, `--model` (only for a non-default model),
/// custom arguments split on whitespace, then the prompt as the last
/// argument.
pub fn build_arguments(params: &NodeParameters, model: &str, default_model: &str) -> Vec<String> {
    let mut args = vec![params.output_mode.flag().to_string()];

    if !model.is_empty() && model != default_model {
        args.push("--model".to_string());
        args.push(model.to_string());
    }

    args.extend(
        params
            .additional_options
            .custom_args
            .split_whitespace()
            .map(str::to_string),
    );

    args.push(params.prompt.clone());
    args
}

/// The command line shown in result records.
pub fn render_command_line(command: &str, args: &[String]) -> String {
    format!("{} {}", command, args.join(" "))
}

/// Resolve the working directory: the trimmed project path, or the
/// current directory when it is empty.
pub fn resolve_working_directory(project_path: &str) -> Result<PathBuf> {
    let trimmed = project_path.trim();
    if !trimmed.is_empty() {
        return Ok(PathBuf::from(trimmed));
    }

    std::env::current_dir().map_err(|e| {
        NodeError::UserError(format!("failed to determine current directory: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::params::{DEFAULT_MODEL, OutputMode};

    #[test]
    fn test_default_arguments() {
        let params = NodeParameters::new("Create a CSV parser");
        let args = build_arguments(&params, DEFAULT_MODEL, DEFAULT_MODEL);
        assert_eq!(args, vec!["--print", "Create a CSV parser"]);
    }

    #[test]
    fn test_output_mode_flags() {
        for (mode, flag) in [
            (OutputMode::Print, "--print"),
            (OutputMode::Quiet, "--quiet"),
            (OutputMode::Compact, "--compact"),
        ] {
            let params = NodeParameters {
                output_mode: mode,
                ..NodeParameters::new("go")
            };
            let args = build_arguments(&params, DEFAULT_MODEL, DEFAULT_MODEL);
            assert_eq!(args[0], flag);
        }
    }

    #[test]
    fn test_non_default_model_adds_flag() {
        let params = NodeParameters::new("go");
        let args = build_arguments(&params, "gpt-5", DEFAULT_MODEL);
        assert_eq!(args, vec!["--print", "--model", "gpt-5", "go"]);
    }

    #[test]
    fn test_custom_args_split_on_whitespace() {
        let mut params = NodeParameters::new("fix the tests");
        params.additional_options.custom_args = "  --verbose \t --config  /tmp/c.json ".to_string();

        let args = build_arguments(&params, "sonnet-4", DEFAULT_MODEL);
        assert_eq!(
            args,
            vec![
                "--print",
                "--model",
                "sonnet-4",
                "--verbose",
                "--config",
                "/tmp/c.json",
                "fix the tests"
            ]
        );
    }

    #[test]
    fn test_render_command_line() {
        let args = vec!["--print".to_string(), "fix the bug".to_string()];
        assert_eq!(
            render_command_line("auggie", &args),
            "auggie --print fix the bug"
        );
    }

    #[test]
    fn test_resolve_working_directory() {
        assert_eq!(
            resolve_working_directory("  /srv/app  ").unwrap(),
            PathBuf::from("/srv/app")
        );
        assert_eq!(
            resolve_working_directory("   ").unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
