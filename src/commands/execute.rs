//! Implementation of the `execute` and `run` commands.

use crate::cli::{ExecuteArgs, RunArgs};
use crate::error::{NodeError, Result};
use crate::node::{AdditionalOptions, NodeItem, NodeParameters, NodeSettings, execute_items};
use serde::Deserialize;
use std::io::{Read, Write};

/// Input accepted by `execute`: one item or a list of items.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemsInput {
    Many(Vec<NodeParameters>),
    One(NodeParameters),
}

/// Execute the `execute` command: read items as JSON, run them, print the output items.
pub async fn cmd_execute(args: ExecuteArgs, settings: &NodeSettings) -> Result<()> {
    let content = read_input(&args.input)?;
    let items = parse_items(&content)?;

    tracing::debug!(items = items.len(), command = %settings.command, "executing items");

    let output = execute_items(&items, settings).await?;
    print_items(&output, args.pretty)
}

/// Execute the `run` command: a single item from command-line flags.
pub async fn cmd_run(args: RunArgs, settings: &NodeSettings) -> Result<()> {
    let params = NodeParameters {
        project_path: args.project_path,
        output_mode: args.output_mode.into(),
        model: args.model,
        timeout: args.timeout,
        additional_options: AdditionalOptions {
            debug: args.debug,
            custom_args: args.custom_args,
        },
        ..NodeParameters::new(args.prompt)
    };

    let output = execute_items(&[params], settings).await?;
    print_items(&output, args.pretty)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| NodeError::UserError(format!("failed to read items from stdin: {}", e)))?;
        return Ok(content);
    }

    std::fs::read_to_string(input).map_err(|e| {
        NodeError::UserError(format!("failed to read input file '{}': {}", input, e))
    })
}

/// Parse items from JSON: an array of parameter objects, or a single object.
fn parse_items(content: &str) -> Result<Vec<NodeParameters>> {
    let input: ItemsInput = serde_json::from_str(content).map_err(|e| {
        NodeError::UserError(format!(
            "failed to parse items JSON: {}\n\
             Fix: pass an array of objects like [{{\"prompt\": \"...\"}}].",
            e
        ))
    })?;

    Ok(match input {
        ItemsInput::Many(items) => items,
        ItemsInput::One(item) => vec![item],
    })
}

fn print_items(items: &[NodeItem], pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(items)
    } else {
        serde_json::to_string(items)
    }
    .map_err(|e| NodeError::UserError(format!("failed to serialize output items: {}", e)))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)
        .map_err(|e| NodeError::UserError(format!("failed to write output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::OutputMode;

    #[test]
    fn test_parse_items_array() {
        let items = parse_items(r#"[{"prompt": "one"}, {"prompt": "two", "outputMode": "quiet"}]"#)
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].prompt, "one");
        assert_eq!(items[1].output_mode, OutputMode::Quiet);
    }

    #[test]
    fn test_parse_single_item() {
        let items = parse_items(r#"{"prompt": "only", "timeout": 5}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].timeout, Some(5.0));
    }

    #[test]
    fn test_parse_items_rejects_invalid_json() {
        let err = parse_items("[{").unwrap_err();
        assert!(err.to_string().contains("failed to parse items JSON"));
    }

    #[test]
    fn test_read_missing_input_file() {
        let err = read_input("/nonexistent/items.json").unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }

    #[test]
    fn test_read_input_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"prompt": "from file"}}]"#).unwrap();

        let content = read_input(file.path().to_str().unwrap()).unwrap();
        assert_eq!(parse_items(&content).unwrap()[0].prompt, "from file");
    }
}
