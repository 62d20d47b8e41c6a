//! Workflow node adapter around the Auggie CLI.
//!
//! This module maps host items onto runner invocations:
//!
//! - **Params**: Per-item parameters as resolved by the host
//! - **Args**: Argument vector construction for the CLI
//! - **Records**: Result and error records returned per item
//! - **Execute**: Sequential item processing with continue-on-fail

mod args;
mod execute;
mod params;
mod records;


pub use args::{build_arguments, render_command_line, resolve_working_directory};
pub use execute::{NodeSettings, execute_items, execute_items_with_sink};
pub use params::{AdditionalOptions, DEFAULT_MODEL, KNOWN_MODELS, NodeParameters, OutputMode};
pub use records::{ErrorKind, ErrorRecord, ItemJson, NodeItem, PairedItem, ResultRecord};
