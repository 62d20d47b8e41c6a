//! Output records returned to the host, one per input item.

use serde::{Deserialize, Serialize};

/// Record for an item whose command ran to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Combined CLI output.
    pub result: String,
    pub success: bool,
    pub duration_ms: u64,
    /// Rendered command line, for display.
    pub command: String,
    #[serde(rename = "exitCode")]
    pub exit_code: i32,
    /// Error text for unsuccessful runs, `null` otherwise.
    pub error: Option<String>,
}

/// Classification of a captured item failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Timeout,
    ExecutionError,
}

/// Record for an item that failed while continue-on-fail is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub error: String,
    pub error_type: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    pub item_index: usize,
}

/// Link from an output item back to its input item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// Payload of an output item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemJson {
    Result(ResultRecord),
    Error(ErrorRecord),
}

/// One output item in the host's data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeItem {
    pub json: ItemJson,
    pub paired_item: PairedItem,
}

impl NodeItem {
    pub fn result(record: ResultRecord, item_index: usize) -> Self {
        Self {
            json: ItemJson::Result(record),
            paired_item: PairedItem { item: item_index },
        }
    }

    pub fn error(record: ErrorRecord) -> Self {
        let item = record.item_index;
        Self {
            json: ItemJson::Error(record),
            paired_item: PairedItem { item },
        }
    }

    #[cfg(test)]
    pub fn as_result(&self) -> Option<&ResultRecord> {
        match &self.json {
            ItemJson::Result(record) => Some(record),
            ItemJson::Error(_) => None,
        }
    }

    #[cfg(test)]
    pub fn as_error(&self) -> Option<&ErrorRecord> {
        match &self.json {
            ItemJson::Error(record) => Some(record),
            ItemJson::Result(_) => None,
        }
    }
}
