use serde::Serialize;
use serde_json::{Number, Value};

/// One response pulled out of a node's output item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub node: String,
    pub execution_index: u64,
    pub execution_time: Option<Number>,
    pub response: Value,
    pub response_length: usize,
    pub model: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
}

/// Outcome of parsing a response string as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub error: Option<String>,
    /// Length in characters.
    pub length: usize,
}
