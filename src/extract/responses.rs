use crate::execution::NodeMap;
use crate::extract::record::ResponseRecord;
use crate::extract::validate::validate_json;
use crate::store::{Sentinel, is_truthy};

use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Node-name fragments that mark a node as LLM-backed (case-insensitive).
pub const LLM_KEYWORDS: &[&str] = &[
    "llm",
    "ollama",
    "openai",
    "agent",
    "summarise",
    "summarize",
    "chat",
];

/// Output fields checked for a response, first non-empty wins.
const RESPONSE_FIELDS: &[&str] = &["response", "output", "text", "content"];

pub fn matches_keyword(node_name: &str) -> bool {
    let lower = node_name.to_lowercase();
    LLM_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Collect responses from every item of every run of the LLM-like nodes.
///
/// Items without a `json` object or without any non-empty response field
/// produce no record. With `validate`, string responses get a JSON
/// validation block.
pub fn extract_responses(nodes: &NodeMap, validate: bool) -> Vec<ResponseRecord> {
    let mut out = Vec::new();

    for (name, runs) in nodes {
        if !matches_keyword(name) {
            debug!(node = %name, "not an LLM node");
            continue;
        }

        for (position, run) in runs.iter().enumerate() {
            for item in &run.data.main {
                let Some(json) = item.get("json").and_then(Value::as_object) else {
                    continue;
                };
                let Some(response) = response_field(json) else {
                    continue;
                };
                if let Some(sentinel) = Sentinel::detect(response) {
                    warn!(node = %name, %sentinel, "response could not be fully resolved");
                }

                let validation = match (validate, response) {
                    (true, Value::String(s)) => Some(validate_json(s)),
                    _ => None,
                };

                out.push(ResponseRecord {
                    node: name.clone(),
                    execution_index: run.execution_index.unwrap_or(position as u64),
                    execution_time: run.execution_time.clone(),
                    response: response.clone(),
                    response_length: response_length(response),
                    model: json.get("model").filter(|m| is_truthy(m)).cloned(),
                    validation,
                });
            }
        }
    }

    out
}

fn response_field(json: &Map<String, Value>) -> Option<&Value> {
    RESPONSE_FIELDS
        .iter()
        .filter_map(|f| json.get(*f))
        .find(|v| is_truthy(v))
}

fn response_length(response: &Value) -> usize {
    match response {
        Value::String(s) => s.chars().count(),
        other => other.to_string().chars().count(),
    }
}
