use crate::error::InputError;
use crate::execution::run::{ExecutionRun, NodeMap, RunOutput};
use crate::store::{Node, Resolver, is_truthy};

use serde_json::{Map, Number, Value, json};
use tracing::debug;

/// Shortest store that can hold root, resultData, runData and a node map.
const MIN_STORE_LEN: usize = 5;

/// Rebuild the node execution map from an execution log.
///
/// Expected layout (every string value may be a reference):
/// store[0]     { "resultData": ref, ... }
/// resultData   { "runData": ref, "lastNodeExecuted": ... }
/// runData      { "<node name>": ref -> [ref -> run, ...], ... }
/// run          { "startTime", "executionTime", "executionStatus",
///                "executionIndex", "data": ref -> { "main": ref } }
///
/// Only the two top levels are mandatory. A node or run whose own structure
/// is missing is skipped.
pub fn parse_run_data(resolver: &mut Resolver<'_>) -> Result<NodeMap, InputError> {
    let store = resolver.store();
    if store.len() < MIN_STORE_LEN {
        return Err(InputError::Structure(format!(
            "expected at least {} entries, found {}",
            MIN_STORE_LEN,
            store.len()
        )));
    }

    let root = store[0]
        .as_object()
        .ok_or_else(|| InputError::Structure("entry 0 is not an object".to_string()))?;

    let result_data = field_object(resolver, root, "resultData")
        .ok_or_else(|| InputError::Structure("resultData missing or empty".to_string()))?;
    let run_data = field_object(resolver, result_data, "runData")
        .ok_or_else(|| InputError::Structure("runData missing or empty".to_string()))?;

    let mut nodes = NodeMap::new();
    for (name, node_ref) in run_data {
        let runs = match resolver.resolve_shallow(node_ref) {
            Some(Value::Array(runs)) if !runs.is_empty() => runs,
            _ => {
                debug!(node = %name, "skipping node without executions");
                continue;
            }
        };

        let parsed: Vec<ExecutionRun> = runs
            .iter()
            .filter_map(|run_ref| match resolver.resolve_shallow(run_ref) {
                Some(Value::Object(run)) => parse_run(resolver, run),
                _ => None,
            })
            .collect();

        nodes.insert(name.clone(), parsed);
    }

    if nodes.is_empty() {
        return Err(InputError::Structure(
            "runData lists no node executions".to_string(),
        ));
    }

    Ok(nodes)
}

/// Restrict the map to a single node, or report the names that do exist.
pub fn select_node(mut nodes: NodeMap, name: &str) -> Result<NodeMap, InputError> {
    match nodes.remove(name) {
        Some(runs) => Ok(NodeMap::from([(name.to_string(), runs)])),
        None => Err(InputError::NodeNotFound {
            name: name.to_string(),
            available: nodes.into_keys().collect(),
        }),
    }
}

fn parse_run<'s>(
    resolver: &mut Resolver<'s>,
    run: &'s Map<String, Value>,
) -> Option<ExecutionRun> {
    let data = field_object(resolver, run, "data")?;
    let main = data.get("main").and_then(|m| resolver.resolve_shallow(m));

    let execution_status = run
        .get("executionStatus")
        .map(|s| resolver.resolve_deep(s));

    Some(ExecutionRun {
        start_time: number_field(run, "startTime"),
        execution_time: number_field(run, "executionTime"),
        execution_status,
        execution_index: run.get("executionIndex").and_then(Value::as_u64),
        data: RunOutput {
            main: output_items(resolver, main),
        },
    })
}

/// Resolve the items of the first `main` output.
fn output_items(resolver: &mut Resolver<'_>, main: Option<&Value>) -> Vec<Value> {
    let Some(Value::Array(outputs)) = main else {
        return Vec::new();
    };
    let Some(first) = outputs.first() else {
        return Vec::new();
    };

    match resolver.resolve_shallow(first) {
        Some(Value::Array(items)) => items.iter().map(|i| resolve_item(resolver, i)).collect(),
        Some(item) if is_truthy(item) => vec![resolve_item(resolver, item)],
        _ => Vec::new(),
    }
}

/// Expand every field of one output item. Non-object items are wrapped as
/// `{"value": item}`.
fn resolve_item(resolver: &mut Resolver<'_>, item_ref: &Value) -> Value {
    let item = match resolver.resolve_shallow(item_ref) {
        Some(Value::Object(item)) => item,
        other => return json!({ "value": other.cloned() }),
    };

    let resolved: Map<String, Value> = item
        .iter()
        .map(|(key, value)| {
            let expanded = match Node::classify(value) {
                Node::Reference { .. } => expand(resolver, value),
                Node::Mapping(fields) => Value::Object(
                    fields
                        .iter()
                        .map(|(k, v)| (k.clone(), expand(resolver, v)))
                        .collect(),
                ),
                Node::Sequence(values) => {
                    Value::Array(values.iter().map(|v| expand(resolver, v)).collect())
                }
                Node::Literal(literal) => literal.clone(),
            };
            (key.clone(), expanded)
        })
        .collect();

    Value::Object(resolved)
}

/// One hop, then full expansion of whatever that hop lands on.
fn expand(resolver: &mut Resolver<'_>, value: &Value) -> Value {
    match resolver.resolve_shallow(value) {
        Some(target) => resolver.resolve_deep(target),
        None => Value::Null,
    }
}

fn field_object<'s>(
    resolver: &mut Resolver<'s>,
    parent: &'s Map<String, Value>,
    key: &str,
) -> Option<&'s Map<String, Value>> {
    let value = parent.get(key)?;
    match resolver.resolve_shallow(value)? {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

fn number_field(run: &Map<String, Value>, key: &str) -> Option<Number> {
    match run.get(key)? {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}
