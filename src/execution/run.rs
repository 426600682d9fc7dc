use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// One execution of a workflow node, with its output items fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRun {
    pub start_time: Option<Number>,
    pub execution_time: Option<Number>,
    pub execution_status: Option<Value>,
    pub execution_index: Option<u64>,
    pub data: RunOutput,
}

/// Items on the node's first `main` output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunOutput {
    pub main: Vec<Value>,
}

/// Node name -> its execution runs, in run order.
pub type NodeMap = BTreeMap<String, Vec<ExecutionRun>>;
