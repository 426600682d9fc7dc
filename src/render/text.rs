//! Flat text layout, one block per run or record.
//!
//! Nodes:
//!   Gmail Trigger
//!     run 0  status=success  time=12ms  items=1
//!       {"json":{...}}
//!
//! Responses:
//!   Summarise Email with LLM #1  time=3456ms  model=llama3.2  valid=true
//!   {"ok":true}

use crate::execution::NodeMap;
use crate::extract::ResponseRecord;

use serde_json::Value;
use std::fmt::Write;

pub fn render_nodes(nodes: &NodeMap) -> String {
    let mut out = String::new();

    for (name, runs) in nodes {
        let _ = writeln!(out, "{}", name);
        for (position, run) in runs.iter().enumerate() {
            let index = run.execution_index.unwrap_or(position as u64);
            let status = run
                .execution_status
                .as_ref()
                .map(scalar)
                .unwrap_or_else(|| "-".to_string());
            let time = run
                .execution_time
                .as_ref()
                .map(|t| format!("{}ms", t))
                .unwrap_or_else(|| "-".to_string());

            let _ = writeln!(
                out,
                "  run {}  status={}  time={}  items={}",
                index,
                status,
                time,
                run.data.main.len()
            );
            for item in &run.data.main {
                let _ = writeln!(out, "    {}", item);
            }
        }
    }

    out.trim_end().to_string()
}

pub fn render_responses(records: &[ResponseRecord]) -> String {
    let blocks: Vec<String> = records
        .iter()
        .map(|r| {
            let mut header = format!("{} #{}", r.node, r.execution_index);
            if let Some(t) = &r.execution_time {
                let _ = write!(header, "  time={}ms", t);
            }
            if let Some(m) = &r.model {
                let _ = write!(header, "  model={}", scalar(m));
            }
            if let Some(v) = &r.validation {
                let _ = write!(header, "  valid={}", v.valid);
                if let Some(e) = &v.error {
                    let _ = write!(header, "  error={}", e);
                }
            }
            format!("{}\n{}", header, scalar(&r.response))
        })
        .collect();

    blocks.join("\n\n")
}

/// Strings print bare; everything else prints as compact JSON.
fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
