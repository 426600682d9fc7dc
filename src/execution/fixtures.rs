//! A small execution log in the compressed-reference layout.

use serde_json::{Value, json};

/// Two nodes: a trigger that emits one email item and an LLM node whose
/// item carries a JSON response string and a model name.
pub fn execution_log() -> Vec<Value> {
    vec![
        /* 0 */ json!({"startData": "1", "resultData": "2", "executionData": "3"}),
        /* 1 */ json!({}),
        /* 2 */ json!({"runData": "4", "lastNodeExecuted": "5"}),
        /* 3 */ json!({}),
        /* 4 */ json!({"Gmail Trigger": "6", "Summarise Email with LLM": "7"}),
        /* 5 */ json!("Summarise Email with LLM"),
        /* 6 */ json!(["8"]),
        /* 7 */ json!(["9"]),
        /* 8 */
        json!({"startTime": 1700000000000u64, "executionTime": 12,
               "executionStatus": "10", "executionIndex": 0, "data": "11"}),
        /* 9 */
        json!({"startTime": 1700000000100u64, "executionTime": 3456,
               "executionStatus": "10", "executionIndex": 1, "data": "12"}),
        /* 10 */ json!("success"),
        /* 11 */ json!({"main": "13"}),
        /* 12 */ json!({"main": "14"}),
        /* 13 */ json!(["15"]),
        /* 14 */ json!(["16"]),
        /* 15 */ json!(["17"]),
        /* 16 */ json!(["18"]),
        /* 17 */ json!({"json": "19", "pairedItem": "20"}),
        /* 18 */ json!({"json": "21", "pairedItem": "20"}),
        /* 19 */ json!({"subject": "22", "from": "23"}),
        /* 20 */ json!({"item": 0}),
        /* 21 */ json!({"response": "24", "model": "25", "done": true}),
        /* 22 */ json!("Weekly report"),
        /* 23 */ json!("alice@example.com"),
        /* 24 */ json!("{\"ok\":true}"),
        /* 25 */ json!("llama3.2"),
    ]
}
