//! Reading the backing store from a file or standard input.

use crate::Result;
use crate::error::InputError;

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read and decode the execution log array.
///
/// `None` reads standard input.
pub fn read_store(path: Option<&Path>) -> Result<Vec<Value>> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("read execution data file {}", p.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read execution data from stdin")?;
            buf
        }
    };

    let store = parse_store(&text)?;
    debug!(entries = store.len(), "loaded backing store");
    Ok(store)
}

/// Decode the raw text of an execution log. The root must be an array.
pub fn parse_store(text: &str) -> std::result::Result<Vec<Value>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| InputError::InvalidJson(e.to_string()))?;

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Err(InputError::NotAnArray("an object")),
        Value::String(_) => Err(InputError::NotAnArray("a string")),
        Value::Number(_) => Err(InputError::NotAnArray("a number")),
        Value::Bool(_) => Err(InputError::NotAnArray("a boolean")),
        Value::Null => Err(InputError::NotAnArray("null")),
    }
}
