//! Per-node execution map rebuilt from the backing store.

pub mod parse;
pub mod run;

#[cfg(test)]
pub mod fixtures;

pub use parse::{parse_run_data, select_node};
pub use run::{ExecutionRun, NodeMap, RunOutput};
