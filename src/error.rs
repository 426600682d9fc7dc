use thiserror::Error;

/// Problems with the execution log itself. Each one ends the run with a
/// non-zero exit; resolution anomalies never show up here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("no input data received")]
    Empty,

    #[error("invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("execution data must be a JSON array, got {0}")]
    NotAnArray(&'static str),

    #[error("could not parse execution data: {0}")]
    Structure(String),

    #[error("node '{name}' not found in execution data; available nodes: {}", available.join(", "))]
    NodeNotFound {
        name: String,
        available: Vec<String>,
    },
}
