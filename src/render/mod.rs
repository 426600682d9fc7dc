//! Output rendering: JSON or flat text, to stdout or a file.

pub mod json;
pub mod text;

use crate::Result;
use crate::execution::NodeMap;
use crate::extract::ResponseRecord;

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Text,
}

/// What a `parse` run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Nodes(NodeMap),
    Responses(Vec<ResponseRecord>),
}

pub fn render_report(report: &Report, format: Format, compact: bool) -> Result<String> {
    match format {
        Format::Json => json::render_json(report, compact),
        Format::Text => Ok(match report {
            Report::Nodes(nodes) => text::render_nodes(nodes),
            Report::Responses(records) => text::render_responses(records),
        }),
    }
}

/// Write to `path`, or print to stdout when no path is given.
pub fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, rendered).with_context(|| format!("write output file {}", p.display()))?;
            info!("wrote output to {}", p.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
