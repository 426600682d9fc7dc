use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{Level, debug, warn};

mod error;
mod execution;
mod extract;
mod input;
mod render;
mod store;

use error::InputError;
use render::{Format, Report};
use store::Resolver;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "flatref")]
#[command(about = "Resolve compressed-reference workflow execution logs", long_about = None)]
struct Cli {
    /// Diagnostics verbosity (written to stderr).
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the per-node execution map, or extract LLM responses from it.
    Parse {
        /// Execution data file; reads stdin when omitted.
        input: Option<PathBuf>,

        /// Only keep this node.
        #[arg(long)]
        node: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Extract responses from LLM-like nodes instead of dumping runs.
        #[arg(long)]
        llm_only: bool,

        /// Check extracted string responses parse as JSON.
        #[arg(long)]
        validate_json: bool,

        /// Single-line JSON.
        #[arg(long)]
        compact: bool,

        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Fully expand one entry of the execution data array.
    Resolve {
        /// Execution data file; reads stdin when omitted.
        input: Option<PathBuf>,

        /// Index of the entry to expand.
        #[arg(long = "ref")]
        index: usize,

        #[arg(long)]
        compact: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) {
    let Some(level) = level.as_level() else {
        return;
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {}", e);
    }
}

/// Options of the `parse` command that shape the report.
#[derive(Debug, Clone, Default)]
struct ParseOptions {
    node: Option<String>,
    llm_only: bool,
    validate_json: bool,
}

/// Resolve the execution map and turn it into the requested report.
fn build_report(store: &[Value], opts: &ParseOptions) -> std::result::Result<Report, InputError> {
    let mut resolver = Resolver::new(store);
    let mut nodes = execution::parse_run_data(&mut resolver)?;

    let stats = resolver.stats();
    debug!(
        nodes = nodes.len(),
        cached = stats.cached,
        sentinels = stats.sentinels,
        "resolved execution data"
    );
    if stats.sentinels > 0 {
        warn!(
            "{} reference(s) could not be expanded (cycle or depth limit)",
            stats.sentinels
        );
    }

    if let Some(name) = &opts.node {
        nodes = execution::select_node(nodes, name)?;
    }

    if opts.llm_only {
        Ok(Report::Responses(extract::extract_responses(
            &nodes,
            opts.validate_json,
        )))
    } else {
        Ok(Report::Nodes(nodes))
    }
}

fn resolve_entry(store: &[Value], index: usize) -> Value {
    if index >= store.len() {
        warn!(
            "ref {} is out of bounds (store has {} entries)",
            index,
            store.len()
        );
    }
    let mut resolver = Resolver::new(store);
    resolver.resolve_deep(&Value::String(index.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    match cli.cmd {
        Commands::Parse {
            input,
            node,
            format,
            llm_only,
            validate_json,
            compact,
            output,
        } => {
            // 1) Load the backing store.
            let store = input::read_store(input.as_deref())?;

            // 2) Resolve + filter/extract.
            let opts = ParseOptions {
                node,
                llm_only,
                validate_json,
            };
            let report = build_report(&store, &opts)?;

            // 3) Render.
            let rendered = render::render_report(&report, format, compact)?;
            render::write_output(output.as_deref(), &rendered)?;
        }
        Commands::Resolve {
            input,
            index,
            compact,
        } => {
            let store = input::read_store(input.as_deref())?;
            let resolved = resolve_entry(&store, index);
            println!("{}", render::json::render_json(&resolved, compact)?);
        }
    }

    Ok(())
}
