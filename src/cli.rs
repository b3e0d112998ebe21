//! CLI argument parsing for trellis
//!
//! Global flags: --graph, --format, --quiet, --verbose, --log-level,
//! --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use trellis_core::format::OutputFormat;

/// Trellis - weighted undirected graph toolkit
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph description file (use `-` for stdin)
    #[arg(long, global = true, default_value = "-")]
    pub graph: PathBuf,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "TRELLIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency dump of the graph
    Print,

    /// Find the shortest path between two nodes
    Path {
        /// Source node label
        from: String,

        /// Target node label
        to: String,
    },

    /// Extract a minimum spanning tree
    Mst,

    /// Check whether the graph contains a cycle
    Cycle,
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    value.parse::<OutputFormat>().map_err(|err| err.to_string())
}
