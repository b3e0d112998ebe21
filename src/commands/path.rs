//! Shortest path command

use crate::cli::Cli;
use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::Graph;

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let result = graph.shortest_path(from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            println!("{}", result.labels.join(" -> "));
            if !cli.quiet {
                println!("distance: {} ({} hops)", result.distance, result.hops());
            }
        }
    }

    Ok(())
}
