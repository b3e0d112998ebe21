//! Print command

use crate::cli::Cli;
use crate::commands::helpers;
use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::Graph;

/// Execute the print command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&helpers::graph_json(graph))?);
        }
        OutputFormat::Human => {
            let dump = graph.connection_dump();
            if dump.is_empty() {
                if !cli.quiet {
                    println!("graph has no connections");
                }
            } else {
                println!("{}", dump);
            }
        }
    }

    Ok(())
}
