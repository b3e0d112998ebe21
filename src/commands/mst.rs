//! Minimum spanning tree command

use serde_json::json;

use crate::cli::Cli;
use crate::commands::helpers;
use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::Graph;

/// Execute the mst command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let tree = graph.minimum_spanning_tree()?;
    let summary = tree.summary();

    match cli.format {
        OutputFormat::Json => {
            let value = json!({
                "summary": summary,
                "tree": helpers::graph_json(&tree),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            let dump = tree.connection_dump();
            if !dump.is_empty() {
                println!("{}", dump);
            }
            if !cli.quiet {
                println!(
                    "nodes: {}, edges: {}, total weight: {}",
                    summary.nodes, summary.edges, summary.total_weight
                );
            }
        }
    }

    Ok(())
}
