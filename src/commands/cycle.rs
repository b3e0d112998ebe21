//! Cycle detection command

use serde_json::json;

use crate::cli::Cli;
use trellis_core::error::Result;
use trellis_core::format::OutputFormat;
use trellis_core::graph::Graph;

/// Execute the cycle command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let has_cycle = graph.has_cycle();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "has_cycle": has_cycle }))?);
        }
        OutputFormat::Human => {
            if has_cycle {
                println!("cycle detected");
            } else {
                println!("no cycle");
            }
        }
    }

    Ok(())
}
