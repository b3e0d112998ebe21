//! Command dispatch logic for trellis

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use trellis_core::error::{Result, TrellisError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(TrellisError::UsageError(
            "missing command (try --help)".to_string(),
        ));
    };

    let graph = commands::load::load_graph(&cli.graph)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );

    match command {
        Commands::Print => commands::print::execute(cli, &graph),
        Commands::Path { from, to } => commands::path::execute(cli, &graph, from, to),
        Commands::Mst => commands::mst::execute(cli, &graph),
        Commands::Cycle => commands::cycle::execute(cli, &graph),
    }
}
