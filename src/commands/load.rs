//! Graph description loader
//!
//! Line-oriented format mapping 1:1 onto the construction API:
//!
//! ```text
//! node <label>
//! edge <from> <to> <weight>
//! ```
//!
//! Blank lines and `#` comments are ignored.

use std::fs;
use std::io::Read;
use std::path::Path;

use trellis_core::error::{Result, TrellisError};
use trellis_core::graph::Graph;

pub fn load_graph(path: &Path) -> Result<Graph> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    parse_graph(&text)
}

pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["node", label] => graph.add_node(label),
            ["edge", from, to, weight] => {
                let weight = weight.parse().map_err(|_| TrellisError::InvalidGraphLine {
                    line: number,
                    reason: format!("weight must be a non-negative integer, got '{}'", weight),
                })?;
                graph.add_edge(from, to, weight)?;
            }
            _ => {
                return Err(TrellisError::InvalidGraphLine {
                    line: number,
                    reason: format!(
                        "expected 'node <label>' or 'edge <from> <to> <weight>', got '{}'",
                        line
                    ),
                });
            }
        }
    }

    Ok(graph)
}
