//! Text ingestion for weight matrices.
//!
//! Format: one matrix row per line, weights separated by whitespace. Each
//! non-blank line is one vertex. The capacity bound is enforced while
//! reading so an oversized file is rejected without parsing the rest.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::GraphConfig;
use crate::error::{CapacityLimit, GraphError, Result};
use crate::graph::{Graph, Weight};

/// Parse matrix rows from any buffered reader.
pub fn read_matrix<R: BufRead>(reader: R, config: &GraphConfig) -> Result<Vec<Vec<Weight>>> {
    config.validate()?;

    let mut rows: Vec<Vec<Weight>> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if rows.len() >= config.max_vertices {
            return Err(GraphError::CapacityExceeded {
                what: CapacityLimit::Vertices,
                found: rows.len() + 1,
                max: config.max_vertices,
            });
        }
        rows.push(parse_row(&line, index + 1, rows.len(), config)?);
    }

    tracing::debug!(rows = rows.len(), "matrix parsed");
    Ok(rows)
}

/// Parse matrix rows from an in-memory string.
pub fn parse_matrix(text: &str, config: &GraphConfig) -> Result<Vec<Vec<Weight>>> {
    read_matrix(text.as_bytes(), config)
}

/// Read a matrix file and build a [`Graph`] from it.
#[tracing::instrument(skip(path, config), fields(path = %path.as_ref().display()))]
pub fn load_graph(path: impl AsRef<Path>, config: &GraphConfig) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    let rows = read_matrix(BufReader::new(file), config)?;
    Graph::from_matrix(&rows, config)
}

fn parse_row(line: &str, line_no: usize, row: usize, config: &GraphConfig) -> Result<Vec<Weight>> {
    let mut weights = Vec::new();
    for (column, token) in line.split_whitespace().enumerate() {
        if column >= config.max_vertices {
            return Err(GraphError::CapacityExceeded {
                what: CapacityLimit::Columns { row },
                found: line.split_whitespace().count(),
                max: config.max_vertices,
            });
        }
        let weight = token.parse::<Weight>().map_err(|_| GraphError::Parse {
            line: line_no,
            column: column + 1,
            token: token.to_string(),
        })?;
        weights.push(weight);
    }
    Ok(weights)
}
