use std::collections::TryReserveError;

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Which capacity bound an input ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLimit {
    /// Too many matrix rows (vertices).
    Vertices,
    /// A single row carries too many columns. `row` is 0-based.
    Columns { row: usize },
}

fn capacity_message(what: &CapacityLimit, found: &usize, max: &usize) -> String {
    match what {
        CapacityLimit::Vertices => format!("graph has {found} vertices, exceeds max_vertices={max}"),
        CapacityLimit::Columns { row } => {
            format!("row {row} has {found} columns, exceeds max_vertices={max}")
        }
    }
}

/// Errors produced while building or querying a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{}", capacity_message(.what, .found, .max))]
    CapacityExceeded {
        what: CapacityLimit,
        found: usize,
        max: usize,
    },

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    OutOfRangeVertex { vertex: VertexId, vertex_count: usize },

    #[error("allocation of {requested} entries failed: {source}")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("negative weight {weight} on edge {from} -> {to}; shortest paths need non-negative weights")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: Weight,
    },

    #[error("line {line}, column {column}: '{token}' is not an integer weight")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn allocation(requested: usize, source: TryReserveError) -> Self {
        GraphError::AllocationFailure { requested, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_messages() {
        let vertices = GraphError::CapacityExceeded {
            what: CapacityLimit::Vertices,
            found: 5,
            max: 4,
        };
        assert_eq!(vertices.to_string(), "graph has 5 vertices, exceeds max_vertices=4");

        let columns = GraphError::CapacityExceeded {
            what: CapacityLimit::Columns { row: 1 },
            found: 4,
            max: 2,
        };
        assert_eq!(columns.to_string(), "row 1 has 4 columns, exceeds max_vertices=2");
    }
}
