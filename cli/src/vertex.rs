//! The one place where 1-based CLI labels meet 0-based core vertex ids.

use anyhow::{anyhow, bail, Result};
use matgraph_core::{CapacityLimit, Graph, GraphError, VertexId};

/// Convert a user-facing label (1..=vertex_count) into a core vertex id.
pub fn parse_label(label: usize, graph: &Graph) -> Result<VertexId> {
    let n = graph.vertex_count();
    if n == 0 {
        bail!("graph has no vertices");
    }
    if label == 0 || label > n {
        bail!("vertex {label} out of range: labels run from 1 to {n}");
    }
    Ok(label - 1)
}

/// Convert a core vertex id into its user-facing label.
pub fn label(v: VertexId) -> usize {
    v + 1
}

/// Restate core errors that carry vertex ids in terms of labels.
pub fn relabel_error(err: GraphError) -> anyhow::Error {
    match err {
        GraphError::NegativeWeight { from, to, weight } => anyhow!(
            "negative weight {weight} on edge {} -> {}; shortest paths need non-negative weights",
            label(from),
            label(to)
        ),
        GraphError::OutOfRangeVertex { vertex, vertex_count } => anyhow!(
            "vertex {} out of range: labels run from 1 to {vertex_count}",
            label(vertex)
        ),
        GraphError::CapacityExceeded {
            what: CapacityLimit::Columns { row },
            found,
            max,
        } => anyhow!(
            "row {} has {found} columns, exceeds max_vertices={max}",
            label(row)
        ),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matgraph_core::GraphConfig;

    fn graph(n: usize) -> Graph {
        Graph::from_matrix(&vec![vec![0; n]; n], &GraphConfig::default()).unwrap()
    }

    #[test]
    fn test_round_trip_bounds() {
        let g = graph(3);
        assert_eq!(parse_label(1, &g).unwrap(), 0);
        assert_eq!(parse_label(3, &g).unwrap(), 2);
        assert_eq!(label(2), 3);
    }

    #[test]
    fn test_rejects_zero_and_past_end() {
        let g = graph(3);
        assert!(parse_label(0, &g).is_err());
        let err = parse_label(4, &g).unwrap_err();
        assert!(err.to_string().contains("labels run from 1 to 3"));
    }

    #[test]
    fn test_relabel_negative_weight() {
        let err = relabel_error(GraphError::NegativeWeight { from: 0, to: 2, weight: -7 });
        assert!(err.to_string().starts_with("negative weight -7 on edge 1 -> 3"));
    }

    #[test]
    fn test_relabel_wide_row() {
        let err = relabel_error(GraphError::CapacityExceeded {
            what: CapacityLimit::Columns { row: 1 },
            found: 4,
            max: 2,
        });
        assert_eq!(err.to_string(), "row 2 has 4 columns, exceeds max_vertices=2");
    }

    #[test]
    fn test_rejects_empty_graph() {
        let g = graph(0);
        assert!(parse_label(1, &g).is_err());
    }
}
