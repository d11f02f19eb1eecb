//! Matrix-to-adjacency-list conversion.

use crate::error::{GraphError, Result};
use crate::graph::{VertexId, Weight};

/// Derive one ordered neighbor list per vertex from a row-major weight matrix.
///
/// Vertex `j` lands in list `i` iff `weights[i * vertex_count + j] != 0`, and
/// each list is ascending in `j`. Every list reserves exactly the number of
/// entries it will hold; a failed reservation drops what was built so far and
/// returns `AllocationFailure`.
pub fn build(weights: &[Weight], vertex_count: usize) -> Result<Vec<Vec<VertexId>>> {
    debug_assert_eq!(weights.len(), vertex_count * vertex_count);

    let mut lists: Vec<Vec<VertexId>> = Vec::new();
    lists
        .try_reserve_exact(vertex_count)
        .map_err(|e| GraphError::allocation(vertex_count, e))?;

    if vertex_count == 0 {
        return Ok(lists);
    }

    for row in weights.chunks_exact(vertex_count) {
        let degree = row.iter().filter(|&&w| w != 0).count();
        let mut neighbors: Vec<VertexId> = Vec::new();
        neighbors
            .try_reserve_exact(degree)
            .map_err(|e| GraphError::allocation(degree, e))?;
        neighbors.extend(
            row.iter()
                .enumerate()
                .filter(|(_, w)| **w != 0)
                .map(|(j, _)| j),
        );
        lists.push(neighbors);
    }

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(rows: &[&[Weight]]) -> Vec<Weight> {
        rows.iter().flat_map(|r| r.iter().copied()).collect()
    }

    #[test]
    fn test_build_triangle() {
        let w = flatten(&[&[0, 1, 4], &[1, 0, 2], &[4, 2, 0]]);
        let lists = build(&w, 3).unwrap();
        assert_eq!(lists, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
    }

    #[test]
    fn test_build_empty() {
        let lists = build(&[], 0).unwrap();
        assert!(lists.is_empty());
    }

    #[test]
    fn test_build_no_edges() {
        let lists = build(&[0, 0, 0, 0], 2).unwrap();
        assert_eq!(lists, vec![Vec::<VertexId>::new(), Vec::new()]);
    }

    #[test]
    fn test_build_directed_self_loop_and_negative() {
        // Negative weights are still edges; only zero means "absent".
        let w = flatten(&[&[5, 0, -3], &[0, 0, 0], &[0, 7, 0]]);
        let lists = build(&w, 3).unwrap();
        assert_eq!(lists, vec![vec![0, 2], vec![], vec![1]]);
    }

    #[test]
    fn test_build_matches_nonzero_set() {
        let n = 6;
        let w: Vec<Weight> = (0..n * n)
            .map(|k| if (k * 7 + 3) % 5 < 2 { (k % 9) as Weight + 1 } else { 0 })
            .collect();
        let lists = build(&w, n).unwrap();

        for (i, list) in lists.iter().enumerate() {
            assert!(list.windows(2).all(|p| p[0] < p[1]), "row {} not ascending", i);
            let expected: Vec<VertexId> = (0..n).filter(|&j| w[i * n + j] != 0).collect();
            assert_eq!(list, &expected);
        }
    }

    #[test]
    fn test_build_idempotent() {
        let w = flatten(&[&[0, 2, 0, 1], &[0, 0, 3, 0], &[1, 0, 0, 0], &[0, 0, 9, 0]]);
        assert_eq!(build(&w, 4).unwrap(), build(&w, 4).unwrap());
    }
}
