use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// Single-source shortest distances produced by [`dijkstra`].
///
/// `None` stands for infinity: the vertex is unreachable from `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: VertexId,
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Distance to `v`, or `None` if `v` is unreachable or unknown.
    pub fn distance(&self, v: VertexId) -> Option<u64> {
        self.distances.get(v).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// `(vertex, distance)` for every vertex, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Option<u64>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Vertices on one shortest path from `start` to `target`, both included.
    ///
    /// Walks predecessor pointers back from `target`. Returns None if
    /// `target` is unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.start {
            current = self.predecessors[current]?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm over the dense matrix, O(V^2).
///
/// Each round picks the unvisited vertex with the smallest finite tentative
/// distance by linear scan (lowest id on ties), marks it visited and relaxes
/// its edges to unvisited neighbors. Stops after `vertex_count - 1` rounds,
/// or earlier once every remaining vertex is unreachable.
///
/// Errors: `OutOfRangeVertex` for a bad `start` (including any start on an
/// empty graph), `NegativeWeight` if the graph holds a negative edge.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn dijkstra(graph: &Graph, start: VertexId) -> Result<ShortestPaths> {
    graph.check_vertex(start)?;
    if let Some((from, to, weight)) = graph.negative_edge() {
        return Err(GraphError::NegativeWeight { from, to, weight });
    }

    let n = graph.vertex_count();
    let mut distances: Vec<Option<u64>> = vec![None; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];
    distances[start] = Some(0);

    for _ in 0..n.saturating_sub(1) {
        let Some((current, base)) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[current] = true;

        let row = graph.row(current);
        for &next in graph.neighbors(current) {
            if visited[next] {
                continue;
            }
            // Checked non-negative above.
            let candidate = base + row[next] as u64;
            if distances[next].map_or(true, |d| candidate < d) {
                distances[next] = Some(candidate);
                predecessors[next] = Some(current);
            }
        }
    }

    let result = ShortestPaths {
        start,
        distances,
        predecessors,
    };
    tracing::debug!(start, reachable = result.reachable_count(), "dijkstra complete");
    Ok(result)
}

fn closest_unvisited(distances: &[Option<u64>], visited: &[bool]) -> Option<(VertexId, u64)> {
    let mut best: Option<(VertexId, u64)> = None;
    for (v, d) in distances.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Some(d) = *d {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((v, d));
            }
        }
    }
    best
}
