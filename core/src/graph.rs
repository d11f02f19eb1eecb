use crate::adjacency;
use crate::config::GraphConfig;
use crate::error::{CapacityLimit, GraphError, Result};

/// Vertex index, 0-based everywhere inside this crate.
pub type VertexId = usize;

/// Edge weight as stored in the matrix. Zero means "no edge".
pub type Weight = i32;

/// In-memory graph: dense weight matrix + derived adjacency lists.
///
/// The matrix is stored row-major in a single `Vec`. `adjacency[i]` holds,
/// in ascending order, every `j` with a nonzero `weights[i][j]`. Both are
/// populated once by [`Graph::from_matrix`]; the matrix is never mutated
/// afterwards, so a built graph can be shared read-only across threads.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    weights: Vec<Weight>,
    adjacency: Vec<Vec<VertexId>>,
    config: GraphConfig,
}

impl Graph {
    /// Build a graph from matrix rows (one row per vertex).
    ///
    /// Fails with `CapacityExceeded` if there are more rows than
    /// `config.max_vertices`, or if any row is longer than that. Rows shorter
    /// than the vertex count are padded with zeros; columns past the vertex
    /// count are ignored.
    #[tracing::instrument(skip(rows, config), fields(row_count = rows.len(), max_vertices = config.max_vertices))]
    pub fn from_matrix<R: AsRef<[Weight]>>(rows: &[R], config: &GraphConfig) -> Result<Self> {
        config.validate()?;

        let vertex_count = rows.len();
        if vertex_count > config.max_vertices {
            return Err(GraphError::CapacityExceeded {
                what: CapacityLimit::Vertices,
                found: vertex_count,
                max: config.max_vertices,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            let columns = row.as_ref().len();
            if columns > config.max_vertices {
                return Err(GraphError::CapacityExceeded {
                    what: CapacityLimit::Columns { row: i },
                    found: columns,
                    max: config.max_vertices,
                });
            }
        }

        let cells = vertex_count * vertex_count;
        let mut weights: Vec<Weight> = Vec::new();
        weights
            .try_reserve_exact(cells)
            .map_err(|e| GraphError::allocation(cells, e))?;

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() < vertex_count {
                tracing::warn!(row = i, columns = row.len(), vertex_count, "short row padded with zeros");
            } else if row.len() > vertex_count {
                tracing::warn!(row = i, columns = row.len(), vertex_count, "extra columns ignored");
            }
            let kept = row.len().min(vertex_count);
            weights.extend_from_slice(&row[..kept]);
            weights.extend(std::iter::repeat(0).take(vertex_count - kept));
        }

        let adjacency = adjacency::build(&weights, vertex_count)?;

        let graph = Self {
            vertex_count,
            weights,
            adjacency,
            config: *config,
        };
        tracing::debug!(
            vertex_count = graph.vertex_count,
            edge_count = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Derive the adjacency lists again from the stored matrix.
    ///
    /// The result is identical to what construction produced. On failure the
    /// existing lists are left untouched.
    pub fn rebuild_adjacency(&mut self) -> Result<()> {
        self.adjacency = adjacency::build(&self.weights, self.vertex_count)?;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn contains(&self, v: VertexId) -> bool {
        v < self.vertex_count
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Weight of the edge `from -> to`, `Some(0)` when absent.
    /// `None` if either index is out of range.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        if self.contains(from) && self.contains(to) {
            Some(self.weights[from * self.vertex_count + to])
        } else {
            None
        }
    }

    /// Neighbors of `v` in ascending order. Empty for an unknown vertex.
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(v).map(|l| l.as_slice()).unwrap_or(&[])
    }

    /// `(neighbor, weight)` pairs for `v`, in adjacency order.
    pub fn edges(&self, v: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        let row = self.row(v);
        self.neighbors(v).iter().map(move |&to| (to, row[to]))
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|l| l.len()).sum()
    }

    /// First negative-weight edge in row-major order.
    pub fn negative_edge(&self) -> Option<(VertexId, VertexId, Weight)> {
        (0..self.vertex_count).find_map(|from| {
            self.edges(from)
                .find(|&(_, w)| w < 0)
                .map(|(to, w)| (from, to, w))
        })
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let matrix = self.weights.capacity() * size_of::<Weight>();
        let lists = self.adjacency.capacity() * size_of::<Vec<VertexId>>();
        let entries: usize = self
            .adjacency
            .iter()
            .map(|l| l.capacity() * size_of::<VertexId>())
            .sum();

        matrix + lists + entries
    }

    /// Matrix row of `v`; empty for an unknown vertex.
    pub(crate) fn row(&self, v: VertexId) -> &[Weight] {
        if self.contains(v) {
            let start = v * self.vertex_count;
            &self.weights[start..start + self.vertex_count]
        } else {
            &[]
        }
    }

    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::OutOfRangeVertex {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }
}
