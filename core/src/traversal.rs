use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Per-vertex progress during a single traversal run.
///
/// A vertex only ever moves forward: `Unvisited -> Queued -> Emitted` for
/// BFS, `Unvisited -> Emitted` for DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    Queued,
    Emitted,
}

/// Lazy breadth-first walk from a single start vertex.
///
/// Yields each vertex reachable from `start` exactly once, in queue order.
/// Neighbors are queued in adjacency order (ascending id). Owns its visited
/// state, so several walks may run over the same graph at once.
#[derive(Debug, Clone)]
pub struct Bfs<'g> {
    graph: &'g Graph,
    start: VertexId,
    state: Vec<VisitState>,
    depth: Vec<u32>,
    queue: VecDeque<VertexId>,
}

impl<'g> Bfs<'g> {
    fn new(graph: &'g Graph, start: VertexId) -> Result<Self> {
        graph.check_vertex(start)?;
        let n = graph.vertex_count();
        let mut bfs = Self {
            graph,
            start,
            state: vec![VisitState::Unvisited; n],
            depth: vec![0; n],
            queue: VecDeque::with_capacity(n),
        };
        bfs.seed();
        Ok(bfs)
    }

    fn seed(&mut self) {
        self.state[self.start] = VisitState::Queued;
        self.depth[self.start] = 0;
        self.queue.push_back(self.start);
    }

    /// Forget all progress and begin again from the start vertex.
    pub fn restart(&mut self) {
        self.state.fill(VisitState::Unvisited);
        self.queue.clear();
        self.seed();
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn state(&self, v: VertexId) -> Option<VisitState> {
        self.state.get(v).copied()
    }

    /// Hop count from the start vertex, once `v` has been queued.
    pub fn depth_of(&self, v: VertexId) -> Option<u32> {
        match self.state.get(v)? {
            VisitState::Unvisited => None,
            _ => Some(self.depth[v]),
        }
    }

    /// Like `next`, but also reports the hop depth of the emitted vertex.
    pub fn next_with_depth(&mut self) -> Option<(VertexId, u32)> {
        let current = self.queue.pop_front()?;
        self.state[current] = VisitState::Emitted;
        let depth = self.depth[current];

        for &next in self.graph.neighbors(current) {
            if self.state[next] == VisitState::Unvisited {
                self.state[next] = VisitState::Queued;
                self.depth[next] = depth + 1;
                self.queue.push_back(next);
            }
        }

        Some((current, depth))
    }
}

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.next_with_depth().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .state
            .iter()
            .filter(|&&s| s != VisitState::Emitted)
            .count();
        (self.queue.len(), Some(remaining))
    }
}

impl FusedIterator for Bfs<'_> {}

/// Lazy depth-first (pre-order) walk from a single start vertex.
///
/// A vertex is emitted before any of its unvisited neighbors are expanded;
/// neighbors are tried in ascending id order. Uses an explicit stack of
/// `(vertex, next neighbor index)` frames, so the order is the same as the
/// recursive formulation without its stack depth.
#[derive(Debug, Clone)]
pub struct Dfs<'g> {
    graph: &'g Graph,
    start: VertexId,
    state: Vec<VisitState>,
    stack: Vec<(VertexId, usize)>,
    started: bool,
}

impl<'g> Dfs<'g> {
    fn new(graph: &'g Graph, start: VertexId) -> Result<Self> {
        graph.check_vertex(start)?;
        Ok(Self {
            graph,
            start,
            state: vec![VisitState::Unvisited; graph.vertex_count()],
            stack: Vec::new(),
            started: false,
        })
    }

    /// Forget all progress and begin again from the start vertex.
    pub fn restart(&mut self) {
        self.state.fill(VisitState::Unvisited);
        self.stack.clear();
        self.started = false;
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn state(&self, v: VertexId) -> Option<VisitState> {
        self.state.get(v).copied()
    }

    /// Current depth of the walk (length of the explicit stack).
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if !self.started {
            self.started = true;
            self.state[self.start] = VisitState::Emitted;
            self.stack.push((self.start, 0));
            return Some(self.start);
        }

        while let Some(frame) = self.stack.last_mut() {
            let neighbors = self.graph.neighbors(frame.0);
            let mut cursor = frame.1;
            while cursor < neighbors.len() && self.state[neighbors[cursor]] != VisitState::Unvisited {
                cursor += 1;
            }

            if let Some(&next) = neighbors.get(cursor) {
                frame.1 = cursor + 1;
                self.state[next] = VisitState::Emitted;
                self.stack.push((next, 0));
                return Some(next);
            }

            self.stack.pop();
        }

        None
    }
}

impl FusedIterator for Dfs<'_> {}

/// Breadth-first walk from `start`.
///
/// Fails with `OutOfRangeVertex` if `start` is not a vertex of `graph`.
pub fn bfs(graph: &Graph, start: VertexId) -> Result<Bfs<'_>> {
    tracing::trace!(start, vertex_count = graph.vertex_count(), "bfs");
    Bfs::new(graph, start)
}

/// Depth-first pre-order walk from `start`.
///
/// Fails with `OutOfRangeVertex` if `start` is not a vertex of `graph`.
pub fn dfs(graph: &Graph, start: VertexId) -> Result<Dfs<'_>> {
    tracing::trace!(start, vertex_count = graph.vertex_count(), "dfs");
    Dfs::new(graph, start)
}

/// Collect `(vertex, hop depth)` pairs in breadth-first order.
pub fn bfs_levels(graph: &Graph, start: VertexId) -> Result<Vec<(VertexId, u32)>> {
    let mut walk = bfs(graph, start)?;
    let mut levels = Vec::new();
    while let Some(step) = walk.next_with_depth() {
        levels.push(step);
    }
    tracing::debug!(start, reachable = levels.len(), "bfs levels collected");
    Ok(levels)
}
