use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Cost, PathResult, Vertex};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Frontier entry, wrapped in `Reverse` to turn `BinaryHeap` into a min-heap.
///
/// Field order matters for the derived ordering: cost first, then the
/// smaller vertex id wins a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub cost: Cost,
    pub vertex: Vertex,
}

/// Per-invocation state. Nothing here outlives a single computation.
struct DijkstraState {
    distances: Vec<Cost>,
    predecessors: Vec<Option<Vertex>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    stale: usize,
}

impl DijkstraState {
    fn new(num_vertices: usize, source: Vertex) -> Self {
        let mut state = Self {
            distances: vec![Cost::INFINITY; num_vertices],
            predecessors: vec![None; num_vertices],
            visited: vec![false; num_vertices],
            heap: BinaryHeap::new(),
            stale: 0,
        };
        state.distances[source] = Cost::ZERO;
        state.heap.push(Reverse(HeapEntry {
            cost: Cost::ZERO,
            vertex: source,
        }));
        state
    }

    /// Pop the cheapest entry whose vertex is not yet finalized.
    ///
    /// Entries for visited vertices are superseded and get discarded here;
    /// the heap has no decrease-key, so this is the only place they leave.
    fn pop_unvisited(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.visited[entry.vertex] {
                self.stale += 1;
                continue;
            }
            return Some(entry);
        }
        None
    }
}

/// Distance and predecessor tables produced from one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: Vertex,
    distances: Vec<Cost>,
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPaths {
    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn num_vertices(&self) -> usize {
        self.distances.len()
    }

    /// Distance table indexed by vertex id
    pub fn distances(&self) -> &[Cost] {
        &self.distances
    }

    /// Predecessor table indexed by vertex id
    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    pub fn distance(&self, vertex: Vertex) -> Result<Cost> {
        crate::ensure_vertex!(vertex, self.num_vertices());
        Ok(self.distances[vertex])
    }

    pub fn is_reachable(&self, vertex: Vertex) -> Result<bool> {
        Ok(self.distance(vertex)?.is_finite())
    }

    /// Reconstruct the path to `target` together with its cost
    pub fn path_to(&self, target: Vertex) -> Result<PathResult> {
        let cost = self.distance(target)?;
        let path = reconstruct_path(&self.predecessors, target)?;
        Ok(PathResult { target, path, cost })
    }

    /// Path results for every vertex, in vertex id order
    pub fn all_paths(&self) -> Result<Vec<PathResult>> {
        (0..self.num_vertices())
            .map(|target| self.path_to(target))
            .collect()
    }
}

/// Compute single-source shortest paths with Dijkstra's algorithm.
///
/// Edge weights must be non-negative, which `Weight` guarantees. Fails with
/// `InvalidVertex` when `source` is outside the graph; unreachable vertices
/// are not an error and keep `Cost::INFINITY` with no predecessor.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn compute_shortest_paths(graph: &dyn GraphProvider, source: Vertex) -> Result<ShortestPaths> {
    relax_from(graph, source, |_, _| {})
}

/// Main relaxation loop. `on_relax` sees every improved tentative distance
/// in the order it is written.
pub(crate) fn relax_from<F>(
    graph: &dyn GraphProvider,
    source: Vertex,
    mut on_relax: F,
) -> Result<ShortestPaths>
where
    F: FnMut(Vertex, Cost),
{
    crate::ensure_vertex!(source, graph.num_vertices());

    let mut state = DijkstraState::new(graph.num_vertices(), source);
    let mut finalized = 0usize;

    while let Some(HeapEntry { cost, vertex }) = state.pop_unvisited() {
        state.visited[vertex] = true;
        finalized += 1;

        for edge in graph.outbound_edges(vertex) {
            if state.visited[edge.to] {
                continue;
            }
            let candidate = cost + edge.weight;
            // Strict: an equal-cost path never replaces the first predecessor
            if candidate < state.distances[edge.to] {
                state.distances[edge.to] = candidate;
                state.predecessors[edge.to] = Some(vertex);
                on_relax(edge.to, candidate);
                state.heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    vertex: edge.to,
                }));
            }
        }
    }

    tracing::debug!(
        source,
        finalized,
        stale_discarded = state.stale,
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}
