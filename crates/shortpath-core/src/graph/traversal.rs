use std::collections::TryReserveError;

use crate::error::Result;
use crate::graph::types::{Edge, Vertex, Weight};

/// Trait for providing graph adjacency
pub trait GraphProvider {
    fn num_vertices(&self) -> usize;
    fn outbound_edges(&self, vertex: Vertex) -> &[Edge];
}

/// Adjacency-list graph over dense vertex ids `0..num_vertices`.
///
/// Edge order within a vertex's list only affects tie-break timing in the
/// frontier, never the resulting distances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Like [`Graph::new`], but reports an unallocatable vertex count
    /// instead of aborting.
    pub fn try_new(num_vertices: usize) -> std::result::Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(num_vertices)?;
        adjacency.resize_with(num_vertices, Vec::new);
        Ok(Self { adjacency })
    }

    /// Add a directed edge `from -> to`
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: Weight) -> Result<()> {
        let n = self.adjacency.len();
        crate::ensure_vertex!(from, n);
        crate::ensure_vertex!(to, n);
        self.adjacency[from].push(Edge::new(to, weight));
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

impl GraphProvider for Graph {
    fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Panics if `vertex` is out of range; callers check against
    /// `num_vertices` first.
    fn outbound_edges(&self, vertex: Vertex) -> &[Edge] {
        &self.adjacency[vertex]
    }
}
