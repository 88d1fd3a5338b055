use serde::Serialize;
use std::fmt;

/// Dense vertex id in `[0, num_vertices)`
pub type Vertex = usize;

/// Non-negative edge weight
pub type Weight = u32;

/// Accumulated path cost.
///
/// `Cost::INFINITY` is the sentinel for "no known finite distance". Addition
/// saturates, so a finite sum never wraps around into a small value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITY: Cost = Cost(u64::MAX);

    pub fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<Weight> for Cost {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        Cost(self.0.saturating_add(u64::from(weight)))
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Directed weighted edge, owned by its source vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: Vertex, weight: Weight) -> Self {
        Self { to, weight }
    }
}

/// Result of a single source-to-target query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub target: Vertex,
    /// Vertices from source to target. Always contains at least `target`.
    pub path: Vec<Vertex>,
    /// Total cost, `Cost::INFINITY` when the target is unreachable
    pub cost: Cost,
}

impl PathResult {
    /// Whether the target was reached from the source.
    ///
    /// Decided by the cost sentinel, never by path length: the trivial path
    /// from the source to itself also has length 1.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}
