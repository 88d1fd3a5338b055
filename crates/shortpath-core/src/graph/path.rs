//! Path reconstruction from a predecessor table

use crate::error::{PathError, Result};
use crate::graph::types::Vertex;

/// Walk predecessor links back from `target` and return the vertices in
/// source-to-target order.
///
/// The walk stops at the first vertex without a predecessor. For the source
/// and for unreachable targets that is `target` itself, so both yield a
/// single-element path; tell them apart with the distance table.
pub fn reconstruct_path(predecessors: &[Option<Vertex>], target: Vertex) -> Result<Vec<Vertex>> {
    let n = predecessors.len();
    crate::ensure_vertex!(target, n);

    let mut path = vec![target];
    let mut current = target;
    while let Some(pred) = predecessors[current] {
        crate::ensure_vertex!(pred, n);
        // A path visits each vertex at most once
        if path.len() >= n {
            return Err(PathError::Other(format!(
                "predecessor cycle while reconstructing path to {}",
                target
            )));
        }
        path.push(pred);
        current = pred;
    }

    path.reverse();
    Ok(path)
}
