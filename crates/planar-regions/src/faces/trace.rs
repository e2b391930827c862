//! Face tracer (Shih's planar-region extraction).
//!
//! Every step leaves the current vertex along the still-available half-edge
//! with the smallest clockwise turn from the incoming direction; on a planar
//! embedding the resulting closed walk bounds exactly one face.
//!
//! Complexity: one step is O(V) (row scan + angle per candidate). A full run
//! visits every half-edge once, O(V·E), plus O(V²) per fresh row-major seed.

use nalgebra::Vector2;
use tracing::debug;

use super::external::split_external;
use super::polygon::{renumber, FaceId, Polygon};
use crate::graph::{AdjacencyMatrix, GraphError, PlanarGraph};

/// Clockwise angle in `[0, 2π)` at `at`, turning from the ray `at → prev` to
/// the ray `at → next`.
///
/// The arccosine of the normalized dot product gives the unsigned angle; a
/// positive cross product (counterclockwise) maps it to `2π − angle`.
pub fn clockwise_angle(prev: Vector2<f64>, at: Vector2<f64>, next: Vector2<f64>) -> f64 {
    let a = prev - at;
    let b = next - at;
    let cosine = (a.dot(&b) / (a.norm() * b.norm())).clamp(-1.0, 1.0);
    let angle = cosine.acos();
    if a.perp(&b) > 0.0 {
        std::f64::consts::TAU - angle
    } else {
        angle
    }
}

/// Candidate minimizing the clockwise angle at `current`; ties keep the first
/// candidate in iteration order. `None` when `candidates` is empty.
pub fn next_face_vertex(
    coords: &[Vector2<f64>],
    parent: usize,
    current: usize,
    candidates: &[usize],
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &c in candidates {
        let angle = clockwise_angle(coords[parent], coords[current], coords[c]);
        if best.map_or(true, |(_, a)| angle < a) {
            best = Some((c, angle));
        }
    }
    best.map(|(c, _)| c)
}

/// One walk of the tracer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceWalk {
    /// Visited vertices; the start vertex is not repeated at the end.
    pub ring: Vec<usize>,
    /// True when the walk returned to its start vertex. An open walk stalled
    /// at a vertex with no onward half-edge and bounds no face.
    pub closed: bool,
}

/// Trace the face that starts with the half-edge `start → second`.
///
/// Consumes every half-edge it walks (including the closing one). The walk
/// closes when the start vertex is reachable from the current vertex and
/// stays open when the current vertex has no onward half-edge.
pub fn trace_face(
    coords: &[Vector2<f64>],
    matrix: &mut AdjacencyMatrix,
    start: usize,
    second: usize,
) -> FaceWalk {
    let mut ring = vec![start, second];
    matrix.consume(start, second);
    let mut parent = start;
    let mut current = second;
    let closed = loop {
        let candidates = matrix.neighbors_of(current, Some(parent));
        if candidates.contains(&start) {
            matrix.consume(current, start);
            break true;
        }
        let Some(next) = next_face_vertex(coords, parent, current, &candidates) else {
            break false;
        };
        ring.push(next);
        matrix.consume(current, next);
        parent = current;
        current = next;
    };
    FaceWalk { ring, closed }
}

/// Trace every face of `graph`, interior and exterior, in trace order.
///
/// Dangling trees are pruned from the matrix first. Creation ids are
/// `0, 1, 2, …` over the kept rings: closed and at least 3 vertices long.
/// Seeds come from the twin side of the previous ring first, then a row-major
/// scan.
pub fn trace_all_faces(graph: &PlanarGraph) -> Result<Vec<Polygon>, GraphError> {
    let mut matrix = graph.adjacency()?;
    let pruned = matrix.prune_dangling();
    if pruned > 0 {
        debug!(pruned, "pruned dangling edges");
    }
    let coords = graph.vertices();
    let mut faces: Vec<Polygon> = Vec::new();
    let mut seed = matrix.first_available();
    while let Some((v1, v2)) = seed {
        let FaceWalk { ring, closed } = trace_face(coords, &mut matrix, v1, v2);
        seed = matrix
            .available_on_ring(&ring)
            .or_else(|| matrix.first_available());
        let len = ring.len();
        if !closed {
            debug!(v1, v2, len, "dropped open walk");
            continue;
        }
        match Polygon::new(FaceId(faces.len()), ring, coords) {
            Some(face) => {
                debug!(id = face.id().0, len, "traced face");
                faces.push(face);
            }
            None => debug!(v1, v2, len, "dropped degenerate trace"),
        }
    }
    Ok(faces)
}

/// Interior faces of `graph`, renumbered to list positions.
pub fn extract_interior_faces(graph: &PlanarGraph) -> Result<Vec<Polygon>, GraphError> {
    let all = trace_all_faces(graph)?;
    let mut interior = split_external(all, &graph.component_labels()).interior;
    renumber(&mut interior);
    Ok(interior)
}
