//! Curated free-function surface for callers holding plain coordinate and
//! edge lists (the shape a graph file decodes to).
//!
//! Prefer `Subdivision` when issuing several queries against one graph; the
//! query helpers below work on an already extracted face slice.

pub use crate::faces::{extract_interior_faces, FaceId, Polygon, Rgb};
pub use crate::graph::rand::{draw_grid_graph, wheel_graph, GridCfg, ReplayToken};
pub use crate::graph::{GraphError, PlanarGraph};
pub use crate::locate::{LocateCfg, Predicate};
pub use crate::neighbors::{FaceNeighborMap, NeighborError};
pub use crate::subdivision::Subdivision;

use nalgebra::Vector2;

/// Validate `[x, y]` / `[from, to]` pairs and extract the interior faces.
pub fn faces_from_pairs(
    vertices: &[[f64; 2]],
    edges: &[[usize; 2]],
) -> Result<Vec<Polygon>, GraphError> {
    extract_interior_faces(&PlanarGraph::from_pairs(vertices, edges)?)
}

/// First face containing `point` (ray casting, boundary-inclusive).
pub fn point_locate(faces: &[Polygon], point: [f64; 2]) -> Option<FaceId> {
    crate::locate::locate(
        faces,
        Vector2::new(point[0], point[1]),
        &LocateCfg::default(),
    )
}

/// Shared-edge neighbors of `id`, in face-list order.
pub fn neighbors_of(faces: &[Polygon], id: FaceId) -> Result<Vec<FaceId>, NeighborError> {
    crate::neighbors::find_neighbors(faces, id)
}

/// Breadth-first neighbor map over the faces reachable from `start`.
pub fn neighbor_layers(faces: &[Polygon], start: FaceId) -> Result<FaceNeighborMap, NeighborError> {
    crate::neighbors::neighbor_layers(faces, start)
}
