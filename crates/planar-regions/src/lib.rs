//! Planar subdivision engine.
//!
//! Given a planar straight-line graph (vertex coordinates + edge list) this
//! crate traces its bounded faces, drops the exterior face, answers
//! shared-edge adjacency and breadth-first neighbor-layer queries, and locates
//! the face containing a point.
//!
//! Pipeline
//! - `graph::PlanarGraph` (validated input) → `graph::AdjacencyMatrix`
//! - `faces::trace_all_faces` → `faces::split_external` → interior `Polygon`s
//! - `neighbors::{find_neighbors, neighbor_layers}`, `locate::locate`
//! - `subdivision::Subdivision` bundles the result as an immutable snapshot.
//!
//! Preconditions: edges must not cross. Crossing input is not detected and may
//! produce invalid faces; the exterior-face check reports it per component.

pub mod api;
pub mod faces;
pub mod graph;
pub mod locate;
pub mod neighbors;
pub mod subdivision;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use faces::{FaceId, Polygon, Rgb};
pub use graph::{GraphError, PlanarGraph};
pub use nalgebra::Vector2 as Vec2;
pub use subdivision::Subdivision;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::faces::{extract_interior_faces, ComponentDefect, FaceId, Polygon, Rgb};
    pub use crate::graph::rand::{draw_grid_graph, wheel_graph, GridCfg, ReplayToken};
    pub use crate::graph::{AdjacencyMatrix, GraphError, PlanarGraph};
    pub use crate::locate::{LocateCfg, Predicate};
    pub use crate::neighbors::{FaceNeighborMap, NeighborError};
    pub use crate::subdivision::Subdivision;
    pub use nalgebra::Vector2 as Vec2;
}
