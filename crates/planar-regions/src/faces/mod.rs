//! Face extraction: Shih's planar-region tracing plus the exterior-face filter.
//!
//! Purpose
//! - Decompose a validated `PlanarGraph` into closed face boundaries by always
//!   taking the sharpest clockwise turn, then drop the unbounded face(s).
//!
//! References
//! - Z.-C. Shih, "A systolic algorithm for extracting planar regions from a
//!   planar graph", CVGIP (1989).
//! - X. Jiang, H. Bunke, "An optimal algorithm for extracting the regions of a
//!   plane graph" (1993), for the complexity analysis.
//! - Code cross-refs: `graph::AdjacencyMatrix`, `neighbors`, `locate`.

mod external;
mod polygon;
mod trace;

pub use external::{split_external, ComponentDefect, FilterOutcome};
pub use polygon::{renumber, shoelace, FaceId, Polygon, Rgb};
pub use trace::{
    clockwise_angle, extract_interior_faces, next_face_vertex, trace_all_faces, trace_face,
    FaceWalk,
};
