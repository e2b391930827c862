//! Planar straight-line graphs (validated input + destructive incidence matrix).
//!
//! Purpose
//! - Hold the raw vertex/edge input exactly once, validated up front, so the
//!   face tracer never sees out-of-range indices or zero-length edges.
//! - Provide the `AdjacencyMatrix` the tracer consumes half-edge by half-edge.
//!
//! Code cross-refs: `faces::trace_all_faces`, `faces::split_external`.

mod adjacency;
pub mod rand;
mod types;

pub use adjacency::AdjacencyMatrix;
pub use types::{GraphError, PlanarGraph};

#[cfg(test)]
mod tests;
