//! Validated planar graph input and its error type.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use nalgebra::Vector2;

use super::adjacency::AdjacencyMatrix;

/// Errors raised while validating a graph, before any tracing starts.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    /// Edge `edge` names a vertex outside `0..vertex_count`.
    EdgeOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// Edge `edge` connects `vertex` to itself.
    SelfLoop { edge: usize, vertex: usize },
    /// Edge `edge` joins two vertices with identical coordinates.
    ZeroLengthEdge { edge: usize },
    /// Vertex `vertex` has a NaN or infinite coordinate.
    NonFiniteVertex { vertex: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::EdgeOutOfRange {
                edge,
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge {edge} references vertex {vertex}, but only {vertex_count} vertices exist"
            ),
            GraphError::SelfLoop { edge, vertex } => {
                write!(f, "edge {edge} is a self-loop on vertex {vertex}")
            }
            GraphError::ZeroLengthEdge { edge } => {
                write!(f, "edge {edge} joins two coincident vertices")
            }
            GraphError::NonFiniteVertex { vertex } => {
                write!(f, "vertex {vertex} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Planar straight-line graph: vertex coordinates plus undirected edges by index.
///
/// Invariants (checked by `new`):
/// - every edge endpoint lies in `0..vertices.len()`;
/// - no self-loops, no zero-length edges, all coordinates finite.
///
/// Planarity (no crossing edges) is a precondition that is *not* checked.
#[derive(Clone, Debug)]
pub struct PlanarGraph {
    vertices: Vec<Vector2<f64>>,
    edges: Vec<(usize, usize)>,
}

impl PlanarGraph {
    pub fn new(
        vertices: Vec<Vector2<f64>>,
        edges: Vec<(usize, usize)>,
    ) -> Result<Self, GraphError> {
        if let Some(vertex) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(GraphError::NonFiniteVertex { vertex });
        }
        let n = vertices.len();
        for (edge, &(a, b)) in edges.iter().enumerate() {
            for vertex in [a, b] {
                if vertex >= n {
                    return Err(GraphError::EdgeOutOfRange {
                        edge,
                        vertex,
                        vertex_count: n,
                    });
                }
            }
            if a == b {
                return Err(GraphError::SelfLoop { edge, vertex: a });
            }
            if vertices[a] == vertices[b] {
                return Err(GraphError::ZeroLengthEdge { edge });
            }
        }
        Ok(Self { vertices, edges })
    }

    /// Skip validation; only for constructions that satisfy the invariants by design.
    pub(crate) fn from_parts_unchecked(
        vertices: Vec<Vector2<f64>>,
        edges: Vec<(usize, usize)>,
    ) -> Self {
        debug_assert!(Self::new(vertices.clone(), edges.clone()).is_ok());
        Self { vertices, edges }
    }

    /// Build from the `[x, y]` / `[from, to]` pair layout used by graph files.
    pub fn from_pairs(vertices: &[[f64; 2]], edges: &[[usize; 2]]) -> Result<Self, GraphError> {
        Self::new(
            vertices.iter().map(|p| Vector2::new(p[0], p[1])).collect(),
            edges.iter().map(|e| (e[0], e[1])).collect(),
        )
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct undirected edges (duplicates and reversed copies collapse).
    pub fn undirected_edge_count(&self) -> usize {
        self.edges
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Fresh symmetric incidence matrix for one extraction run.
    pub fn adjacency(&self) -> Result<AdjacencyMatrix, GraphError> {
        AdjacencyMatrix::build(self.vertices.len(), &self.edges)
    }

    /// Connected-component label per vertex (labels are `0..k` in order of
    /// first appearance). Isolated vertices get their own label.
    pub fn component_labels(&self) -> Vec<usize> {
        let n = self.vertices.len();
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(a, b) in &self.edges {
            adj[a].push(b);
            adj[b].push(a);
        }
        let mut label = vec![usize::MAX; n];
        let mut next = 0usize;
        let mut queue = VecDeque::new();
        for root in 0..n {
            if label[root] != usize::MAX {
                continue;
            }
            label[root] = next;
            queue.push_back(root);
            while let Some(v) = queue.pop_front() {
                for &w in &adj[v] {
                    if label[w] == usize::MAX {
                        label[w] = next;
                        queue.push_back(w);
                    }
                }
            }
            next += 1;
        }
        label
    }

    pub fn component_count(&self) -> usize {
        self.component_labels()
            .into_iter()
            .max()
            .map_or(0, |m| m + 1)
    }
}
