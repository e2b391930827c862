//! Immutable extraction snapshot and its query surface.
//!
//! One `Subdivision` is the result of one batch extraction. It is plain owned
//! data (`Send + Sync`); regenerating faces means building a new snapshot.

use nalgebra::Vector2;
use tracing::info;

use crate::faces::{renumber, split_external, trace_all_faces, ComponentDefect, FaceId, Polygon};
use crate::graph::{GraphError, PlanarGraph};
use crate::locate::{locate, LocateCfg, Predicate};
use crate::neighbors::{find_neighbors, neighbor_layers, populate_neighbors, FaceNeighborMap, NeighborError};

#[derive(Clone, Debug)]
pub struct Subdivision {
    vertices: Vec<Vector2<f64>>,
    faces: Vec<Polygon>,
    external_faces: usize,
    defects: Vec<ComponentDefect>,
    cfg: LocateCfg,
}

impl Subdivision {
    /// Trace, filter, renumber, and populate neighbor sets in one batch.
    ///
    /// Fails only on invalid input; no partial result is returned.
    pub fn extract(graph: &PlanarGraph) -> Result<Self, GraphError> {
        let traced = trace_all_faces(graph)?;
        let outcome = split_external(traced, &graph.component_labels());
        let mut faces = outcome.interior;
        renumber(&mut faces);
        populate_neighbors(&mut faces);
        info!(
            vertices = graph.vertex_count(),
            edges = graph.undirected_edge_count(),
            interior = faces.len(),
            external = outcome.external.len(),
            defects = outcome.defects.len(),
            "extracted faces"
        );
        Ok(Self {
            vertices: graph.vertices().to_vec(),
            faces,
            external_faces: outcome.external.len(),
            defects: outcome.defects,
            cfg: LocateCfg::default(),
        })
    }

    /// Replace the point-location configuration.
    pub fn with_cfg(mut self, cfg: LocateCfg) -> Self {
        self.cfg = cfg;
        self
    }

    #[inline]
    pub fn cfg(&self) -> LocateCfg {
        self.cfg
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Interior faces; `faces()[k].id() == FaceId(k)`.
    #[inline]
    pub fn faces(&self) -> &[Polygon] {
        &self.faces
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> Option<&Polygon> {
        self.faces.get(id.0)
    }

    /// Number of exterior faces dropped by the filter.
    #[inline]
    pub fn external_face_count(&self) -> usize {
        self.external_faces
    }

    /// Components that did not trace exactly one exterior face.
    #[inline]
    pub fn defects(&self) -> &[ComponentDefect] {
        &self.defects
    }

    /// First face containing `p` under the configured predicate.
    pub fn point_locate(&self, p: Vector2<f64>) -> Option<FaceId> {
        locate(&self.faces, p, &self.cfg)
    }

    pub fn point_locate_with(&self, p: Vector2<f64>, predicate: Predicate) -> Option<FaceId> {
        let cfg = LocateCfg {
            predicate,
            ..self.cfg
        };
        locate(&self.faces, p, &cfg)
    }

    pub fn neighbors_of(&self, id: FaceId) -> Result<Vec<FaceId>, NeighborError> {
        find_neighbors(&self.faces, id)
    }

    pub fn neighbor_layers(&self, start: FaceId) -> Result<FaceNeighborMap, NeighborError> {
        neighbor_layers(&self.faces, start)
    }
}
