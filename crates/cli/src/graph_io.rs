//! JSON graph files and face records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use planar_regions::{PlanarGraph, Polygon};
use serde::{Deserialize, Serialize};

/// On-disk graph layout: `[x, y]` vertices and `[from, to]` edges, 0-based.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphFile {
    pub vertices: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
}

impl GraphFile {
    pub fn from_graph(graph: &PlanarGraph) -> Self {
        Self {
            vertices: graph.vertices().iter().map(|v| [v.x, v.y]).collect(),
            edges: graph.edges().iter().map(|&(a, b)| [a, b]).collect(),
        }
    }

    pub fn to_graph(&self) -> Result<PlanarGraph> {
        Ok(PlanarGraph::from_pairs(&self.vertices, &self.edges)?)
    }
}

pub fn load_graph(path: &Path) -> Result<PlanarGraph> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: GraphFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing graph JSON {}", path.display()))?;
    file.to_graph()
        .with_context(|| format!("validating graph {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Renderer-facing face record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FaceRecord {
    pub id: usize,
    pub indices: Vec<usize>,
    pub vertices: Vec<[f64; 2]>,
    pub color: String,
    pub neighbors: Vec<usize>,
    pub centroid: [f64; 2],
}

impl From<&Polygon> for FaceRecord {
    fn from(face: &Polygon) -> Self {
        let c = face.centroid();
        Self {
            id: face.id().0,
            indices: face.indices().to_vec(),
            vertices: face.vertices().iter().map(|v| [v.x, v.y]).collect(),
            color: face.color().to_string(),
            neighbors: face.neighbors().into_iter().map(|n| n.0).collect(),
            centroid: [c.x, c.y],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_regions::Subdivision;
    use tempfile::tempdir;

    const TRIANGLES: &str = r#"{
        "vertices": [[0, 0], [2, 0], [1, 2], [3, 0], [5, 0], [4, 2]],
        "edges": [[0, 1], [1, 2], [2, 0], [3, 4], [4, 5], [5, 3]]
    }"#;

    #[test]
    fn load_accepts_integer_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.json");
        fs::write(&path, TRIANGLES).unwrap();
        let g = load_graph(&path).unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edges().len(), 6);
        assert_eq!(GraphFile::from_graph(&g).vertices[5], [4.0, 2.0]);
    }

    #[test]
    fn load_reports_invalid_edges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"vertices": [[0, 0]], "edges": [[0, 3]]}"#).unwrap();
        let err = load_graph(&path).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("validating graph"), "{chain}");
        assert!(chain.contains("references vertex 3"), "{chain}");
    }

    #[test]
    fn face_records_carry_color_and_neighbors() {
        let g: GraphFile = serde_json::from_str(TRIANGLES).unwrap();
        let snap = Subdivision::extract(&g.to_graph().unwrap()).unwrap();
        let recs: Vec<FaceRecord> = snap.faces().iter().map(FaceRecord::from).collect();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].id, 1);
        assert_eq!(recs[1].color, "rgb(113, 157, 193)");
        assert!(recs[0].neighbors.is_empty());

        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/faces.json");
        write_json(&out, &recs).unwrap();
        let back: Vec<FaceRecord> = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(back, recs);
    }
}
