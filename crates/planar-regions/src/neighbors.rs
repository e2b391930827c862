//! Face adjacency (shared boundary edges) and breadth-first neighbor layers.
//!
//! Faces live in one owned slice indexed by `FaceId`; adjacency is recorded as
//! ids only. Callers must have renumbered the slice (`faces[k].id() == FaceId(k)`).

use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::faces::{FaceId, Polygon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborError {
    /// The queried id is not a position in the face list.
    UnknownFace { id: FaceId, face_count: usize },
}

impl fmt::Display for NeighborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborError::UnknownFace { id, face_count } => {
                write!(f, "face {id} does not exist ({face_count} faces)")
            }
        }
    }
}

impl std::error::Error for NeighborError {}

fn face_at(faces: &[Polygon], id: FaceId) -> Result<&Polygon, NeighborError> {
    faces.get(id.0).ok_or(NeighborError::UnknownFace {
        id,
        face_count: faces.len(),
    })
}

/// Faces sharing at least one boundary edge (either direction) with `query`,
/// in face-list order.
///
/// Two shared vertices are not enough: both endpoints of a candidate edge must
/// sit at cyclically adjacent positions of the query ring. Scanning a
/// candidate stops at its first shared edge.
///
/// Complexity: O(C) for the position lookup, O(F·C) for the scan.
pub fn find_neighbors(faces: &[Polygon], query: FaceId) -> Result<Vec<FaceId>, NeighborError> {
    let ring = face_at(faces, query)?.indices();
    let len = ring.len();
    let position: HashMap<usize, usize> = ring.iter().enumerate().map(|(k, &v)| (v, k)).collect();
    let adjacent = |a: usize, b: usize| (a + 1) % len == b || (b + 1) % len == a;

    let mut out = Vec::new();
    for (k, face) in faces.iter().enumerate() {
        if k == query.0 {
            continue;
        }
        let other = face.indices();
        let m = other.len();
        let shares_edge = (0..m).any(|j| {
            match (position.get(&other[j]), position.get(&other[(j + 1) % m])) {
                (Some(&p1), Some(&p2)) => adjacent(p1, p2),
                _ => false,
            }
        });
        if shares_edge {
            out.push(FaceId(k));
        }
    }
    Ok(out)
}

/// Bulk variant: fill every polygon's neighbor set. O(F²·C).
pub fn populate_neighbors(faces: &mut [Polygon]) {
    let all: Vec<Vec<FaceId>> = (0..faces.len())
        .map(|k| find_neighbors(faces, FaceId(k)).unwrap_or_default())
        .collect();
    for (face, ids) in faces.iter_mut().zip(all) {
        face.clear_neighbors();
        for id in ids {
            face.add_neighbor(id);
        }
    }
}

/// Face → neighbor list, in BFS discovery order, with the BFS depth of each key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceNeighborMap {
    entries: Vec<(FaceId, Vec<FaceId>)>,
    depth: Vec<usize>,
    index: HashMap<FaceId, usize>,
}

impl FaceNeighborMap {
    fn insert(&mut self, id: FaceId, neighbors: Vec<FaceId>, depth: usize) {
        self.index.insert(id, self.entries.len());
        self.entries.push((id, neighbors));
        self.depth.push(depth);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: FaceId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: FaceId) -> Option<&[FaceId]> {
        self.index.get(&id).map(|&k| self.entries[k].1.as_slice())
    }

    /// Shortest adjacency distance from the start face.
    pub fn depth_of(&self, id: FaceId) -> Option<usize> {
        self.index.get(&id).map(|&k| self.depth[k])
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &[FaceId])> + '_ {
        self.entries.iter().map(|(id, n)| (*id, n.as_slice()))
    }

    /// Keys grouped by depth; layer 0 is the start face.
    pub fn layers(&self) -> Vec<Vec<FaceId>> {
        let mut out: Vec<Vec<FaceId>> = Vec::new();
        for (k, (id, _)) in self.entries.iter().enumerate() {
            let d = self.depth[k];
            if out.len() <= d {
                out.resize_with(d + 1, Vec::new);
            }
            out[d].push(*id);
        }
        out
    }
}

/// Breadth-first expansion over shared-edge adjacency from `start`.
///
/// Each reachable face is expanded once; unreachable faces are absent.
/// Complexity: O(F) expansions × O(F·C) per `find_neighbors`.
pub fn neighbor_layers(faces: &[Polygon], start: FaceId) -> Result<FaceNeighborMap, NeighborError> {
    face_at(faces, start)?;
    let mut map = FaceNeighborMap::default();
    let mut depth_hint: HashMap<FaceId, usize> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(id) = queue.pop_front() {
        if map.contains(id) {
            continue;
        }
        let neighbors = find_neighbors(faces, id)?;
        let d = depth_hint.get(&id).copied().unwrap_or(0);
        for &n in &neighbors {
            if !map.contains(n) {
                depth_hint.entry(n).or_insert(d + 1);
                queue.push_back(n);
            }
        }
        map.insert(id, neighbors, d);
    }
    Ok(map)
}
