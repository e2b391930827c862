//! Face entity: vertex ring, identifier, display color, neighbor ids.

use std::collections::BTreeSet;
use std::fmt;

use nalgebra::Vector2;

use crate::locate::LocateCfg;

/// Face identifier; after renumbering it equals the face's position in the
/// interior-face list, so it doubles as an arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `(id·113, id·157, id·193) mod 255` per channel.
    pub fn from_id(id: FaceId) -> Self {
        let k = id.0 as u64;
        let channel = |prime: u64| (k.wrapping_mul(prime) % 255) as u8;
        Self {
            r: channel(113),
            g: channel(157),
            b: channel(193),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Shoelace variant `Σ (x_next − x_curr)(y_next + y_curr)` over the closed ring.
///
/// Equals `−2·A` for a counterclockwise ring of area `A` (y axis up), so the
/// tracer's interior faces come out negative and the exterior face positive.
pub fn shoelace(ring: &[Vector2<f64>]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let curr = ring[i];
            let next = ring[(i + 1) % n];
            (next.x - curr.x) * (next.y + curr.y)
        })
        .sum()
}

/// One traced face boundary.
///
/// Invariants:
/// - `indices.len() == vertices.len() >= 3`, `vertices[k]` is the coordinate of
///   `indices[k]`.
/// - `neighbors` holds identifiers only (no references between faces).
#[derive(Clone, Debug)]
pub struct Polygon {
    id: FaceId,
    indices: Vec<usize>,
    vertices: Vec<Vector2<f64>>,
    neighbors: BTreeSet<FaceId>,
}

impl Polygon {
    /// Returns `None` when the ring has fewer than 3 vertices.
    pub fn new(id: FaceId, indices: Vec<usize>, coords: &[Vector2<f64>]) -> Option<Self> {
        if indices.len() < 3 || indices.iter().any(|&i| i >= coords.len()) {
            return None;
        }
        let vertices = indices.iter().map(|&i| coords[i]).collect();
        Some(Self {
            id,
            indices,
            vertices,
            neighbors: BTreeSet::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> FaceId {
        self.id
    }

    #[inline]
    pub fn set_id(&mut self, id: FaceId) {
        self.id = id;
    }

    /// Graph vertex indices, in boundary order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Coordinate ring, in boundary order.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_id(self.id)
    }

    /// Neighbor ids in ascending order.
    pub fn neighbors(&self) -> Vec<FaceId> {
        self.neighbors.iter().copied().collect()
    }

    pub fn add_neighbor(&mut self, id: FaceId) {
        self.neighbors.insert(id);
    }

    pub fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    pub fn shoelace(&self) -> f64 {
        shoelace(&self.vertices)
    }

    /// The unbounded face is the one traced with positive shoelace sum.
    pub fn is_external(&self) -> bool {
        self.shoelace() > 0.0
    }

    pub fn area(&self) -> f64 {
        0.5 * self.shoelace().abs()
    }

    /// Vertex average (label anchor, not the area centroid).
    pub fn centroid(&self) -> Vector2<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, v| acc + v);
        sum / self.vertices.len() as f64
    }

    pub fn contains(&self, p: Vector2<f64>, cfg: &LocateCfg) -> bool {
        cfg.predicate.contains(&self.vertices, p, cfg.eps_boundary)
    }
}

/// Reassign ids to list positions (`faces[k].id() == FaceId(k)`).
pub fn renumber(faces: &mut [Polygon]) {
    for (k, face) in faces.iter_mut().enumerate() {
        face.set_id(FaceId(k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ]
    }

    #[test]
    fn color_matches_prime_formula() {
        assert_eq!(Rgb::from_id(FaceId(0)), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            Rgb::from_id(FaceId(1)),
            Rgb {
                r: 113,
                g: 157,
                b: 193
            }
        );
        // 3·113 = 339 → 84, 3·157 = 471 → 216, 3·193 = 579 → 69
        assert_eq!(Rgb::from_id(FaceId(3)).to_string(), "rgb(84, 216, 69)");
    }

    #[test]
    fn shoelace_sign_separates_orientations() {
        let ccw = unit_square();
        let mut cw = ccw.clone();
        cw.reverse();
        assert!((shoelace(&ccw) + 8.0).abs() < 1e-12);
        assert!((shoelace(&cw) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn short_rings_are_rejected() {
        let coords = unit_square();
        assert!(Polygon::new(FaceId(0), vec![0, 1], &coords).is_none());
        assert!(Polygon::new(FaceId(0), vec![0, 1, 7], &coords).is_none());
        let p = Polygon::new(FaceId(4), vec![0, 1, 2, 3], &coords).unwrap();
        assert_eq!(p.len(), 4);
        assert!(!p.is_external());
        assert!((p.area() - 4.0).abs() < 1e-12);
        assert!((p.centroid() - vector![1.0, 1.0]).norm() < 1e-12);
    }

    #[test]
    fn renumber_and_neighbors() {
        let coords = unit_square();
        let mut faces = vec![
            Polygon::new(FaceId(5), vec![0, 1, 2], &coords).unwrap(),
            Polygon::new(FaceId(9), vec![0, 2, 3], &coords).unwrap(),
        ];
        renumber(&mut faces);
        assert_eq!(faces[1].id(), FaceId(1));
        faces[0].add_neighbor(FaceId(1));
        faces[0].add_neighbor(FaceId(1));
        assert_eq!(faces[0].neighbors(), vec![FaceId(1)]);
        faces[0].clear_neighbors();
        assert!(faces[0].neighbors().is_empty());
    }
}
