//! Point location: two independent point-in-polygon predicates.
//!
//! Both are boundary-inclusive: a query within `eps_boundary` of any ring edge
//! (vertices included) counts as inside. Both are O(ring length); locating
//! over a face list is O(total ring length) = O(E).

use nalgebra::Vector2;

use crate::faces::{FaceId, Polygon};

/// Which containment test to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Predicate {
    /// Horizontal ray to +x, odd crossing count ⇒ inside.
    #[default]
    RayCast,
    /// Nonzero winding number ⇒ inside.
    Winding,
}

impl Predicate {
    pub fn contains(self, ring: &[Vector2<f64>], p: Vector2<f64>, eps_boundary: f64) -> bool {
        match self {
            Predicate::RayCast => contains_ray_cast(ring, p, eps_boundary),
            Predicate::Winding => contains_winding(ring, p, eps_boundary),
        }
    }
}

/// Point-location configuration.
#[derive(Clone, Copy, Debug)]
pub struct LocateCfg {
    pub predicate: Predicate,
    /// Distance within which a point counts as lying on the boundary.
    pub eps_boundary: f64,
}

impl Default for LocateCfg {
    fn default() -> Self {
        Self {
            predicate: Predicate::RayCast,
            eps_boundary: 1e-12,
        }
    }
}

/// Euclidean distance from `p` to the segment `[a, b]`.
pub fn distance_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// True when `p` lies within `eps` of some edge of the closed ring.
pub fn on_boundary(ring: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    let n = ring.len();
    (0..n).any(|i| distance_to_segment(p, ring[i], ring[(i + 1) % n]) <= eps)
}

/// Ray casting. An edge counts when it straddles `p.y` (half-open in y, so a
/// shared vertex is counted once) and its crossing lies at or right of `p.x`;
/// an exact hit on the crossing is inside.
pub fn contains_ray_cast(ring: &[Vector2<f64>], p: Vector2<f64>, eps_boundary: f64) -> bool {
    if ring.len() < 3 {
        return false;
    }
    if on_boundary(ring, p, eps_boundary) {
        return true;
    }
    let n = ring.len();
    let mut crossings = 0usize;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if (a.y <= p.y && b.y > p.y) || (a.y > p.y && b.y <= p.y) {
            let x = (p.y - a.y) / (b.y - a.y) * (b.x - a.x) + a.x;
            if p.x == x {
                return true;
            }
            if p.x < x {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

/// Signed test: > 0 when `p` is strictly left of the directed line `a → b`.
#[inline]
fn is_left(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> f64 {
    (b - a).perp(&(p - a))
}

/// Winding number (Sunday). Upward edges with `p` strictly left add one turn,
/// downward edges with `p` strictly right remove one; independent of the
/// ring's orientation.
pub fn contains_winding(ring: &[Vector2<f64>], p: Vector2<f64>, eps_boundary: f64) -> bool {
    if ring.len() < 3 {
        return false;
    }
    if on_boundary(ring, p, eps_boundary) {
        return true;
    }
    winding_number(ring, p) != 0
}

pub fn winding_number(ring: &[Vector2<f64>], p: Vector2<f64>) -> i64 {
    let n = ring.len();
    let mut wn = 0i64;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// First face (in list order) whose predicate contains `p`.
pub fn locate(faces: &[Polygon], p: Vector2<f64>, cfg: &LocateCfg) -> Option<FaceId> {
    faces.iter().find(|f| f.contains(p, cfg)).map(Polygon::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    const EPS: f64 = 1e-12;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ]
    }

    /// U shape opening upward: the notch (1..3, 1..3) is outside.
    fn u_shape() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 3.0],
            vector![3.0, 3.0],
            vector![3.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 3.0],
            vector![0.0, 3.0],
        ]
    }

    fn both(ring: &[Vector2<f64>], p: Vector2<f64>) -> (bool, bool) {
        (
            contains_ray_cast(ring, p, EPS),
            contains_winding(ring, p, EPS),
        )
    }

    #[test]
    fn square_inside_boundary_outside() {
        let sq = square();
        assert_eq!(both(&sq, vector![1.0, 1.0]), (true, true));
        assert_eq!(both(&sq, vector![0.0, 0.0]), (true, true));
        assert_eq!(both(&sq, vector![1.0, 2.0]), (true, true));
        assert_eq!(both(&sq, vector![2.0, 2.0]), (true, true));
        assert_eq!(both(&sq, vector![-0.01, 0.0]), (false, false));
        assert_eq!(both(&sq, vector![3.0, 1.0]), (false, false));
    }

    #[test]
    fn orientation_does_not_matter() {
        let mut cw = square();
        cw.reverse();
        assert_eq!(both(&cw, vector![0.5, 1.5]), (true, true));
        assert_eq!(winding_number(&cw, vector![0.5, 1.5]), -1);
        assert_eq!(winding_number(&square(), vector![0.5, 1.5]), 1);
    }

    #[test]
    fn non_convex_notch_is_outside() {
        let u = u_shape();
        assert_eq!(both(&u, vector![2.0, 2.0]), (false, false));
        assert_eq!(both(&u, vector![0.5, 2.0]), (true, true));
        assert_eq!(both(&u, vector![2.0, 0.5]), (true, true));
        // Ray through two reflex vertices at y = 1.
        assert_eq!(both(&u, vector![-1.0, 1.0]), (false, false));
        assert_eq!(both(&u, vector![2.0, 1.0]), (true, true));
    }

    #[test]
    fn apex_vertex_counts_as_inside() {
        let tri = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]];
        assert_eq!(both(&tri, vector![1.0, 2.0]), (true, true));
        assert_eq!(both(&tri, vector![1.0, 2.0 / 3.0]), (true, true));
        assert_eq!(both(&tri, vector![2.01, 0.0]), (false, false));
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let seg = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(both(&seg, vector![0.5, 0.0]), (false, false));
        assert!(!Predicate::Winding.contains(&[], vector![0.0, 0.0], EPS));
    }

    #[test]
    fn eps_widens_the_boundary() {
        let sq = square();
        assert!(!contains_ray_cast(&sq, vector![-0.01, 1.0], EPS));
        assert!(contains_ray_cast(&sq, vector![-0.01, 1.0], 0.02));
        assert!((distance_to_segment(vector![1.0, 1.0], vector![0.0, 0.0], vector![2.0, 0.0]) - 1.0).abs() < 1e-12);
        assert!((distance_to_segment(vector![3.0, 0.0], vector![0.0, 0.0], vector![2.0, 0.0]) - 1.0).abs() < 1e-12);
    }
}
