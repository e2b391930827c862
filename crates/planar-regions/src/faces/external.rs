//! Exterior-face filter with a per-component sanity report.
//!
//! A connected component traced on a planar embedding yields exactly one face
//! with positive shoelace sum (its outer boundary). Anything else means the
//! input broke the planarity precondition; that is reported, not repaired.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use super::polygon::Polygon;

/// A component whose traced faces did not contain exactly one exterior face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentDefect {
    /// Label from `PlanarGraph::component_labels`.
    pub component: usize,
    pub external_faces: usize,
}

impl fmt::Display for ComponentDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "component {} traced {} exterior faces (expected 1); input is likely non-planar",
            self.component, self.external_faces
        )
    }
}

/// Result of `split_external`. Both lists keep trace order and creation ids.
#[derive(Clone, Debug, Default)]
pub struct FilterOutcome {
    pub interior: Vec<Polygon>,
    pub external: Vec<Polygon>,
    pub defects: Vec<ComponentDefect>,
}

/// Partition traced faces into interior/exterior and check one exterior face
/// per component. `component_of[v]` labels vertex `v` and must cover every
/// face vertex; a face belongs to the component of its first vertex.
/// Components without faces are not checked.
pub fn split_external(faces: Vec<Polygon>, component_of: &[usize]) -> FilterOutcome {
    let mut out = FilterOutcome::default();
    let mut per_component: BTreeMap<usize, usize> = BTreeMap::new();
    for face in faces {
        let first = face.indices()[0];
        debug_assert!(
            first < component_of.len(),
            "component labels cover {} vertices, face {} starts at vertex {first}",
            component_of.len(),
            face.id()
        );
        let component = component_of.get(first).copied().unwrap_or(0);
        let ext = per_component.entry(component).or_insert(0);
        if face.is_external() {
            *ext += 1;
            out.external.push(face);
        } else {
            out.interior.push(face);
        }
    }
    for (component, external_faces) in per_component {
        if external_faces != 1 {
            let defect = ComponentDefect {
                component,
                external_faces,
            };
            warn!(component, external_faces, "{defect}");
            out.defects.push(defect);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::FaceId;
    use nalgebra::{vector, Vector2};

    fn coords() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![5.0, 0.0],
            vector![6.0, 0.0],
            vector![5.0, 1.0],
        ]
    }

    #[test]
    fn splits_by_sign_and_keeps_order() {
        let c = coords();
        let faces = vec![
            Polygon::new(FaceId(0), vec![0, 1, 2], &c).unwrap(), // ccw: interior
            Polygon::new(FaceId(1), vec![0, 2, 1], &c).unwrap(), // cw: exterior
        ];
        let out = split_external(faces, &[0, 0, 0, 1, 1, 1]);
        assert_eq!(out.interior.len(), 1);
        assert_eq!(out.external.len(), 1);
        assert_eq!(out.external[0].id(), FaceId(1));
        assert!(out.defects.is_empty());
    }

    #[test]
    fn reports_components_with_wrong_exterior_count() {
        let c = coords();
        let faces = vec![
            Polygon::new(FaceId(0), vec![0, 1, 2], &c).unwrap(),
            Polygon::new(FaceId(1), vec![3, 5, 4], &c).unwrap(),
            Polygon::new(FaceId(2), vec![4, 3, 5], &c).unwrap(),
        ];
        let out = split_external(faces, &[0, 0, 0, 1, 1, 1]);
        assert_eq!(
            out.defects,
            vec![
                ComponentDefect {
                    component: 0,
                    external_faces: 0
                },
                ComponentDefect {
                    component: 1,
                    external_faces: 2
                },
            ]
        );
        assert!(out.defects[1].to_string().contains("traced 2 exterior faces"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "component labels cover 3 vertices")]
    fn short_label_slice_is_caught_in_debug_builds() {
        let c = coords();
        let faces = vec![Polygon::new(FaceId(0), vec![3, 4, 5], &c).unwrap()];
        split_external(faces, &[0, 0, 0]);
    }
}
