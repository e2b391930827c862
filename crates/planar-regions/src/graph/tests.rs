use super::rand::{draw_grid_graph, wheel_graph, GridCfg, ReplayToken};
use super::*;
use nalgebra::{vector, Vector2};

#[test]
fn new_rejects_malformed_edges() {
    let v = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 0.0]];
    assert!(matches!(
        PlanarGraph::new(v.clone(), vec![(0, 1), (1, 5)]),
        Err(GraphError::EdgeOutOfRange {
            edge: 1,
            vertex: 5,
            vertex_count: 3
        })
    ));
    assert!(matches!(
        PlanarGraph::new(v.clone(), vec![(2, 2)]),
        Err(GraphError::SelfLoop { edge: 0, vertex: 2 })
    ));
    assert!(matches!(
        PlanarGraph::new(v, vec![(0, 1), (1, 2)]),
        Err(GraphError::ZeroLengthEdge { edge: 1 })
    ));
    let bad = vec![vector![0.0, f64::NAN], vector![1.0, 0.0]];
    assert!(matches!(
        PlanarGraph::new(bad, vec![(0, 1)]),
        Err(GraphError::NonFiniteVertex { vertex: 0 })
    ));
}

#[test]
fn error_messages_name_the_edge() {
    let err = PlanarGraph::from_pairs(&[[0.0, 0.0]], &[[0, 1]]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "edge 0 references vertex 1, but only 1 vertices exist"
    );
}

#[test]
fn duplicate_edges_collapse() {
    let g = PlanarGraph::from_pairs(
        &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        &[[0, 1], [1, 0], [1, 2], [2, 0], [0, 1]],
    )
    .unwrap();
    assert_eq!(g.edges().len(), 5);
    assert_eq!(g.undirected_edge_count(), 3);
    assert_eq!(g.adjacency().unwrap().remaining(), 6);
}

#[test]
fn components_label_disjoint_triangles_and_isolated_vertices() {
    let g = PlanarGraph::from_pairs(
        &[
            [0.0, 0.0],
            [2.0, 0.0],
            [1.0, 2.0],
            [3.0, 0.0],
            [5.0, 0.0],
            [4.0, 2.0],
            [9.0, 9.0],
        ],
        &[[0, 1], [1, 2], [2, 0], [3, 4], [4, 5], [5, 3]],
    )
    .unwrap();
    assert_eq!(g.component_labels(), vec![0, 0, 0, 1, 1, 1, 2]);
    assert_eq!(g.component_count(), 3);
}

#[test]
fn grid_draws_are_reproducible_and_sized() {
    let cfg = GridCfg {
        rows: 3,
        cols: 5,
        ..GridCfg::default()
    };
    let tok = ReplayToken { seed: 7, index: 2 };
    let a = draw_grid_graph(cfg, tok);
    let b = draw_grid_graph(cfg, tok);
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.edges(), b.edges());
    assert_eq!(a.vertex_count(), 4 * 6);
    let lattice_edges = 4 * 5 + 3 * 6;
    let diagonals = a.edges().len() - lattice_edges;
    assert!(diagonals <= cfg.cell_count());
    assert_eq!(a.component_count(), 1);

    let c = draw_grid_graph(cfg, ReplayToken { seed: 7, index: 3 });
    assert_ne!(a.vertices(), c.vertices());
}

#[test]
fn grid_jitter_is_bounded() {
    let cfg = GridCfg {
        rows: 6,
        cols: 6,
        spacing: 2.0,
        jitter: 5.0, // clamped to 0.2
        diagonal_prob: 1.0,
    };
    let g = draw_grid_graph(cfg, ReplayToken { seed: 1, index: 0 });
    for (k, v) in g.vertices().iter().enumerate() {
        let lattice = Vector2::new((k % 7) as f64 * 2.0, (k / 7) as f64 * 2.0);
        assert!((v - lattice).amax() <= 0.4 + 1e-12);
    }
    assert_eq!(g.edges().len(), 7 * 6 * 2 + 36);
}

#[test]
fn wheel_has_rim_and_spokes() {
    let g = wheel_graph(6, 2.0);
    assert_eq!(g.vertex_count(), 7);
    assert_eq!(g.undirected_edge_count(), 12);
    assert!((g.vertices()[0] - vector![2.0, 0.0]).norm() < 1e-12);
    assert_eq!(g.vertices()[6], Vector2::zeros());
}
