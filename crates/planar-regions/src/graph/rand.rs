//! Sample planar graphs: jittered grids (random) and wheels (deterministic).
//!
//! Model
//! - Grid: `(rows+1) × (cols+1)` lattice points with bounded jitter, all
//!   horizontal and vertical lattice edges, and per cell at most one diagonal.
//!   Jitter is clamped to `0.2 × spacing`, which keeps every cell convex so
//!   diagonals never cross lattice edges; the result is planar and connected.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `PlanarGraph`, property tests in `faces::tests`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::PlanarGraph;

/// Jittered grid configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub rows: usize,
    pub cols: usize,
    /// Lattice spacing (> 0).
    pub spacing: f64,
    /// Jitter amplitude as a fraction of `spacing`. Clamped to [0, 0.2].
    pub jitter: f64,
    /// Probability that a cell receives a diagonal. Clamped to [0, 1].
    pub diagonal_prob: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            spacing: 1.0,
            jitter: 0.15,
            diagonal_prob: 0.5,
        }
    }
}

impl GridCfg {
    /// Lower bound on interior faces: one per cell, each diagonal adds one.
    pub fn cell_count(&self) -> usize {
        self.rows.max(1) * self.cols.max(1)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a jittered grid graph. Rows/cols below 1 are raised to 1.
pub fn draw_grid_graph(cfg: GridCfg, tok: ReplayToken) -> PlanarGraph {
    let mut rng = tok.to_std_rng();
    let rows = cfg.rows.max(1);
    let cols = cfg.cols.max(1);
    let h = if cfg.spacing.is_finite() && cfg.spacing > 0.0 {
        cfg.spacing
    } else {
        1.0
    };
    let amp = cfg.jitter.clamp(0.0, 0.2) * h;
    let p_diag = cfg.diagonal_prob.clamp(0.0, 1.0);
    let id = |i: usize, j: usize| i * (cols + 1) + j;

    let mut vertices = Vec::with_capacity((rows + 1) * (cols + 1));
    for i in 0..=rows {
        for j in 0..=cols {
            let dx = (rng.gen::<f64>() * 2.0 - 1.0) * amp;
            let dy = (rng.gen::<f64>() * 2.0 - 1.0) * amp;
            vertices.push(Vector2::new(j as f64 * h + dx, i as f64 * h + dy));
        }
    }
    let mut edges = Vec::new();
    for i in 0..=rows {
        for j in 0..cols {
            edges.push((id(i, j), id(i, j + 1)));
        }
    }
    for i in 0..rows {
        for j in 0..=cols {
            edges.push((id(i, j), id(i + 1, j)));
        }
    }
    for i in 0..rows {
        for j in 0..cols {
            if rng.gen::<f64>() < p_diag {
                if rng.gen::<bool>() {
                    edges.push((id(i, j), id(i + 1, j + 1)));
                } else {
                    edges.push((id(i, j + 1), id(i + 1, j)));
                }
            }
        }
    }
    // Lattice construction satisfies every `PlanarGraph` invariant.
    PlanarGraph::from_parts_unchecked(vertices, edges)
}

/// Regular `n`-gon (n ≥ 3, smaller values are raised) around a center vertex
/// with `n` spokes. Rim vertices are `0..n` counterclockwise from angle 0; the
/// center is vertex `n`. Yields exactly `n` interior triangles.
pub fn wheel_graph(n: usize, radius: f64) -> PlanarGraph {
    let n = n.max(3);
    let r = if radius.is_finite() && radius > 0.0 {
        radius
    } else {
        1.0
    };
    let mut vertices: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = std::f64::consts::TAU * k as f64 / n as f64;
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect();
    vertices.push(Vector2::zeros());
    let mut edges = Vec::with_capacity(2 * n);
    for k in 0..n {
        edges.push((k, (k + 1) % n));
    }
    for k in 0..n {
        edges.push((k, n));
    }
    PlanarGraph::from_parts_unchecked(vertices, edges)
}
