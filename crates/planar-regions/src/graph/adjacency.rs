//! Symmetric incidence matrix consumed half-edge by half-edge during tracing.
//!
//! Row `i`, column `j` is `true` while the directed half-edge `i → j` has not
//! yet been used to advance a face boundary. Each physical edge therefore
//! carries two independent flags, one per adjacent face.

use std::collections::VecDeque;

use super::types::GraphError;

/// Dense `n × n` boolean incidence structure (row-major).
///
/// Invariants:
/// - Symmetric right after `build`.
/// - Only `consume` clears entries; nothing sets them again, so a matrix is
///   single-use and is dropped once every half-edge has been consumed.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// O(V² + E): allocate the matrix, then mark both directions of every edge.
    pub fn build(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let n = vertex_count;
        let mut cells = vec![false; n * n];
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
            cells[a * n + b] = true;
            cells[b * n + a] = true;
        }
        Ok(Self { n, cells })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_available(&self, from: usize, to: usize) -> bool {
        from < self.n && to < self.n && self.cells[from * self.n + to]
    }

    /// Mark `from → to` as used. Idempotent; out-of-range pairs are ignored.
    #[inline]
    pub fn consume(&mut self, from: usize, to: usize) {
        if from < self.n && to < self.n {
            self.cells[from * self.n + to] = false;
        }
    }

    /// O(V): vertices `w` with `v → w` still available, `w != excluding`,
    /// in ascending index order.
    pub fn neighbors_of(&self, v: usize, excluding: Option<usize>) -> Vec<usize> {
        if v >= self.n {
            return Vec::new();
        }
        let row = &self.cells[v * self.n..(v + 1) * self.n];
        row.iter()
            .enumerate()
            .filter(|&(w, &open)| open && Some(w) != excluding)
            .map(|(w, _)| w)
            .collect()
    }

    /// O(V²): first available half-edge in row-major order.
    pub fn first_available(&self) -> Option<(usize, usize)> {
        let k = self.cells.iter().position(|&open| open)?;
        Some((k / self.n, k % self.n))
    }

    /// O(C): a still-available half-edge running backwards along `ring`
    /// (`ring[i] → ring[i-1]`, cyclically), i.e. the twin side of an edge the
    /// just-traced face used. Resuming here keeps consecutive traces local.
    pub fn available_on_ring(&self, ring: &[usize]) -> Option<(usize, usize)> {
        let len = ring.len();
        (0..len).find_map(|i| {
            let from = ring[i];
            let to = ring[if i == 0 { len - 1 } else { i - 1 }];
            self.is_available(from, to).then_some((from, to))
        })
    }

    /// Consume both half-edges of every edge that hangs off a degree-1 vertex,
    /// repeating until no such vertex remains. Trees and pendant chains bound
    /// no face; removing them leaves every face region unchanged and keeps
    /// walks from stalling at a dead end. Returns the number of edges removed.
    pub fn prune_dangling(&mut self) -> usize {
        let n = self.n;
        let mut degree: Vec<usize> = (0..n)
            .map(|v| self.cells[v * n..(v + 1) * n].iter().filter(|&&open| open).count())
            .collect();
        let mut queue: VecDeque<usize> = (0..n).filter(|&v| degree[v] == 1).collect();
        let mut removed = 0;
        while let Some(v) = queue.pop_front() {
            if degree[v] != 1 {
                continue;
            }
            let Some(w) = (0..n).find(|&w| self.cells[v * n + w]) else {
                continue;
            };
            self.consume(v, w);
            self.consume(w, v);
            degree[v] = 0;
            degree[w] -= 1;
            removed += 1;
            if degree[w] == 1 {
                queue.push_back(w);
            }
        }
        removed
    }

    /// Count of half-edges not yet consumed.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.first_available().is_none()
    }
}
