//! Face reconstruction for solids that are only known as a point cloud.
//!
//! The pipeline is: pick the shortest vertex pairs as edges
//! ([`EdgeGraph`]), close them into quads ([`InferRhombi`]), then check that
//! the quads form a closed two-manifold ([`validate`]).

pub mod edge_graph;
pub mod rhombi;
pub mod validate;

pub use edge_graph::EdgeGraph;
pub use rhombi::InferRhombi;

/// An undirected edge between two vertex indices, with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Lower vertex index.
    pub a: usize,
    /// Higher vertex index.
    pub b: usize,
    /// Distance between the two vertices.
    pub length: f64,
}

impl Edge {
    /// The ordered `(a, b)` key of the edge.
    #[must_use]
    pub fn key(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Orders an index pair so the smaller index comes first.
#[must_use]
pub fn edge_key(i: usize, j: usize) -> (usize, usize) {
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}
