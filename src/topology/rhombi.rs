use std::collections::HashSet;

use tracing::debug;

use crate::descriptor::Face;
use crate::error::TopologyError;
use crate::math::{vector, Point3};

use super::{validate, EdgeGraph};

/// Reconstructs the quadrilateral faces of a solid from its bare vertices.
///
/// The `edge_count` shortest vertex pairs are taken as edges, and every
/// chordless 4-cycle of that graph becomes a face, oriented so its normal
/// points away from the origin.
#[derive(Debug, Clone, Copy)]
pub struct InferRhombi {
    edge_count: usize,
    tolerance: f64,
}

impl Default for InferRhombi {
    /// Sixty rhombi on 120 edges.
    fn default() -> Self {
        Self::new(120, 1e-6)
    }
}

impl InferRhombi {
    /// Creates a new `InferRhombi` operation.
    ///
    /// `tolerance` decides which pair lengths count as equal when the edge
    /// cutoff has to break a tie.
    #[must_use]
    pub fn new(edge_count: usize, tolerance: f64) -> Self {
        Self {
            edge_count,
            tolerance,
        }
    }

    /// Executes the reconstruction.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotEnoughPairs`] if there are fewer vertex
    /// pairs than edges requested, or a validation error if the quads do not
    /// close into a surface (see [`validate::closed_surface`]).
    pub fn execute(&self, vertices: &[Point3]) -> Result<Vec<Face>, TopologyError> {
        let graph = EdgeGraph::shortest(vertices, self.edge_count, self.tolerance)?;

        let mut seen = HashSet::new();
        let mut faces = Vec::new();
        for quad in four_cycles(&graph) {
            let mut key = quad;
            key.sort_unstable();
            if seen.insert(key) {
                faces.push(orient(quad, vertices));
            }
        }
        debug!(
            edges = graph.len(),
            faces = faces.len(),
            "reconstructed quads from edge graph"
        );

        validate::closed_surface(&faces, vertices.len(), self.edge_count)?;
        Ok(faces)
    }
}

/// Every 4-cycle `a-b-c-d` without a diagonal edge, once per starting edge.
fn four_cycles(graph: &EdgeGraph) -> Vec<[usize; 4]> {
    let mut cycles = Vec::new();
    for edge in graph.edges() {
        let (a, b) = (edge.a, edge.b);
        for &c in graph.neighbors(b) {
            if c == a || graph.contains(a, c) {
                continue;
            }
            for &d in graph.neighbors(a) {
                if d == b || d == c || graph.contains(b, d) || !graph.contains(c, d) {
                    continue;
                }
                cycles.push([a, b, c, d]);
            }
        }
    }
    cycles
}

/// Orders a quad so that `(b - a) x (d - a)` points away from the origin.
fn orient(quad: [usize; 4], vertices: &[Point3]) -> Face {
    let [a, b, c, d] = quad;
    let corners = quad.map(|i| vertices[i]);
    let centroid = vector::centroid(&corners);
    let normal = (vertices[b] - vertices[a]).cross(&(vertices[d] - vertices[a]));
    if normal.dot(&centroid.coords) > 0.0 {
        Face::from([a, b, c, d])
    } else {
        Face::from([a, d, c, b])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::math::seeds;

    fn directed_edges(faces: &[Face]) -> Vec<(usize, usize)> {
        faces.iter().flat_map(validate::boundary).collect()
    }

    #[test]
    fn cube_yields_its_six_faces() {
        let corners = seeds::cube_corners();
        let faces = InferRhombi::new(12, 1e-6).execute(&corners).unwrap();
        assert_eq!(faces.len(), 6);
        assert!(faces.iter().all(|f| f.len() == 4));
    }

    #[test]
    fn cube_faces_point_outward() {
        let corners = seeds::cube_corners();
        let faces = InferRhombi::new(12, 1e-6).execute(&corners).unwrap();
        for face in &faces {
            let quad: Vec<Point3> = face.indices().iter().map(|&i| corners[i]).collect();
            let normal = (quad[1] - quad[0]).cross(&(quad[3] - quad[0]));
            assert!(normal.dot(&vector::centroid(&quad).coords) > 0.0);
        }
        let directed = directed_edges(&faces);
        let unique: HashSet<_> = directed.iter().copied().collect();
        assert_eq!(directed.len(), 24);
        assert_eq!(unique.len(), 24);
    }

    #[test]
    fn octahedron_does_not_close() {
        // The only chordless 4-cycles of an octahedron are its three
        // equators.
        let octahedron = seeds::cyclic_family([0.0, 0.0, 1.0]);
        let result = InferRhombi::new(12, 1e-6).execute(&octahedron);
        assert!(matches!(
            result,
            Err(TopologyError::FaceCountMismatch {
                expected: 6,
                found: 3
            })
        ));
    }

    #[test]
    fn too_few_vertices() {
        let result = InferRhombi::default().execute(&seeds::cube_corners());
        assert!(matches!(
            result,
            Err(TopologyError::NotEnoughPairs {
                requested: 120,
                available: 28
            })
        ));
    }
}
