use std::collections::BTreeMap;

use crate::descriptor::Face;
use crate::error::TopologyError;

use super::edge_key;

/// Checks that `faces` close into a two-manifold built on `edge_count` edges.
///
/// # Errors
///
/// - [`TopologyError::FaceCountMismatch`] unless there are `edge_count / 2`
///   faces (each quad has four edges, each edge two quads).
/// - [`TopologyError::NonManifoldEdge`] for the first edge, in index order,
///   not shared by exactly two faces.
/// - [`TopologyError::UnderusedVertex`] for the first vertex in fewer than
///   three faces.
pub fn closed_surface(
    faces: &[Face],
    vertex_count: usize,
    edge_count: usize,
) -> Result<(), TopologyError> {
    let expected = edge_count / 2;
    if faces.len() != expected {
        return Err(TopologyError::FaceCountMismatch {
            expected,
            found: faces.len(),
        });
    }

    let uses = edge_uses(faces);
    if let Some((&(a, b), &count)) = uses.iter().find(|(_, &n)| n != 2) {
        return Err(TopologyError::NonManifoldEdge { a, b, uses: count });
    }

    let incidence = vertex_incidence(faces, vertex_count);
    if let Some((vertex, &count)) = incidence.iter().enumerate().find(|(_, &n)| n < 3) {
        return Err(TopologyError::UnderusedVertex {
            vertex,
            faces: count,
        });
    }
    Ok(())
}

/// How many faces use each undirected boundary edge, keyed by `(low, high)`.
#[must_use]
pub fn edge_uses(faces: &[Face]) -> BTreeMap<(usize, usize), usize> {
    let mut uses = BTreeMap::new();
    for face in faces {
        for (i, j) in boundary(face) {
            *uses.entry(edge_key(i, j)).or_insert(0) += 1;
        }
    }
    uses
}

/// Number of faces touching each vertex.
#[must_use]
pub fn vertex_incidence(faces: &[Face], vertex_count: usize) -> Vec<usize> {
    let mut incidence = vec![0; vertex_count];
    for face in faces {
        for &v in face.indices() {
            if let Some(n) = incidence.get_mut(v) {
                *n += 1;
            }
        }
    }
    incidence
}

/// The directed boundary edges of a face, closing back to its first corner.
pub fn boundary(face: &Face) -> impl Iterator<Item = (usize, usize)> + '_ {
    let corners = face.indices();
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&i, &j)| (i, j))
}
