mod build_mesh;
mod convex_hull;

pub use build_mesh::BuildMesh;
pub use convex_hull::ConvexHull;

use crate::error::TessellationError;
use crate::math::{Point3, Vector3};

/// Parameters controlling mesh normalization.
#[derive(Debug, Clone, Copy)]
pub struct MeshParams {
    /// Bounding-sphere radius of the finished mesh.
    pub target_radius: f64,
}

impl Default for MeshParams {
    /// The single-shape detail view.
    fn default() -> Self {
        Self { target_radius: 1.5 }
    }
}

impl MeshParams {
    /// The smaller size used for gallery thumbnails.
    #[must_use]
    pub fn preview() -> Self {
        Self { target_radius: 1.2 }
    }

    /// Checks that the parameters can produce a mesh.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] if the target radius is
    /// not a positive finite number.
    pub fn validate(&self) -> Result<(), TessellationError> {
        if self.target_radius.is_finite() && self.target_radius > 0.0 {
            Ok(())
        } else {
            Err(TessellationError::InvalidParameters(format!(
                "target radius must be positive and finite, got {}",
                self.target_radius
            )))
        }
    }
}

/// A triangle mesh ready for display.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Unit vertex normals, one per vertex.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Volume enclosed by the mesh, positive when the triangles face
    /// outward.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| self.vertices[i as usize].coords);
                a.dot(&b.cross(&c))
            })
            .sum::<f64>()
            / 6.0
    }
}
