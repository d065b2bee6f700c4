use tracing::debug;

use crate::descriptor::{Face, PolyhedronDescriptor, TopologyStrategy};
use crate::error::{GeometryError, Result, TessellationError};
use crate::math::bounds::{self, Aabb};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{ConvexHull, MeshParams, TriangleMesh};

/// Turns a polyhedron descriptor into a centered, scaled triangle mesh.
pub struct BuildMesh<'a> {
    descriptor: &'a PolyhedronDescriptor,
    params: MeshParams,
}

impl<'a> BuildMesh<'a> {
    /// Creates a new `BuildMesh` operation.
    #[must_use]
    pub fn new(descriptor: &'a PolyhedronDescriptor, params: MeshParams) -> Self {
        Self { descriptor, params }
    }

    /// Executes the operation.
    ///
    /// Convex or faceless solids are triangulated through their convex hull;
    /// the others have their own faces fan-split. The result is moved so its
    /// bounding box is centered on the origin and scaled so its farthest
    /// vertex sits at the target radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the hull cannot be
    /// built, or a face references a missing vertex.
    pub fn execute(&self) -> Result<TriangleMesh> {
        self.params.validate()?;

        let strategy = self.descriptor.strategy();
        debug!(id = self.descriptor.id(), ?strategy, "building mesh");
        let (mut vertices, indices) = match strategy {
            TopologyStrategy::ConvexHull => {
                let hull = ConvexHull::compute(self.descriptor.vertices())?;
                (hull.vertices, hull.triangles)
            }
            TopologyStrategy::Explicit => {
                let vertices = self.descriptor.vertices().to_vec();
                let indices = fan_split(self.descriptor.faces(), vertices.len())?;
                (vertices, indices)
            }
        };

        center_and_scale(&mut vertices, self.params.target_radius)?;
        let normals = vertex_normals(&vertices, &indices);
        debug!(
            id = self.descriptor.id(),
            vertices = vertices.len(),
            triangles = indices.len(),
            "built mesh"
        );

        Ok(TriangleMesh {
            vertices,
            normals,
            indices,
        })
    }
}

/// Fan-triangulates every face, checking each index against `vertex_count`.
fn fan_split(faces: &[Face], vertex_count: usize) -> Result<Vec<[u32; 3]>> {
    let mut indices = Vec::with_capacity(faces.iter().map(|f| f.len().saturating_sub(2)).sum());
    for (f, face) in faces.iter().enumerate() {
        let out_of_range = |index: usize| TessellationError::FaceIndexOutOfRange {
            face: f,
            index,
            vertex_count,
        };
        for &index in face.indices() {
            if index >= vertex_count {
                return Err(out_of_range(index).into());
            }
        }
        for triangle in face.triangles() {
            let mut corners = [0_u32; 3];
            for (slot, &index) in corners.iter_mut().zip(&triangle) {
                *slot = u32::try_from(index).map_err(|_| out_of_range(index))?;
            }
            indices.push(corners);
        }
    }
    Ok(indices)
}

/// Centers `vertices` on their bounding box and scales them so the farthest
/// one lies at `target_radius`.
fn center_and_scale(vertices: &mut [Point3], target_radius: f64) -> Result<()> {
    let aabb = Aabb::from_points(vertices)
        .ok_or_else(|| GeometryError::Degenerate("mesh has no vertices".into()))?;
    let center = aabb.center().coords;
    for v in vertices.iter_mut() {
        *v -= center;
    }

    let radius = bounds::bounding_radius(vertices, &Point3::origin());
    if radius < TOLERANCE {
        return Err(GeometryError::Degenerate("mesh collapses to a point".into()).into());
    }
    let scale = target_radius / radius;
    for v in vertices.iter_mut() {
        v.coords *= scale;
    }
    Ok(())
}

/// Area-weighted vertex normals.
fn vertex_normals(vertices: &[Point3], indices: &[[u32; 3]]) -> Vec<Vector3> {
    let mut normals = vec![Vector3::zeros(); vertices.len()];
    for triangle in indices {
        let [a, b, c] = triangle.map(|i| i as usize);
        // Twice the triangle's area, along its normal.
        let weighted = (vertices[b] - vertices[a]).cross(&(vertices[c] - vertices[a]));
        for i in [a, b, c] {
            normals[i] += weighted;
        }
    }
    for n in &mut normals {
        *n = n.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros);
    }
    normals
}
