use tracing::debug;

use crate::descriptor::PolyhedronDescriptor;
use crate::error::Result;
use crate::math::{seeds, vector, Point3};

use super::Generator;

const ID: &str = "deltoidal-hexecontahedron";
const NAME: &str = "Deltoidal Hexecontahedron";
const DESCRIPTION: &str =
    "A Catalan solid with 60 kite-shaped faces, dual of the small rhombicosidodecahedron";

/// Radii of the three vertex orbits of the deltoidal hexecontahedron.
///
/// Each kite joins one vertex of every orbit plus a second two-fold vertex;
/// the defaults are the radii at which those four corners are coplanar.
#[derive(Debug, Clone, Copy)]
pub struct DeltoidalParams {
    /// Radius of the 12 vertices where five kites meet.
    pub five_fold_radius: f64,
    /// Radius of the 20 vertices where three kites meet.
    pub three_fold_radius: f64,
    /// Radius of the 30 vertices where four kites meet.
    pub two_fold_radius: f64,
}

impl Default for DeltoidalParams {
    fn default() -> Self {
        Self {
            five_fold_radius: 1.0,
            three_fold_radius: 0.957_141_344_014_303_4,
            two_fold_radius: 0.974_759_088_698_725_7,
        }
    }
}

/// The dual of the small rhombicosidodecahedron.
///
/// 62 vertices on the symmetry axes of the icosahedron: 12 five-fold, then
/// 20 three-fold, then 30 two-fold.
#[derive(Debug, Clone, Default)]
pub struct DeltoidalHexecontahedron {
    params: DeltoidalParams,
}

impl DeltoidalHexecontahedron {
    /// Creates a generator with the given calibration.
    #[must_use]
    pub fn new(params: DeltoidalParams) -> Self {
        Self { params }
    }

    /// Generates the vertex set.
    #[must_use]
    pub fn generate(&self) -> Vec<Point3> {
        let five_fold: Vec<_> = seeds::icosahedron_vertices()
            .iter()
            .map(|v| v.coords.normalize())
            .collect();
        let orbits = [
            (five_fold, self.params.five_fold_radius),
            (
                seeds::icosahedron_face_normals(),
                self.params.three_fold_radius,
            ),
            (seeds::icosahedron_edge_axes(), self.params.two_fold_radius),
        ];

        let mut vertices = Vec::with_capacity(62);
        for (axes, radius) in &orbits {
            vertices.extend(axes.iter().map(|axis| vector::at_radius(axis, *radius)));
        }
        debug!(id = ID, vertices = vertices.len(), "generated vertex set");
        vertices
    }
}

impl Generator for DeltoidalHexecontahedron {
    fn id(&self) -> &'static str {
        ID
    }

    fn descriptor(&self) -> Result<PolyhedronDescriptor> {
        Ok(PolyhedronDescriptor::new(
            ID,
            NAME,
            DESCRIPTION,
            self.generate(),
            Vec::new(),
            true,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyhedra::testing::{assert_all_extreme, triangles_per_hull_plane};

    #[test]
    fn has_sixty_two_vertices() {
        let vertices = DeltoidalHexecontahedron::default().generate();
        assert_eq!(vertices.len(), 62);
        assert!(vector::spans_3d(&vertices));
    }

    #[test]
    fn hull_keeps_every_vertex() {
        assert_all_extreme(&DeltoidalHexecontahedron::default().generate());
    }

    #[test]
    fn hull_faces_are_sixty_planar_kites() {
        let counts = triangles_per_hull_plane(&DeltoidalHexecontahedron::default().generate());
        assert_eq!(counts.len(), 60);
        assert!(counts.iter().all(|&n| n == 2));
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = DeltoidalHexecontahedron::default();
        assert_eq!(generator.generate(), generator.generate());
    }
}
