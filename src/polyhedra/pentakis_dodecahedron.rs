use tracing::debug;

use crate::descriptor::PolyhedronDescriptor;
use crate::error::Result;
use crate::math::{seeds, vector, Point3};

use super::Generator;

const ID: &str = "pentakis-dodecahedron";
const NAME: &str = "Pentakis Dodecahedron";
const DESCRIPTION: &str =
    "A Catalan solid with 60 isosceles triangle faces, dual of the truncated icosahedron";

/// Calibration of the pentakis dodecahedron.
#[derive(Debug, Clone, Copy)]
pub struct PentakisParams {
    /// Distance of each pyramid apex from the center. The base dodecahedron
    /// has circumradius `sqrt(3)`.
    pub apex_radius: f64,
}

impl Default for PentakisParams {
    fn default() -> Self {
        Self { apex_radius: 2.12 }
    }
}

/// A dodecahedron with a low pentagonal pyramid raised on each face.
///
/// 32 vertices: the 20 dodecahedron vertices (cube corners first), then the
/// 12 apexes.
#[derive(Debug, Clone, Default)]
pub struct PentakisDodecahedron {
    params: PentakisParams,
}

impl PentakisDodecahedron {
    /// Creates a generator with the given calibration.
    #[must_use]
    pub fn new(params: PentakisParams) -> Self {
        Self { params }
    }

    /// Generates the vertex set.
    #[must_use]
    pub fn generate(&self) -> Vec<Point3> {
        let mut vertices = seeds::dodecahedron_vertices();
        vertices.extend(
            seeds::dodecahedron_face_normals()
                .iter()
                .map(|n| vector::at_radius(n, self.params.apex_radius)),
        );
        debug!(id = ID, vertices = vertices.len(), "generated vertex set");
        vertices
    }
}

impl Generator for PentakisDodecahedron {
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
