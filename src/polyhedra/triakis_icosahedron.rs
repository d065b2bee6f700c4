use tracing::debug;

use crate::descriptor::PolyhedronDescriptor;
use crate::error::Result;
use crate::math::{seeds, vector, Point3};

use super::Generator;

const ID: &str = "triakis-icosahedron";
const NAME: &str = "Triakis Icosahedron";
const DESCRIPTION: &str =
    "A Catalan solid with 60 isosceles triangle faces, dual of the truncated dodecahedron";

/// Calibration of the triakis icosahedron.
#[derive(Debug, Clone, Copy)]
pub struct TriakisParams {
    /// Distance of each pyramid apex from the center. The base icosahedron
    /// has circumradius `sqrt(φ + 2)`, about 1.902.
    pub apex_radius: f64,
}

impl Default for TriakisParams {
    fn default() -> Self {
        Self {
            apex_radius: 1.625_960_793_695_355_3,
        }
    }
}

/// An icosahedron with a triangular pyramid raised on each face.
///
/// 32 vertices: the 12 icosahedron vertices, then the 20 apexes.
#[derive(Debug, Clone, Default)]
pub struct TriakisIcosahedron {
    params: TriakisParams,
}

impl TriakisIcosahedron {
    /// Creates a generator with the given calibration.
    #[must_use]
    pub fn new(params: TriakisParams) -> Self {
        Self { params }
    }

    /// Generates the vertex set.
    #[must_use]
    pub fn generate(&self) -> Vec<Point3> {
        let mut vertices = seeds::icosahedron_vertices();
        vertices.extend(
            seeds::icosahedron_face_normals()
                .iter()
                .map(|n| vector::at_radius(n, self.params.apex_radius)),
        );
        debug!(id = ID, vertices = vertices.len(), "generated vertex set");
        vertices
    }
}

impl Generator for TriakisIcosahedron {
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
