use tracing::debug;

use crate::descriptor::PolyhedronDescriptor;
use crate::error::Result;
use crate::math::symmetry::RotationGroup;
use crate::math::{vector, Point3, Vector3, GOLDEN_RATIO};

use super::Generator;

const ID: &str = "pentagonal-hexecontahedron";
const NAME: &str = "Pentagonal Hexecontahedron";
const DESCRIPTION: &str =
    "A chiral Catalan solid with 60 irregular pentagonal faces, dual of the snub dodecahedron";

/// Seeds of the three vertex orbits of the pentagonal hexecontahedron.
#[derive(Debug, Clone, Copy)]
pub struct PentagonalParams {
    /// Radius of the 12 vertices on the five-fold axes.
    pub five_fold_radius: f64,
    /// Radius of the 20 vertices on the three-fold axes.
    pub three_fold_radius: f64,
    /// One of the 60 vertices off every symmetry axis. It lies on no mirror
    /// plane of the icosahedron, which is what makes the solid chiral.
    pub twisted_apex: Point3,
}

impl Default for PentagonalParams {
    fn default() -> Self {
        Self {
            five_fold_radius: 1.0,
            three_fold_radius: 0.953_697_852_179_738_2,
            twisted_apex: Point3::new(
                0.371_602_384_173_992_4,
                0.255_727_563_365_811_26,
                0.840_270_596_095_945_3,
            ),
        }
    }
}

/// The dual of the snub dodecahedron, in one fixed handedness.
///
/// 92 vertices, the orbits of three seeds under the icosahedral rotation
/// group: 12 five-fold, then 20 three-fold, then 60 twisted.
#[derive(Debug, Clone, Default)]
pub struct PentagonalHexecontahedron {
    params: PentagonalParams,
}

impl PentagonalHexecontahedron {
    /// Creates a generator with the given calibration.
    #[must_use]
    pub fn new(params: PentagonalParams) -> Self {
        Self { params }
    }

    /// Generates the vertex set.
    #[must_use]
    pub fn generate(&self) -> Vec<Point3> {
        let group = RotationGroup::icosahedral();
        let five_fold = Vector3::new(0.0, 1.0, GOLDEN_RATIO).normalize();
        let three_fold = Vector3::new(1.0, 1.0, 1.0).normalize();
        let seeds = [
            vector::at_radius(&five_fold, self.params.five_fold_radius),
            vector::at_radius(&three_fold, self.params.three_fold_radius),
            self.params.twisted_apex,
        ];

        let vertices: Vec<Point3> = seeds.iter().flat_map(|s| group.orbit(s)).collect();
        debug!(id = ID, vertices = vertices.len(), "generated vertex set");
        vertices
    }
}

impl Generator for PentagonalHexecontahedron {
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
