use tracing::debug;

use crate::descriptor::{Face, PolyhedronDescriptor};
use crate::error::{Result, TopologyError};
use crate::math::{seeds, vector, Point3, Vector3, GOLDEN_RATIO};
use crate::topology::InferRhombi;

use super::Generator;

const ID: &str = "rhombic-hexecontahedron";
const NAME: &str = "Rhombic Hexecontahedron";
const DESCRIPTION: &str =
    "A non-convex stellation of the rhombic triacontahedron with 60 golden rhombus faces";

/// Edges of the dodecahedron the stellation is built on.
const SEED_EDGES: usize = 30;

/// Calibration of the rhombic hexecontahedron.
#[derive(Debug, Clone, Copy)]
pub struct RhombicParams {
    /// Factor applied to the dodecahedron vertices to get the outer
    /// three-fold points.
    pub outer_scale: f64,
    /// Slack when matching dodecahedron edges by length.
    pub seed_edge_tolerance: f64,
    /// Number of shortest vertex pairs taken as edges of the solid.
    pub edge_count: usize,
    /// Lengths closer than this count as equal when ordering edges.
    pub edge_tolerance: f64,
}

impl Default for RhombicParams {
    fn default() -> Self {
        Self {
            outer_scale: (GOLDEN_RATIO + 1.0) / 2.0,
            seed_edge_tolerance: 0.01,
            edge_count: 120,
            edge_tolerance: 1e-6,
        }
    }
}

/// A stellation of the rhombic triacontahedron: 60 golden rhombi, three
/// around each of 20 outer points.
///
/// 62 vertices in three families, in this order:
/// - 12 inner points on the five-fold axes, where five rhombi meet;
/// - 20 outer points, the dodecahedron vertices scaled out;
/// - 30 points at the dodecahedron edge midpoints, where four rhombi meet.
///
/// The solid is not convex, so its faces are reconstructed from the points.
#[derive(Debug, Clone, Default)]
pub struct RhombicHexecontahedron {
    params: RhombicParams,
}

impl RhombicHexecontahedron {
    /// Creates a generator with the given calibration.
    #[must_use]
    pub fn new(params: RhombicParams) -> Self {
        Self { params }
    }

    /// Computes the 62 vertices.
    ///
    /// The inner points sit at the dodecahedron's inradius scaled by
    /// `(3 - φ) / 2`, which is also the common edge length of the solid.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::SeedEdgeMismatch`] if the dodecahedron does
    /// not yield exactly 30 edges at the configured tolerance.
    pub fn vertices(&self) -> Result<Vec<Point3>> {
        let seed = seeds::dodecahedron_vertices();
        let edges = seeds::edges_with_length(
            &seed,
            2.0 / GOLDEN_RATIO,
            self.params.seed_edge_tolerance,
        );
        if edges.len() != SEED_EDGES {
            return Err(TopologyError::SeedEdgeMismatch {
                expected: SEED_EDGES,
                found: edges.len(),
            }
            .into());
        }

        let normals = seeds::dodecahedron_face_normals();
        let inner_radius = inradius(&seed, &normals) * (3.0 - GOLDEN_RATIO) / 2.0;

        let mut vertices: Vec<Point3> = normals
            .iter()
            .map(|n| vector::at_radius(n, inner_radius))
            .collect();
        vertices.extend(seed.iter().map(|p| Point3::from(p.coords * self.params.outer_scale)));
        vertices.extend(edges.iter().map(|&(a, b)| nalgebra::center(&seed[a], &seed[b])));
        Ok(vertices)
    }

    /// Generates the vertices and the 60 outward-facing rhombi.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed edges cannot be found or the rhombi do
    /// not close into a surface.
    pub fn generate(&self) -> Result<(Vec<Point3>, Vec<Face>)> {
        let vertices = self.vertices()?;
        let faces = InferRhombi::new(self.params.edge_count, self.params.edge_tolerance)
            .execute(&vertices)?;
        debug!(
            id = ID,
            vertices = vertices.len(),
            faces = faces.len(),
            "generated vertex set and faces"
        );
        Ok((vertices, faces))
    }
}

/// Distance from the center to the farthest face plane, taking each unit
/// normal's plane through the point that reaches furthest along it.
fn inradius(points: &[Point3], normals: &[Vector3]) -> f64 {
    normals
        .iter()
        .flat_map(|n| points.iter().map(move |p| p.coords.dot(n)))
        .fold(0.0, f64::max)
}

impl Generator for RhombicHexecontahedron {
    fn id(&self) -> &'static str {
        ID
    }

    fn descriptor(&self) -> Result<PolyhedronDescriptor> {
        let (vertices, faces) = self.generate()?;
        Ok(PolyhedronDescriptor::new(
            ID,
            NAME,
            DESCRIPTION,
            vertices,
            faces,
            false,
        )?)
    }
}
