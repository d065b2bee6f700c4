//! Generators for the five hexecontahedra.
//!
//! Four are convex Catalan solids whose faces are left to the convex hull;
//! the rhombic hexecontahedron is a stellation and carries its own faces.

mod deltoidal_hexecontahedron;
mod pentagonal_hexecontahedron;
mod pentakis_dodecahedron;
mod rhombic_hexecontahedron;
mod triakis_icosahedron;

pub use deltoidal_hexecontahedron::{DeltoidalHexecontahedron, DeltoidalParams};
pub use pentagonal_hexecontahedron::{PentagonalHexecontahedron, PentagonalParams};
pub use pentakis_dodecahedron::{PentakisDodecahedron, PentakisParams};
pub use rhombic_hexecontahedron::{RhombicHexecontahedron, RhombicParams};
pub use triakis_icosahedron::{TriakisIcosahedron, TriakisParams};

use crate::descriptor::PolyhedronDescriptor;
use crate::error::Result;

/// A source of one named polyhedron.
pub trait Generator {
    /// The stable identifier of the generated solid.
    fn id(&self) -> &'static str;

    /// Generates the solid and wraps it in a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the result is not a valid
    /// descriptor.
    fn descriptor(&self) -> Result<PolyhedronDescriptor>;
}
