pub mod descriptor;
pub mod error;
pub mod math;
pub mod polyhedra;
pub mod registry;
pub mod tessellation;
pub mod topology;

pub use descriptor::{Face, PolyhedronDescriptor, TopologyStrategy};
pub use error::{HexecontahedraError, Result};
pub use registry::Registry;
