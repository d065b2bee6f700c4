pub mod bounds;
pub mod seeds;
pub mod symmetry;
pub mod vector;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// The golden ratio `(1 + sqrt(5)) / 2`.
///
/// Written out to full `f64` precision so that the edge-length identities the
/// generators rely on hold to well below `1e-9`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;
