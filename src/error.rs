use thiserror::Error;

/// Top-level error type for the hexecontahedra crate.
#[derive(Debug, Error)]
pub enum HexecontahedraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while reconstructing face topology from a point cloud.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("seed solid has {found} edges, expected {expected}")]
    SeedEdgeMismatch { expected: usize, found: usize },

    #[error("requested {requested} edges but only {available} vertex pairs exist")]
    NotEnoughPairs { requested: usize, available: usize },

    #[error("reconstructed {found} faces, expected {expected}")]
    FaceCountMismatch { expected: usize, found: usize },

    #[error("edge ({a}, {b}) is shared by {uses} faces, expected 2")]
    NonManifoldEdge { a: usize, b: usize, uses: usize },

    #[error("vertex {vertex} touches {faces} faces, expected at least 3")]
    UnderusedVertex { vertex: usize, faces: usize },
}

/// Errors raised while assembling descriptors into a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate polyhedron identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

/// Errors related to mesh building.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid mesh parameters: {0}")]
    InvalidParameters(String),

    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("convex hull failed: {0}")]
    HullFailed(String),
}

/// Convenience type alias for results using [`HexecontahedraError`].
pub type Result<T> = std::result::Result<T, HexecontahedraError>;
