use crate::error::RegistryError;
use crate::math::Point3;

/// A planar polygon given by its boundary walk of vertex indices.
///
/// Counter-clockwise when seen from outside means outward-facing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face(Vec<usize>);

impl Face {
    /// Creates a face from its boundary walk.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The vertex indices in boundary order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the face has no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fan triangulation from the first corner: `(f0, fi, fi+1)`.
    ///
    /// A quad `[a, b, c, d]` yields `(a, b, c)` and `(a, c, d)`.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let apex = self.0.first().copied();
        self.0
            .windows(2)
            .skip(1)
            .filter_map(move |pair| apex.map(|a| [a, pair[0], pair[1]]))
    }
}

impl From<[usize; 4]> for Face {
    fn from(quad: [usize; 4]) -> Self {
        Self(quad.to_vec())
    }
}

/// How a consumer must derive the surface of a polyhedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyStrategy {
    /// Triangulate the convex hull of the vertex set.
    ConvexHull,
    /// Use the descriptor's own faces.
    Explicit,
}

/// A named polyhedron: its vertex set, its faces (empty when the hull is
/// enough), and whether it is convex.
///
/// Built once by a generator and immutable afterwards.
#[derive(Debug, Clone)]
pub struct PolyhedronDescriptor {
    id: String,
    name: String,
    description: String,
    vertices: Vec<Point3>,
    faces: Vec<Face>,
    convex: bool,
}

impl PolyhedronDescriptor {
    /// Creates a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDescriptor`] if the identifier is empty
    /// or not URL-safe, the name is empty, there are fewer than 4 vertices,
    /// or a face has fewer than 3 corners or an out-of-range index.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        vertices: Vec<Point3>,
        faces: Vec<Face>,
        convex: bool,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        let name = name.into();

        if id.is_empty() {
            return Err(RegistryError::InvalidDescriptor("empty identifier".into()));
        }
        if let Some(c) = id.chars().find(|&c| !is_url_safe(c)) {
            return Err(RegistryError::InvalidDescriptor(format!(
                "identifier {id:?} contains {c:?}, which is not URL-safe"
            )));
        }
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidDescriptor(format!(
                "{id}: empty display name"
            )));
        }
        if vertices.len() < 4 {
            return Err(RegistryError::InvalidDescriptor(format!(
                "{id}: {} vertices cannot bound a solid",
                vertices.len()
            )));
        }
        for (f, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(RegistryError::InvalidDescriptor(format!(
                    "{id}: face {f} has {} corners",
                    face.len()
                )));
            }
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertices.len()) {
                return Err(RegistryError::InvalidDescriptor(format!(
                    "{id}: face {f} references vertex {index} of {}",
                    vertices.len()
                )));
            }
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            vertices,
            faces,
            convex,
        })
    }

    /// Stable URL-safe identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-sentence description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The vertex set; face indices refer into it.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Explicit faces, empty for solids rendered through their hull.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Whether the solid is convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.convex
    }

    /// The surface derivation a consumer must use: the hull when the solid
    /// is convex or carries no faces, its own faces otherwise.
    #[must_use]
    pub fn strategy(&self) -> TopologyStrategy {
        if self.convex || self.faces.is_empty() {
            TopologyStrategy::ConvexHull
        } else {
            TopologyStrategy::Explicit
        }
    }
}

/// Unreserved URI characters (RFC 3986).
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}
