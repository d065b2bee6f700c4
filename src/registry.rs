use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::info;

use crate::descriptor::PolyhedronDescriptor;
use crate::error::{RegistryError, Result};
use crate::polyhedra::{
    DeltoidalHexecontahedron, Generator, PentagonalHexecontahedron, PentakisDodecahedron,
    RhombicHexecontahedron, TriakisIcosahedron,
};

/// Identifier-keyed collection of polyhedra, iterated in registration order.
///
/// Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    shapes: IndexMap<String, PolyhedronDescriptor>,
}

impl Registry {
    /// The five built-in solids in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in generator fails.
    pub fn builtin() -> Result<Self> {
        Self::register(&[
            &PentakisDodecahedron::default(),
            &DeltoidalHexecontahedron::default(),
            &PentagonalHexecontahedron::default(),
            &TriakisIcosahedron::default(),
            &RhombicHexecontahedron::default(),
        ])
    }

    /// Runs every generator and registers its descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first generator error, or
    /// [`RegistryError::DuplicateIdentifier`] if two generators share an
    /// identifier. No partial registry is returned.
    pub fn register(generators: &[&dyn Generator]) -> Result<Self> {
        let descriptors = generators
            .iter()
            .map(|g| g.descriptor())
            .collect::<Result<Vec<_>>>()?;
        Self::from_descriptors(descriptors)
    }

    /// Registers ready-made descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if two descriptors share
    /// an identifier.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = PolyhedronDescriptor>,
    ) -> Result<Self> {
        let mut shapes = IndexMap::new();
        for descriptor in descriptors {
            match shapes.entry(descriptor.id().to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(RegistryError::DuplicateIdentifier(entry.key().clone()).into());
                }
                Entry::Vacant(entry) => {
                    entry.insert(descriptor);
                }
            }
        }
        info!(shapes = shapes.len(), "built polyhedron registry");
        Ok(Self { shapes })
    }

    /// Looks up a polyhedron by identifier.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&PolyhedronDescriptor> {
        self.shapes.get(id)
    }

    /// Iterates over the descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PolyhedronDescriptor> {
        self.shapes.values()
    }

    /// Iterates over the identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    /// Number of registered polyhedra.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HexecontahedraError;
    use crate::math::seeds;
    use crate::polyhedra::{PentakisParams, TriakisParams};

    #[test]
    fn builtin_order_and_lookup() {
        let registry = Registry::builtin().unwrap();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "pentakis-dodecahedron",
                "deltoidal-hexecontahedron",
                "pentagonal-hexecontahedron",
                "triakis-icosahedron",
                "rhombic-hexecontahedron",
            ]
        );
        for id in ids {
            assert_eq!(registry.lookup(id).unwrap().id(), id);
        }
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }

    #[test]
    fn builtin_vertex_counts() {
        let registry = Registry::builtin().unwrap();
        let counts: Vec<usize> = registry.iter().map(|d| d.vertices().len()).collect();
        assert_eq!(counts, vec![32, 62, 92, 32, 62]);
    }

    #[test]
    fn unknown_identifier_is_none() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.lookup("nonexistent").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn duplicate_generator_is_rejected() {
        let first = PentakisDodecahedron::default();
        let second = PentakisDodecahedron::new(PentakisParams { apex_radius: 2.5 });
        let result = Registry::register(&[&first, &TriakisIcosahedron::default(), &second]);
        assert!(matches!(
            result,
            Err(HexecontahedraError::Registry(RegistryError::DuplicateIdentifier(id)))
                if id == "pentakis-dodecahedron"
        ));
    }

    #[test]
    fn duplicate_descriptor_is_rejected() {
        let make = || {
            PolyhedronDescriptor::new("cube", "Cube", "", seeds::cube_corners(), vec![], true)
                .unwrap()
        };
        let result = Registry::from_descriptors([make(), make()]);
        assert!(matches!(
            result,
            Err(HexecontahedraError::Registry(
                RegistryError::DuplicateIdentifier(_)
            ))
        ));
    }

    #[test]
    fn invalid_descriptor_fails_registration() {
        let descriptor = PolyhedronDescriptor::new(
            "not a url",
            "Cube",
            "",
            seeds::cube_corners(),
            vec![],
            true,
        );
        assert!(matches!(
            descriptor,
            Err(RegistryError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn custom_calibration_registers() {
        let triakis = TriakisIcosahedron::new(TriakisParams { apex_radius: 1.7 });
        let registry = Registry::register(&[&triakis]).unwrap();
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["triakis-icosahedron"]);
    }

    #[test]
    fn empty_registry() {
        let registry = Registry::from_descriptors(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
