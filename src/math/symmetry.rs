use std::f64::consts::TAU;

use nalgebra::{Matrix3, Rotation3, Unit};

use super::{Point3, Vector3, GOLDEN_RATIO};

/// Tolerance for identifying two rotations or two orbit points.
const GROUP_TOLERANCE: f64 = 1e-9;

/// Order of the rotation group of the icosahedron.
pub const ICOSAHEDRAL_ORDER: usize = 60;

/// A finite group of proper rotations, stored as its full element list.
#[derive(Debug, Clone)]
pub struct RotationGroup {
    elements: Vec<Rotation3<f64>>,
}

impl RotationGroup {
    /// Closes `generators` under composition.
    ///
    /// Stops once `max_order` elements have been found, so a generator set
    /// that drifts numerically cannot grow without bound.
    #[must_use]
    pub fn generate(generators: &[Rotation3<f64>], max_order: usize) -> Self {
        let mut elements = vec![Rotation3::identity()];
        let mut frontier = elements.clone();
        while !frontier.is_empty() && elements.len() < max_order {
            let mut next = Vec::new();
            for g in generators {
                for r in &frontier {
                    let candidate = g * r;
                    if !elements.iter().any(|e| same_rotation(e, &candidate)) {
                        elements.push(candidate);
                        next.push(candidate);
                    }
                }
            }
            frontier = next;
        }
        elements.truncate(max_order);
        Self { elements }
    }

    /// The 60 rotations of the icosahedron whose vertices are the cyclic
    /// permutations of `(0, ±1, ±φ)`.
    ///
    /// Generated by a fifth of a turn about the vertex axis `(0, 1, φ)` and
    /// the cyclic coordinate permutation (a third of a turn about
    /// `(1, 1, 1)`).
    #[must_use]
    pub fn icosahedral() -> Self {
        let vertex_axis = Unit::new_normalize(Vector3::new(0.0, 1.0, GOLDEN_RATIO));
        let five_fold = Rotation3::from_axis_angle(&vertex_axis, TAU / 5.0);
        #[rustfmt::skip]
        let three_fold = Rotation3::from_matrix_unchecked(Matrix3::new(
            0.0, 0.0, 1.0,
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
        ));
        Self::generate(&[five_fold, three_fold], ICOSAHEDRAL_ORDER)
    }

    /// Number of rotations in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the group has no elements (never the case for a
    /// group built by [`RotationGroup::generate`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the rotations in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rotation3<f64>> {
        self.elements.iter()
    }

    /// The distinct images of `seed` under the group, in generation order.
    #[must_use]
    pub fn orbit(&self, seed: &Point3) -> Vec<Point3> {
        let mut points: Vec<Point3> = Vec::new();
        for r in &self.elements {
            let image = r * seed;
            if !points
                .iter()
                .any(|p| nalgebra::distance(p, &image) < GROUP_TOLERANCE)
            {
                points.push(image);
            }
        }
        points
    }

    /// Returns a rotation of the group that carries every point of `from`
    /// onto some point of `onto`, if one exists.
    #[must_use]
    pub fn find_carrier(
        &self,
        from: &[Point3],
        onto: &[Point3],
        tolerance: f64,
    ) -> Option<&Rotation3<f64>> {
        self.elements.iter().find(|r| {
            from.iter().all(|p| {
                let image = *r * p;
                onto.iter()
                    .any(|q| nalgebra::distance(q, &image) < tolerance)
            })
        })
    }
}

fn same_rotation(a: &Rotation3<f64>, b: &Rotation3<f64>) -> bool {
    (a.matrix() - b.matrix()).amax() < GROUP_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::super::seeds;
    use super::*;

    #[test]
    fn icosahedral_group_has_sixty_rotations() {
        assert_eq!(RotationGroup::icosahedral().len(), ICOSAHEDRAL_ORDER);
    }

    #[test]
    fn icosahedral_group_preserves_seed_solids() {
        let group = RotationGroup::icosahedral();
        let icosahedron = seeds::icosahedron_vertices();
        for r in group.iter() {
            for v in &icosahedron {
                let image = r * v;
                assert!(icosahedron
                    .iter()
                    .any(|w| nalgebra::distance(w, &image) < 1e-9));
            }
        }
    }

    #[test]
    fn orbit_is_carried_onto_itself() {
        let group = RotationGroup::icosahedral();
        let orbit = group.orbit(&Point3::new(0.1, 0.2, 0.9));
        assert!(group.find_carrier(&orbit, &orbit, 1e-9).is_some());
    }

    #[test]
    fn orbit_sizes_follow_stabilizers() {
        let group = RotationGroup::icosahedral();
        assert_eq!(group.orbit(&Point3::new(0.0, 1.0, GOLDEN_RATIO)).len(), 12);
        assert_eq!(group.orbit(&Point3::new(1.0, 1.0, 1.0)).len(), 20);
        assert_eq!(group.orbit(&Point3::new(0.0, 0.0, 1.0)).len(), 30);
        assert_eq!(group.orbit(&Point3::new(0.1, 0.2, 0.9)).len(), 60);
    }

    #[test]
    fn generic_orbit_is_not_centrally_symmetric() {
        let group = RotationGroup::icosahedral();
        let orbit = group.orbit(&Point3::new(0.1, 0.2, 0.9));
        let inverted_orbit: Vec<Point3> = orbit.iter().map(|p| Point3::from(-p.coords)).collect();
        assert!(group.find_carrier(&orbit, &inverted_orbit, 1e-6).is_none());
    }
}
