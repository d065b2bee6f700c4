//! Platonic seed solids in the golden-ratio coordinate frame.
//!
//! The icosahedron here has vertices at the cyclic permutations of
//! `(0, ±1, ±φ)` and the dodecahedron at `(±1, ±1, ±1)` plus the cyclic
//! permutations of `(0, ±1/φ, ±φ)`. The two are not duals of each other in
//! this frame: the face normals of each one are the vertices of the *other*
//! orientation of its dual, so they get their own functions.

use super::{vector, Point3, Vector3, GOLDEN_RATIO};

/// Expands `base` into its three cyclic permutations, with every choice of
/// sign on the non-zero coordinates.
///
/// Zero coordinates are not doubled, so `(0, a, b)` yields 12 points and a
/// triple with no zeros yields 24.
#[must_use]
pub fn cyclic_family(base: [f64; 3]) -> Vec<Point3> {
    let mut points = Vec::new();
    for shift in 0..3 {
        let rotated = [base[shift], base[(shift + 1) % 3], base[(shift + 2) % 3]];
        for signs in 0..8_u8 {
            let flips_zero = (0..3).any(|axis| signs & (1 << axis) != 0 && rotated[axis] == 0.0);
            if flips_zero {
                continue;
            }
            let coord = |axis: usize| {
                if signs & (1 << axis) != 0 {
                    -rotated[axis]
                } else {
                    rotated[axis]
                }
            };
            points.push(Point3::new(coord(0), coord(1), coord(2)));
        }
    }
    points
}

/// The 8 corners `(±1, ±1, ±1)` of the cube inscribed in the dodecahedron.
#[must_use]
pub fn cube_corners() -> Vec<Point3> {
    let mut corners = Vec::with_capacity(8);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                corners.push(Point3::new(x, y, z));
            }
        }
    }
    corners
}

/// The 12 vertices of the icosahedron with edge length 2.
#[must_use]
pub fn icosahedron_vertices() -> Vec<Point3> {
    cyclic_family([0.0, 1.0, GOLDEN_RATIO])
}

/// The 20 vertices of the dodecahedron with edge length `2/φ`.
///
/// The 8 cube-type vertices come first, followed by the 12 golden-rectangle
/// vertices.
#[must_use]
pub fn dodecahedron_vertices() -> Vec<Point3> {
    let mut vertices = cube_corners();
    vertices.extend(cyclic_family([0.0, 1.0 / GOLDEN_RATIO, GOLDEN_RATIO]));
    vertices
}

/// Unit outward normals of the 12 pentagonal faces of [`dodecahedron_vertices`].
#[must_use]
pub fn dodecahedron_face_normals() -> Vec<Vector3> {
    unit_directions(&cyclic_family([0.0, GOLDEN_RATIO, 1.0]))
}

/// Unit outward normals of the 20 triangular faces of [`icosahedron_vertices`].
#[must_use]
pub fn icosahedron_face_normals() -> Vec<Vector3> {
    let mut directions = cube_corners();
    directions.extend(cyclic_family([0.0, GOLDEN_RATIO, 1.0 / GOLDEN_RATIO]));
    unit_directions(&directions)
}

/// Unit directions through the midpoints of the 30 edges of
/// [`icosahedron_vertices`] (the two-fold symmetry axes).
#[must_use]
pub fn icosahedron_edge_axes() -> Vec<Vector3> {
    let vertices = icosahedron_vertices();
    let midpoints: Vec<Point3> = edges_with_length(&vertices, 2.0, 1e-9)
        .into_iter()
        .map(|(i, j)| nalgebra::center(&vertices[i], &vertices[j]))
        .collect();
    unit_directions(&midpoints)
}

/// Returns every index pair `(i, j)` with `i < j` whose separation matches
/// `length` within `tolerance`.
///
/// Only meaningful for solids with a single edge length, where "adjacent" and
/// "at the edge length" coincide.
#[must_use]
pub fn edges_with_length(points: &[Point3], length: f64, tolerance: f64) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if (vector::distance(&points[i], &points[j]) - length).abs() < tolerance {
                edges.push((i, j));
            }
        }
    }
    edges
}

fn unit_directions(points: &[Point3]) -> Vec<Vector3> {
    points.iter().map(|p| p.coords.normalize()).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Number of `points` that attain the maximum projection onto `direction`.
    fn support_count(points: &[Point3], direction: &Vector3) -> usize {
        let projections: Vec<f64> = points.iter().map(|p| p.coords.dot(direction)).collect();
        let max = projections.iter().copied().fold(f64::MIN, f64::max);
        projections.iter().filter(|&&d| (d - max).abs() < 1e-9).count()
    }

    #[test]
    fn cyclic_family_counts() {
        assert_eq!(cyclic_family([0.0, 1.0, 2.0]).len(), 12);
        assert_eq!(cyclic_family([1.0, 2.0, 3.0]).len(), 24);
        assert_eq!(cyclic_family([0.0, 0.0, 1.0]).len(), 6);
    }

    #[test]
    fn seed_vertex_counts() {
        assert_eq!(icosahedron_vertices().len(), 12);
        assert_eq!(dodecahedron_vertices().len(), 20);
        assert_eq!(dodecahedron_face_normals().len(), 12);
        assert_eq!(icosahedron_face_normals().len(), 20);
        assert_eq!(icosahedron_edge_axes().len(), 30);
    }

    #[test]
    fn seeds_have_one_edge_length() {
        assert_eq!(edges_with_length(&icosahedron_vertices(), 2.0, 1e-9).len(), 30);
        assert_eq!(
            edges_with_length(&dodecahedron_vertices(), 2.0 / GOLDEN_RATIO, 0.01).len(),
            30
        );
    }

    #[test]
    fn dodecahedron_is_on_a_sphere() {
        for v in dodecahedron_vertices() {
            assert_relative_eq!(v.coords.norm(), 3.0_f64.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn dodecahedron_face_normals_touch_pentagons() {
        let vertices = dodecahedron_vertices();
        for n in dodecahedron_face_normals() {
            assert_eq!(support_count(&vertices, &n), 5);
        }
    }

    #[test]
    fn icosahedron_face_normals_touch_triangles() {
        let vertices = icosahedron_vertices();
        for n in icosahedron_face_normals() {
            assert_eq!(support_count(&vertices, &n), 3);
        }
    }

    #[test]
    fn edge_axes_touch_edges() {
        let vertices = icosahedron_vertices();
        for axis in icosahedron_edge_axes() {
            assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-12);
            assert_eq!(support_count(&vertices, &axis), 2);
        }
    }
}
