//! Vector helpers shared by the generators.
//!
//! Subtraction, cross and dot products come straight from nalgebra
//! (`a - b`, [`Vector3::cross`], [`Vector3::dot`]); this module adds the few
//! operations with an edge case worth pinning down.

use nalgebra::Matrix3;

use crate::error::GeometryError;

use super::{Point3, Vector3, TOLERANCE};

/// Euclidean length of `v`. The zero vector has length `0`.
#[must_use]
pub fn length(v: &Vector3) -> f64 {
    v.norm()
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is shorter than [`TOLERANCE`].
pub fn normalize(v: &Vector3) -> Result<Vector3, GeometryError> {
    v.try_normalize(TOLERANCE).ok_or(GeometryError::ZeroVector)
}

/// The point at distance `radius` from the origin along `direction`.
///
/// `direction` is expected to be a unit vector.
#[must_use]
pub fn at_radius(direction: &Vector3, radius: f64) -> Point3 {
    Point3::from(direction * radius)
}

/// Arithmetic mean of `points`, or the origin for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Returns `true` if `points` are not all coplanar.
///
/// Checks that the scatter matrix of the centered points has rank 3, which is
/// what a convex hull needs to produce a closed surface.
#[must_use]
pub fn spans_3d(points: &[Point3]) -> bool {
    if points.len() < 4 {
        return false;
    }
    let center = centroid(points);
    let offsets: Vec<Vector3> = points.iter().map(|p| p - center).collect();
    let scale = offsets.iter().map(Vector3::norm).fold(0.0, f64::max);
    if scale < TOLERANCE {
        return false;
    }
    let scatter = offsets.iter().fold(Matrix3::zeros(), |acc, d| {
        let d = d / scale;
        acc + d * d.transpose()
    });
    scatter.rank(1e-12) == 3
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn zero_vector_has_zero_length() {
        assert_eq!(length(&Vector3::zeros()), 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_relative_eq!(distance(&p(1.0, 2.0, 3.0), &p(4.0, 6.0, 3.0)), 5.0);
    }

    #[test]
    fn cross_and_dot_follow_right_hand_rule() {
        let x = p(1.0, 0.0, 0.0) - Point3::origin();
        let y = p(0.0, 1.0, 0.0) - Point3::origin();
        assert_relative_eq!(x.cross(&y), Vector3::z());
        assert_relative_eq!(x.dot(&y), 0.0);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(matches!(
            normalize(&Vector3::zeros()),
            Err(GeometryError::ZeroVector)
        ));
        let n = normalize(&Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(n, Vector3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn centroid_of_cube_corners_is_origin() {
        let mut corners = Vec::new();
        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    corners.push(p(x, y, z));
                }
            }
        }
        assert_relative_eq!(centroid(&corners), Point3::origin());
        assert!(spans_3d(&corners));
    }

    #[test]
    fn coplanar_points_do_not_span() {
        let square = [
            p(0.0, 0.0, 1.0),
            p(1.0, 0.0, 1.0),
            p(1.0, 1.0, 1.0),
            p(0.0, 1.0, 1.0),
            p(0.5, 0.5, 1.0),
        ];
        assert!(!spans_3d(&square));
        assert!(!spans_3d(&square[..3]));
    }
}
