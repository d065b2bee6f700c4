use parry3d_f64::math::Point as ParryPoint;
use parry3d_f64::transformation::try_convex_hull;

use crate::error::{GeometryError, Result, TessellationError};
use crate::math::{vector, Point3};

/// The triangulated convex hull of a point set.
///
/// Only points on the hull survive, so `vertices` may be shorter than the
/// input and is not in input order.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    /// Hull vertices.
    pub vertices: Vec<Point3>,
    /// Triangles, counter-clockwise when seen from outside.
    pub triangles: Vec<[u32; 3]>,
}

impl ConvexHull {
    /// Computes the convex hull of `points`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are coplanar (or
    /// fewer than four), and [`TessellationError::HullFailed`] if the hull
    /// algorithm gives up.
    pub fn compute(points: &[Point3]) -> Result<Self> {
        if !vector::spans_3d(points) {
            return Err(GeometryError::Degenerate(format!(
                "{} points do not span three dimensions",
                points.len()
            ))
            .into());
        }

        let input: Vec<ParryPoint<f64>> = points
            .iter()
            .map(|p| ParryPoint::new(p.x, p.y, p.z))
            .collect();
        let (hull_points, mut triangles) = try_convex_hull(&input)
            .map_err(|e| TessellationError::HullFailed(format!("{e:?}")))?;
        let vertices: Vec<Point3> = hull_points
            .iter()
            .map(|p| Point3::new(p.x, p.y, p.z))
            .collect();

        let center = vector::centroid(&vertices);
        for triangle in &mut triangles {
            let [a, b, c] = triangle.map(|i| vertices[i as usize]);
            if (b - a).cross(&(c - a)).dot(&(a - center)) < 0.0 {
                triangle.swap(1, 2);
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HexecontahedraError;
    use crate::math::seeds;

    #[test]
    fn cube_hull() {
        let hull = ConvexHull::compute(&seeds::cube_corners()).unwrap();
        assert_eq!(hull.vertices.len(), 8);
        assert_eq!(hull.triangles.len(), 12);
    }

    #[test]
    fn interior_points_are_dropped() {
        let mut points = seeds::icosahedron_vertices();
        points.push(Point3::origin());
        points.push(Point3::new(0.1, 0.2, 0.3));
        let hull = ConvexHull::compute(&points).unwrap();
        assert_eq!(hull.vertices.len(), 12);
        assert_eq!(hull.triangles.len(), 20);
    }

    #[test]
    fn triangles_face_outward() {
        let hull = ConvexHull::compute(&seeds::icosahedron_vertices()).unwrap();
        for t in &hull.triangles {
            let [a, b, c] = t.map(|i| hull.vertices[i as usize]);
            assert!((b - a).cross(&(c - a)).dot(&a.coords) > 0.0);
        }
    }

    #[test]
    fn coplanar_points_are_degenerate() {
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!(matches!(
            ConvexHull::compute(&square),
            Err(HexecontahedraError::Geometry(GeometryError::Degenerate(_)))
        ));
    }
}
