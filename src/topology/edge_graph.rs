use std::collections::HashSet;

use tracing::warn;

use crate::error::TopologyError;
use crate::math::{vector, Point3};

use super::{edge_key, Edge};

/// The graph formed by the `count` shortest vertex pairs of a point cloud.
#[derive(Debug, Clone)]
pub struct EdgeGraph {
    edges: Vec<Edge>,
    keys: HashSet<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl EdgeGraph {
    /// Takes the `count` shortest pairs of `vertices` as edges.
    ///
    /// Pairs are sorted by length. Lengths within `tolerance` of the first
    /// length of their run are treated as equal, and such a class is ordered
    /// by the lowest index sum, then the lowest first index, so the result does
    /// not depend on rounding noise.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::NotEnoughPairs`] if `count` exceeds the number
    /// of vertex pairs.
    pub fn shortest(
        vertices: &[Point3],
        count: usize,
        tolerance: f64,
    ) -> Result<Self, TopologyError> {
        let mut pairs = all_pairs(vertices);
        if count > pairs.len() {
            return Err(TopologyError::NotEnoughPairs {
                requested: count,
                available: pairs.len(),
            });
        }
        pairs.sort_by(|p, q| p.length.total_cmp(&q.length));

        let mut start = 0;
        while start < pairs.len() {
            let anchor = pairs[start].length;
            let end = pairs[start..]
                .iter()
                .position(|e| e.length - anchor > tolerance)
                .map_or(pairs.len(), |offset| start + offset);
            pairs[start..end].sort_by_key(|e| (e.a + e.b, e.a));
            if start < count && count < end {
                warn!(
                    count,
                    class_start = start,
                    class_end = end,
                    length = anchor,
                    "edge cutoff splits pairs of equal length; keeping lowest indices"
                );
            }
            start = end;
        }
        pairs.truncate(count);

        let mut adjacency = vec![Vec::new(); vertices.len()];
        for e in &pairs {
            adjacency[e.a].push(e.b);
            adjacency[e.b].push(e.a);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }
        let keys = pairs.iter().map(Edge::key).collect();

        Ok(Self {
            edges: pairs,
            keys,
            adjacency,
        })
    }

    /// The edges, shortest first.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `vertex` in ascending index order.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if `i` and `j` are joined by an edge, in either order.
    #[must_use]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.keys.contains(&edge_key(i, j))
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn all_pairs(vertices: &[Point3]) -> Vec<Edge> {
    let mut pairs = Vec::with_capacity(vertices.len() * vertices.len().saturating_sub(1) / 2);
    for (a, p) in vertices.iter().enumerate() {
        for (offset, q) in vertices[a + 1..].iter().enumerate() {
            pairs.push(Edge {
                a,
                b: a + 1 + offset,
                length: vector::distance(p, q),
            });
        }
    }
    pairs
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::seeds;

    fn unit_square() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn cube_edges_are_the_twelve_shortest_pairs() {
        let graph = EdgeGraph::shortest(&seeds::cube_corners(), 12, 1e-6).unwrap();
        assert_eq!(graph.len(), 12);
        for e in graph.edges() {
            assert!(e.a < e.b);
            assert_relative_eq!(e.length, 2.0);
        }
        for v in 0..8 {
            assert_eq!(graph.neighbors(v).len(), 3);
        }
    }

    #[test]
    fn contains_ignores_order() {
        let graph = EdgeGraph::shortest(&unit_square(), 4, 1e-6).unwrap();
        assert!(graph.contains(0, 1));
        assert!(graph.contains(1, 0));
        assert!(!graph.contains(0, 2));
        assert!(!graph.contains(1, 3));
    }

    #[test]
    fn split_class_keeps_lowest_indices() {
        // The four sides tie; (0,1) has sum 1, then (0,3) and (1,2) share
        // sum 3 and the lower first index wins.
        let graph = EdgeGraph::shortest(&unit_square(), 2, 1e-6).unwrap();
        let keys: Vec<(usize, usize)> = graph.edges().iter().map(Edge::key).collect();
        assert_eq!(keys, vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn near_ties_are_one_class() {
        let mut square = unit_square();
        square[2].x += 1e-9;
        let graph = EdgeGraph::shortest(&square, 3, 1e-6).unwrap();
        let keys: Vec<(usize, usize)> = graph.edges().iter().map(Edge::key).collect();
        assert_eq!(keys, vec![(0, 1), (0, 3), (1, 2)]);
    }

    #[test]
    fn too_many_edges_requested() {
        let result = EdgeGraph::shortest(&unit_square(), 7, 1e-6);
        assert!(matches!(
            result,
            Err(TopologyError::NotEnoughPairs {
                requested: 7,
                available: 6
            })
        ));
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let graph = EdgeGraph::shortest(&unit_square(), 4, 1e-6).unwrap();
        assert!(graph.neighbors(99).is_empty());
    }
}
