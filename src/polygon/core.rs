//! Core polygon type.

use crate::primitives::Point2;
use num_traits::Float;

/// A polygon represented as an ordered sequence of vertices.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first. Either winding order is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in boundary order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(x, y)` coordinate pairs.
    pub fn from_coords(coords: &[(F, F)]) -> Self {
        Self {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the edges as `(start, end)` pairs, including the
    /// closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
        cyclic_edges(&self.vertices)
    }

    /// Returns the polygon formed by every vertex except `index`,
    /// keeping the remaining vertices in their original order.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn without_vertex(&self, index: usize) -> Option<Self> {
        if index >= self.vertices.len() {
            return None;
        }

        let mut vertices = self.vertices.clone();
        vertices.remove(index);
        Some(Self { vertices })
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }
}

/// Iterates over the closed boundary of a vertex slice.
pub(crate) fn cyclic_edges<F: Float>(
    vertices: &[Point2<F>],
) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon<f64> {
        Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_polygon_new() {
        let poly = unit_square();
        assert_eq!(poly.len(), 4);
        assert!(!poly.is_empty());
        assert!(Polygon::<f64>::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_edges_wrap_around() {
        let poly = unit_square();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)));
        assert_eq!(edges[3], (Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_edges_of_single_vertex() {
        let poly = Polygon::from_coords(&[(2.0, 3.0)]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges, vec![(Point2::new(2.0, 3.0), Point2::new(2.0, 3.0))]);
    }

    #[test]
    fn test_without_vertex_preserves_order() {
        let poly = unit_square();
        let rest = poly.without_vertex(1).unwrap();
        assert_eq!(
            rest.vertices,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0)
            ]
        );
        assert!(poly.without_vertex(4).is_none());
    }

    #[test]
    fn test_reversed() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            poly.reversed().vertices,
            vec![
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 0.0),
                Point2::new(0.0, 0.0)
            ]
        );
        assert_eq!(poly.reversed().reversed(), poly);
    }

    #[test]
    fn test_polygon_f32() {
        let poly: Polygon<f32> = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(poly.vertices[2], Point2::new(1.0, 1.0));
    }
}
