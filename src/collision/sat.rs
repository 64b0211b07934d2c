//! Separating Axis Theorem for convex polygons.
//!
//! Two convex polygons are disjoint iff some edge normal of either polygon
//! separates their projections. Results are only meaningful for convex
//! input; see [`crate::polygon::is_convex`].
//!
//! Axes are the raw edge normals `(-e.y, e.x)`, not unit vectors. Points on
//! a shared edge line then project to identical values whenever the products
//! are exact (integer coordinates, for instance), so touching polygons stay
//! separated instead of overlapping by a rounding error.
//!
//! # Example
//!
//! ```
//! use sepax::{collision::overlaps, polygon::Polygon};
//!
//! let a = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let b = Polygon::from_coords(&[(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)]);
//! let c = Polygon::from_coords(&[(10.0, 10.0), (11.0, 10.0), (11.0, 11.0), (10.0, 11.0)]);
//!
//! assert_eq!(overlaps(&a, &b, 0.0), Ok(true));
//! assert_eq!(overlaps(&a, &c, 0.0), Ok(false));
//! ```

use crate::error::ZeroLengthEdge;
use crate::polygon::Polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Interval covered by a vertex set projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<F> {
    /// Smallest projected value.
    pub min: F,
    /// Largest projected value.
    pub max: F,
}

impl<F: Float> Projection<F> {
    /// Returns true if the two intervals are separated.
    ///
    /// Intervals that merely touch (`self.max == other.min`) count as
    /// separated. A positive `tolerance` widens the gap that counts as
    /// separation by letting intervals overlap by up to that amount.
    #[inline]
    pub fn is_separated_from(self, other: Self, tolerance: F) -> bool {
        self.max <= other.min + tolerance || other.max <= self.min + tolerance
    }
}

/// Projects vertices onto an axis and returns the covered interval.
///
/// The interval is measured in multiples of `|axis|`. An empty vertex slice
/// produces the empty interval `[+inf, -inf]`.
pub fn project<F: Float>(vertices: &[Point2<F>], axis: Vec2<F>) -> Projection<F> {
    let mut min = F::infinity();
    let mut max = F::neg_infinity();

    for v in vertices {
        let proj = v.project_onto(axis);
        min = min.min(proj);
        max = max.max(proj);
    }

    Projection { min, max }
}

/// Returns the normal of every edge of `polygon`, in edge order.
///
/// The normal of edge `e = next - current` is `(-e.y, e.x)`, with the same
/// length as the edge.
///
/// # Errors
///
/// Returns [`ZeroLengthEdge`] for the first edge whose endpoints coincide.
pub fn edge_axes<F: Float>(polygon: &Polygon<F>) -> Result<Vec<Vec2<F>>, ZeroLengthEdge> {
    polygon
        .edges()
        .enumerate()
        .map(|(edge, (start, end))| {
            let axis = (end - start).perpendicular();
            if axis.is_zero() {
                Err(ZeroLengthEdge { edge })
            } else {
                Ok(axis)
            }
        })
        .collect()
}

/// Returns the first axis in `axes` that separates the two vertex sets.
///
/// Axes need not be unit length. `tolerance` is a distance and is scaled by
/// `|axis|` before comparing projections.
pub fn first_separating_axis<F: Float>(
    axes: impl IntoIterator<Item = Vec2<F>>,
    a: &[Point2<F>],
    b: &[Point2<F>],
    tolerance: F,
) -> Option<Vec2<F>> {
    for axis in axes {
        let proj_a = project(a, axis);
        let proj_b = project(b, axis);

        if proj_a.is_separated_from(proj_b, tolerance * axis.magnitude()) {
            log::trace!(
                "separating axis ({}, {}): a=[{}, {}] b=[{}, {}]",
                as_f64(axis.x),
                as_f64(axis.y),
                as_f64(proj_a.min),
                as_f64(proj_a.max),
                as_f64(proj_b.min),
                as_f64(proj_b.max)
            );
            return Some(axis);
        }
    }

    None
}

/// Finds an edge normal that separates `a` and `b`.
///
/// Axes of `a` are tried before axes of `b`, and the first separating axis
/// is returned, as given by [`edge_axes`]. `Ok(None)` means no edge normal
/// separates the polygons, so they overlap.
///
/// # Errors
///
/// Returns [`ZeroLengthEdge`] if either polygon has a zero-length edge. The
/// index does not say which polygon owns the edge; call [`edge_axes`] per
/// polygon when that matters.
pub fn separating_axis<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    tolerance: F,
) -> Result<Option<Vec2<F>>, ZeroLengthEdge> {
    let axes = edge_axes(a)?.into_iter().chain(edge_axes(b)?);
    Ok(first_separating_axis(axes, &a.vertices, &b.vertices, tolerance))
}

/// Tests whether two convex polygons overlap.
///
/// Polygons that only share boundary (an edge or a corner) do not overlap.
/// The result is symmetric in `a` and `b`.
///
/// # Errors
///
/// Returns [`ZeroLengthEdge`] if either polygon has a zero-length edge.
pub fn overlaps<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    tolerance: F,
) -> Result<bool, ZeroLengthEdge> {
    Ok(separating_axis(a, b, tolerance)?.is_none())
}

// Log formatting only; `Float` does not imply `Display`.
fn as_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, size: f64) -> Polygon<f64> {
        Polygon::from_coords(&[
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ])
    }

    fn triangle() -> Polygon<f64> {
        Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)])
    }

    #[test]
    fn test_project_square() {
        let sq = square(1.0, 2.0, 3.0);
        let p = project(&sq.vertices, Vec2::new(1.0, 0.0));
        assert_eq!(p, Projection { min: 1.0, max: 4.0 });

        let p = project(&sq.vertices, Vec2::new(1.0, 1.0));
        assert_eq!(p, Projection { min: 3.0, max: 9.0 });
    }

    #[test]
    fn test_project_empty() {
        let p = project::<f64>(&[], Vec2::new(1.0, 0.0));
        assert!(p.min > p.max);
    }

    #[test]
    fn test_separation_predicate() {
        let a = Projection { min: 0.0, max: 1.0 };
        let b = Projection { min: 1.0, max: 2.0 };
        let c = Projection { min: 0.5, max: 2.0 };

        assert!(a.is_separated_from(b, 0.0));
        assert!(b.is_separated_from(a, 0.0));
        assert!(!a.is_separated_from(c, 0.0));
        assert!(a.is_separated_from(c, 0.5));
    }

    #[test]
    fn test_edge_axes_are_edge_length_normals() {
        let axes = edge_axes(&square(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(
            axes,
            vec![
                Vec2::new(0.0, 2.0),
                Vec2::new(-2.0, 0.0),
                Vec2::new(0.0, -2.0),
                Vec2::new(2.0, 0.0),
            ]
        );

        let tri = triangle();
        for (axis, (start, end)) in edge_axes(&tri).unwrap().into_iter().zip(tri.edges()) {
            assert_eq!(axis.dot(end - start), 0.0);
            assert_relative_eq!(axis.magnitude(), (end - start).magnitude(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_edge_axes_zero_length_edge() {
        let repeated = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(
            edge_axes(&repeated),
            Err(ZeroLengthEdge { edge: 1 })
        );

        assert_eq!(
            overlaps(&square(0.0, 0.0, 1.0), &repeated, 0.0),
            Err(ZeroLengthEdge { edge: 1 })
        );
    }

    #[test]
    fn test_separated_squares() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(10.0, 10.0, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(false));
        assert_eq!(overlaps(&b, &a, 0.0), Ok(false));
    }

    #[test]
    fn test_overlapping_squares() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.5, 0.5, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(true));
        assert_eq!(overlaps(&b, &a, 0.0), Ok(true));
    }

    #[test]
    fn test_touching_edge_is_not_overlap() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(false));
        assert_eq!(
            separating_axis(&a, &b, 0.0),
            Ok(Some(Vec2::new(-1.0, 0.0)))
        );
    }

    #[test]
    fn test_touching_corner_is_not_overlap() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 1.0, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(false));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(4.0, 4.0, 1.0);
        assert_eq!(overlaps(&outer, &inner, 0.0), Ok(true));
        assert_eq!(overlaps(&inner, &outer, 0.0), Ok(true));
    }

    #[test]
    fn test_only_diagonal_axis_separates() {
        // Bounding boxes overlap, but the hypotenuse normal separates them.
        let tri = triangle();
        let near = square(1.5, 1.5, 1.5);
        let axis = separating_axis(&tri, &near, 0.0).unwrap().unwrap();
        assert_eq!(axis, Vec2::new(-2.0, -2.0));
        assert_eq!(overlaps(&near, &tri, 0.0), Ok(false));

        let closer = square(0.9, 0.9, 2.1);
        assert_eq!(overlaps(&tri, &closer, 0.0), Ok(true));
    }

    #[test]
    fn test_touching_diagonal_edge_is_not_overlap() {
        // Shared segment on x + y = 5. Unit normals would put the two
        // projections of that line a rounding error apart.
        let a = Polygon::from_coords(&[(-1.0, 6.0), (6.0, -1.0), (-50.0, -50.0)]);
        let b = Polygon::from_coords(&[(9.0, -4.0), (60.0, 60.0), (-4.0, 9.0)]);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(false));
        assert_eq!(overlaps(&b, &a, 0.0), Ok(false));
        assert_eq!(separating_axis(&a, &b, 0.0), Ok(Some(Vec2::new(7.0, 7.0))));
    }

    #[test]
    fn test_tolerance_is_a_distance() {
        // Gap-free overlap of 0.05 along x; edges of length 1 and 10 must
        // agree on the same tolerance.
        let a = square(0.0, 0.0, 10.0);
        let b = square(9.95, 0.0, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(true));
        assert_eq!(overlaps(&a, &b, 0.04), Ok(true));
        assert_eq!(overlaps(&a, &b, 0.06), Ok(false));
        assert_eq!(overlaps(&b, &a, 0.06), Ok(false));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let a = square(0.0, 0.0, 1.0).reversed();
        let b = square(0.5, 0.5, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(true));
        assert_eq!(overlaps(&a, &square(3.0, 0.0, 1.0), 0.0), Ok(false));
    }

    #[test]
    fn test_diamonds_with_small_gap() {
        let a = Polygon::from_coords(&[(0.0, 1.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0)]);
        let b = Polygon::from_coords(&[(2.2, 1.0), (3.2, 0.0), (4.2, 1.0), (3.2, 2.0)]);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(false));
    }

    #[test]
    fn test_tolerance_allows_shallow_overlap() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.95, 0.0, 1.0);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(true));
        assert_eq!(overlaps(&a, &b, 0.1), Ok(false));
    }

    #[test]
    fn test_f32_support() {
        let a: Polygon<f32> =
            Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b: Polygon<f32> =
            Polygon::from_coords(&[(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)]);
        assert_eq!(overlaps(&a, &b, 0.0), Ok(true));
    }
}
