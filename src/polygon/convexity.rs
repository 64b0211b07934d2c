//! Convexity validation by side consistency.
//!
//! A vertex of a convex polygon always lies outside the polygon formed by the
//! remaining vertices, so walking the remaining boundary it must show up on
//! both sides of some edge (or on an edge line). A vertex that stays on one
//! side of every remaining edge is enclosed by the others, and the polygon is
//! rejected.
//!
//! # Example
//!
//! ```
//! use sepax::polygon::{enclosed_vertices, is_convex, Polygon};
//!
//! let square = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//! assert!(is_convex(&square, 0.0));
//!
//! // An arrow whose fourth vertex is pushed in towards the others.
//! let arrow = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
//! assert!(!is_convex(&arrow, 0.0));
//! assert_eq!(enclosed_vertices(&arrow, 0.0), Ok(vec![3]));
//! ```

use super::core::{cyclic_edges, Polygon};
use crate::error::ZeroLengthEdge;
use crate::primitives::Point2;
use crate::tolerance::{classify_point, Side};
use num_traits::Float;

/// Tests whether a polygon passes the side-consistency convexity test.
///
/// Polygons with three or fewer vertices are accepted without testing.
/// A larger polygon with a zero-length edge is rejected.
///
/// `eps` is the collinearity tolerance passed to [`classify_point`].
pub fn is_convex<F: Float>(polygon: &Polygon<F>, eps: F) -> bool {
    matches!(enclosed_vertices(polygon, eps), Ok(enclosed) if enclosed.is_empty())
}

/// Returns the indices of vertices enclosed by the rest of the polygon.
///
/// For each vertex, the remaining vertices (order preserved) form a smaller
/// polygon. The vertex is classified against each of its edges in turn. Once
/// a definite side (`Left`/`Right`) has been seen, a different classification
/// on a later edge (the opposite side, or `On`) marks the vertex as
/// outside. An `On` classification before any definite side is seen is
/// skipped. Vertices that are never marked are reported.
///
/// An empty result means the polygon is convex. Polygons with three or
/// fewer vertices always give an empty result.
///
/// # Errors
///
/// Returns [`ZeroLengthEdge`] for the first edge of a polygon with more than
/// three vertices whose endpoints coincide.
pub fn enclosed_vertices<F: Float>(
    polygon: &Polygon<F>,
    eps: F,
) -> Result<Vec<usize>, ZeroLengthEdge> {
    if polygon.len() <= 3 {
        return Ok(Vec::new());
    }

    if let Some(edge) = polygon.edges().position(|(start, end)| start == end) {
        return Err(ZeroLengthEdge { edge });
    }

    let mut enclosed = Vec::new();

    for (i, &vertex) in polygon.vertices.iter().enumerate() {
        let rest = polygon
            .without_vertex(i)
            .map(|p| p.vertices)
            .unwrap_or_default();

        if !leaves_one_side(vertex, &rest, eps) {
            enclosed.push(i);
        }
    }

    Ok(enclosed)
}

/// Tests convexity by the sign of consecutive edge turns.
///
/// This is the textbook test: walking the boundary, every non-collinear
/// turn must go the same way. Turns whose cross product magnitude is at
/// most `eps` are ignored.
///
/// The engine does not use this function. It disagrees with [`is_convex`]
/// on some inputs:
/// - a vertex collinear with its neighbours passes here but fails
///   [`is_convex`];
/// - a self-intersecting bowtie fails here but passes [`is_convex`].
pub fn has_consistent_turns<F: Float>(polygon: &Polygon<F>, eps: F) -> bool {
    let n = polygon.len();
    if n < 3 {
        return true;
    }

    let mut turn: Option<bool> = None;

    for i in 0..n {
        let a = polygon.vertices[i];
        let b = polygon.vertices[(i + 1) % n];
        let c = polygon.vertices[(i + 2) % n];

        let cross = (b - a).cross(c - b);

        if cross.abs() > eps {
            let is_left = cross > F::zero();
            match turn {
                None => turn = Some(is_left),
                Some(t) if t != is_left => return false,
                _ => {}
            }
        }
    }

    true
}

/// Walks the closed boundary `rest` and reports whether `vertex` leaves the
/// side it was first seen on.
fn leaves_one_side<F: Float>(vertex: Point2<F>, rest: &[Point2<F>], eps: F) -> bool {
    let mut prev: Option<Side> = None;

    for (start, end) in cyclic_edges(rest) {
        // Only the edge joining the removed vertex's neighbours can be
        // degenerate here. Its cross product is zero.
        let side = classify_point(vertex, start, end, eps).unwrap_or(Side::On);

        if let Some(prev_side) = prev {
            if side != prev_side {
                return true;
            }
        }

        prev = side.is_definite().then_some(side);
    }

    false
}
