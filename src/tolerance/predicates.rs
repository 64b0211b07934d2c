//! Point/line side classification with explicit tolerance.

use crate::error::GeometryError;
use crate::primitives::Point2;
use num_traits::Float;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left of the direction of travel (counter-clockwise turn).
    Left,
    /// Right of the direction of travel (clockwise turn).
    Right,
    /// On the infinite line through the two points (within tolerance).
    On,
}

impl Side {
    /// Returns the side mirrored across the line. `On` maps to itself.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::On => Side::On,
        }
    }

    /// Returns true for `Left` and `Right`.
    #[inline]
    pub fn is_definite(self) -> bool {
        self != Side::On
    }
}

/// Classifies `point` against the infinite directed line `line_start -> line_end`.
///
/// The sign of the cross product of `(line_end - line_start)` and
/// `(point - line_start)` decides the side:
/// - `Left` if the cross product is greater than `eps`
/// - `Right` if it is less than `-eps`
/// - `On` otherwise
///
/// Pass `eps = 0` for an exact sign test. Vertical and horizontal lines need
/// no special handling since no slope is ever computed.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateLine`] if `line_start == line_end`.
///
/// # Example
///
/// ```
/// use sepax::{classify_point, Point2, Side};
///
/// let start = Point2::new(0.0, 0.0);
/// let end = Point2::new(0.0, 10.0); // vertical line, pointing up
///
/// assert_eq!(classify_point(Point2::new(-1.0, 5.0), start, end, 0.0), Ok(Side::Left));
/// assert_eq!(classify_point(Point2::new(1.0, 5.0), start, end, 0.0), Ok(Side::Right));
/// assert_eq!(classify_point(Point2::new(0.0, 20.0), start, end, 0.0), Ok(Side::On));
/// ```
#[inline]
pub fn classify_point<F: Float>(
    point: Point2<F>,
    line_start: Point2<F>,
    line_end: Point2<F>,
    eps: F,
) -> Result<Side, GeometryError> {
    let direction = line_end - line_start;
    if direction.is_zero() {
        return Err(GeometryError::DegenerateLine);
    }

    let cross = direction.cross(point - line_start);

    Ok(if cross > eps {
        Side::Left
    } else if cross < -eps {
        Side::Right
    } else {
        Side::On
    })
}
