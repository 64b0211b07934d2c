//! 2D point type for polygon vertices.

use super::Vec2;
use num_traits::Float;
use std::ops::Sub;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Integer coordinates
/// are supplied by converting them first, e.g. `Point2::new(3.0, -4.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Scalar projection of this point onto `axis`, in multiples of
    /// `|axis|`.
    #[inline]
    pub fn project_onto(self, axis: Vec2<F>) -> F {
        self.to_vec().dot(axis)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}
