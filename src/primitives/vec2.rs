//! 2D vector type for edge directions and axis normals.

use num_traits::Float;

/// A 2D vector representing a direction or offset.
///
/// Polygon edges (`next - current`) and separating-axis candidates are both
/// `Vec2` values. Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns true if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`, negative
    /// means clockwise, zero means the two are parallel.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the magnitude (length) of the vector.
    ///
    /// Uses `hypot` so large coordinates do not overflow the intermediate
    /// square.
    #[inline]
    pub fn magnitude(self) -> F {
        self.x.hypot(self.y)
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    ///
    /// For an edge vector `(dx, dy)` this is `(-dy, dx)`, the edge normal used
    /// as a separating-axis candidate. Its length equals the edge length.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}
