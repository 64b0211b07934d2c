//! Validation and collision verdict for a pair of polygons.
//!
//! # Example
//!
//! ```
//! use sepax::{evaluate, CollisionError, PolygonId, Verdict, polygon::Polygon};
//!
//! let a = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let b = Polygon::from_coords(&[(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)]);
//! assert_eq!(evaluate(&a, &b), Ok(Verdict::Collides));
//!
//! let line = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0)]);
//! assert_eq!(
//!     evaluate(&a, &line),
//!     Err(CollisionError::TooFewVertices { polygon: PolygonId::Second, count: 2 })
//! );
//! ```

use super::sat::{edge_axes, first_separating_axis};
use crate::error::{CollisionError, PolygonId, ZeroLengthEdge};
use crate::polygon::{enclosed_vertices, Polygon};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::fmt;

/// Minimum number of vertices a polygon needs.
const MIN_VERTICES: usize = 3;

/// Outcome of a successful collision query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The polygons overlap.
    Collides,
    /// A separating axis exists. Polygons that only touch end up here.
    NoCollision,
}

impl Verdict {
    /// Returns true for [`Verdict::Collides`].
    #[inline]
    pub fn is_collision(self) -> bool {
        self == Verdict::Collides
    }
}

impl From<bool> for Verdict {
    fn from(collides: bool) -> Self {
        if collides {
            Verdict::Collides
        } else {
            Verdict::NoCollision
        }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_collision()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Collides => write!(f, "collision"),
            Verdict::NoCollision => write!(f, "no collision"),
        }
    }
}

/// Tolerances used by [`CollisionEngine`].
///
/// Both default to zero, which gives exact sign tests and treats exactly
/// touching polygons as not colliding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionOptions<F> {
    /// Cross-product magnitude at or below which a vertex counts as lying
    /// on an edge line during the convexity test.
    pub collinear_tolerance: F,
    /// Amount of projection overlap still treated as separation.
    pub separation_tolerance: F,
}

impl<F: Float> Default for CollisionOptions<F> {
    fn default() -> Self {
        Self {
            collinear_tolerance: F::zero(),
            separation_tolerance: F::zero(),
        }
    }
}

impl<F: Float> CollisionOptions<F> {
    /// Sets the collinearity tolerance for the convexity test.
    pub fn collinear_tolerance(mut self, tolerance: F) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    /// Sets the overlap tolerance for the separating-axis test.
    pub fn separation_tolerance(mut self, tolerance: F) -> Self {
        self.separation_tolerance = tolerance;
        self
    }
}

/// Validates two polygons and tests them for overlap.
///
/// The engine holds only its options. Every call recomputes from the inputs,
/// so one engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEngine<F> {
    options: CollisionOptions<F>,
}

impl<F: Float> Default for CollisionEngine<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> CollisionEngine<F> {
    /// Creates an engine with default (exact) options.
    pub fn new() -> Self {
        Self {
            options: CollisionOptions::default(),
        }
    }

    /// Creates an engine with the given options.
    pub fn with_options(options: CollisionOptions<F>) -> Self {
        Self { options }
    }

    /// Returns the engine's options.
    pub fn options(&self) -> CollisionOptions<F> {
        self.options
    }

    /// Validates both polygons, then tests them for overlap.
    ///
    /// Checks run in this order, and the first failure is returned:
    /// 1. both polygons have at least 3 vertices;
    /// 2. both polygons pass [`crate::polygon::is_convex`], where a polygon
    ///    with more than 3 vertices and a zero-length edge reports that edge;
    /// 3. no triangle edge has zero length.
    ///
    /// In each step the first polygon is checked before the second.
    ///
    /// # Errors
    ///
    /// [`CollisionError::TooFewVertices`], [`CollisionError::NotConvex`] or
    /// [`CollisionError::InvalidEdge`], naming the offending polygon.
    pub fn evaluate(&self, a: &Polygon<F>, b: &Polygon<F>) -> Result<Verdict, CollisionError> {
        let inputs = [(PolygonId::First, a), (PolygonId::Second, b)];

        for (id, polygon) in inputs {
            if polygon.len() < MIN_VERTICES {
                log::debug!("{id} rejected: {} vertices", polygon.len());
                return Err(CollisionError::TooFewVertices {
                    polygon: id,
                    count: polygon.len(),
                });
            }
        }

        for (id, polygon) in inputs {
            self.check_convex(id, polygon)?;
        }

        let axes_a = self.axes(PolygonId::First, a)?;
        let axes_b = self.axes(PolygonId::Second, b)?;

        let separated = first_separating_axis(
            axes_a.into_iter().chain(axes_b),
            &a.vertices,
            &b.vertices,
            self.options.separation_tolerance,
        )
        .is_some();

        let verdict = Verdict::from(!separated);
        log::trace!("verdict: {verdict}");
        Ok(verdict)
    }

    /// Like [`CollisionEngine::evaluate`], for raw vertex slices.
    pub fn evaluate_vertices(
        &self,
        a: &[Point2<F>],
        b: &[Point2<F>],
    ) -> Result<Verdict, CollisionError> {
        self.evaluate(&Polygon::new(a.to_vec()), &Polygon::new(b.to_vec()))
    }

    fn check_convex(&self, id: PolygonId, polygon: &Polygon<F>) -> Result<(), CollisionError> {
        match enclosed_vertices(polygon, self.options.collinear_tolerance) {
            Ok(enclosed) if enclosed.is_empty() => Ok(()),
            Ok(enclosed) => {
                log::debug!("{id} rejected: vertices {enclosed:?} are enclosed by the rest");
                Err(CollisionError::NotConvex { polygon: id })
            }
            Err(err) => Err(invalid_edge(id, err)),
        }
    }

    fn axes(&self, id: PolygonId, polygon: &Polygon<F>) -> Result<Vec<Vec2<F>>, CollisionError> {
        edge_axes(polygon).map_err(|err| invalid_edge(id, err))
    }
}

fn invalid_edge(id: PolygonId, err: ZeroLengthEdge) -> CollisionError {
    log::debug!("{id} rejected: {err}");
    CollisionError::InvalidEdge {
        polygon: id,
        edge: err.edge,
    }
}

/// Validates two polygons and tests them for overlap with default options.
///
/// See [`CollisionEngine::evaluate`].
pub fn evaluate<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Result<Verdict, CollisionError> {
    CollisionEngine::new().evaluate(a, b)
}

/// Validates two vertex sequences and tests them for overlap with default
/// options.
pub fn evaluate_vertices<F: Float>(
    a: &[Point2<F>],
    b: &[Point2<F>],
) -> Result<Verdict, CollisionError> {
    CollisionEngine::new().evaluate_vertices(a, b)
}
