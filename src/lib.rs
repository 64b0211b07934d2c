//! sepax - Convex polygon collision with the Separating Axis Theorem
//!
//! Given two polygons as ordered vertex lists, [`evaluate`] checks that each
//! has at least three vertices, checks that each is convex, and then reports
//! whether they overlap. Polygons that only touch along an edge or at a
//! corner do not collide.
//!
//! # Example
//!
//! ```
//! use sepax::{evaluate, polygon::Polygon, Verdict};
//!
//! let a = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let b = Polygon::from_coords(&[(10.0, 10.0), (11.0, 10.0), (11.0, 11.0), (10.0, 11.0)]);
//!
//! assert_eq!(evaluate(&a, &b), Ok(Verdict::NoCollision));
//! ```

pub mod collision;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use collision::{evaluate, evaluate_vertices, CollisionEngine, CollisionOptions, Verdict};
pub use error::{CollisionError, GeometryError, PolygonId, ZeroLengthEdge};
pub use primitives::{Point2, Vec2};
pub use tolerance::{classify_point, Side};
