//! Polygon type and convexity validation.
//!
//! # Example
//!
//! ```
//! use sepax::polygon::{is_convex, Polygon};
//!
//! let hexagon = Polygon::from_coords(&[
//!     (2.0, 0.0),
//!     (1.0, 1.7),
//!     (-1.0, 1.7),
//!     (-2.0, 0.0),
//!     (-1.0, -1.7),
//!     (1.0, -1.7),
//! ]);
//! assert!(is_convex(&hexagon, 0.0));
//! ```

mod convexity;
mod core;

pub use convexity::{enclosed_vertices, has_consistent_turns, is_convex};
pub use core::Polygon;
