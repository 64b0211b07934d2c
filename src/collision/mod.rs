//! Collision queries between two convex polygons.

mod engine;
mod sat;

pub use engine::{evaluate, evaluate_vertices, CollisionEngine, CollisionOptions, Verdict};
pub use sat::{
    edge_axes, first_separating_axis, overlaps, project, separating_axis, Projection,
};
