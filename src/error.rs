//! Error types for polygon validation and collision testing.

use thiserror::Error;

/// Identifies one of the two polygons passed to a collision query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonId {
    /// The first polygon argument.
    First,
    /// The second polygon argument.
    Second,
}

impl std::fmt::Display for PolygonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolygonId::First => write!(f, "polygon 1"),
            PolygonId::Second => write!(f, "polygon 2"),
        }
    }
}

/// Precondition violations detected by the low-level geometric routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A line was defined by two identical points, so it has no direction.
    #[error("degenerate line: start and end points coincide")]
    DegenerateLine,
}

/// A polygon edge whose endpoints coincide.
///
/// Such an edge has no direction, so it yields neither a separating axis nor
/// a side for the convexity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge {edge} has zero length")]
pub struct ZeroLengthEdge {
    /// Index of the edge's start vertex.
    pub edge: usize,
}

/// Errors returned by a collision query.
///
/// Every variant names the offending polygon so a caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// The polygon has fewer than three vertices.
    #[error("{polygon} has {count} vertices, at least 3 are required")]
    TooFewVertices {
        /// Which polygon was rejected.
        polygon: PolygonId,
        /// Number of vertices it had.
        count: usize,
    },

    /// The polygon failed the convexity test.
    #[error("{polygon} is not convex")]
    NotConvex {
        /// Which polygon was rejected.
        polygon: PolygonId,
    },

    /// The polygon repeats a vertex, giving a zero-length edge.
    #[error("{polygon} has a zero-length edge at index {edge}")]
    InvalidEdge {
        /// Which polygon owns the edge.
        polygon: PolygonId,
        /// Index of the edge's start vertex.
        edge: usize,
    },
}

impl CollisionError {
    /// Returns the polygon this error refers to.
    pub fn polygon(&self) -> PolygonId {
        match *self {
            CollisionError::TooFewVertices { polygon, .. }
            | CollisionError::NotConvex { polygon }
            | CollisionError::InvalidEdge { polygon, .. } => polygon,
        }
    }
}
