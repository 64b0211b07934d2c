//! Input/output helpers around the collision engine.
//!
//! Parses polygons from coordinate text and renders polygon pairs as SVG.
//! Nothing in the core depends on this module.

mod svg;
mod text;

pub use svg::{polygon_to_svg_path, render_scene_svg, BACKGROUND, FIRST_STROKE, SECOND_STROKE};
pub use text::{parse_polygon, parse_vertices, ParseError};
