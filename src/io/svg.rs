//! SVG export of a polygon pair.
//!
//! Coordinates are treated as y-up: every y is written as `height - y`, so a
//! polygon near the origin is drawn at the bottom-left of the image.
//!
//! # Example
//!
//! ```
//! use sepax::{polygon::Polygon, io::{polygon_to_svg_path, render_scene_svg}};
//!
//! let triangle = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
//! assert_eq!(polygon_to_svg_path(&triangle, 100.0), "M 0 100 L 10 100 L 0 90 Z");
//!
//! let svg = render_scene_svg(&triangle, &triangle, 800.0, 600.0);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::polygon::Polygon;
use num_traits::Float;
use std::fmt::{self, Write};

/// Stroke colour of the first polygon.
pub const FIRST_STROKE: &str = "blue";
/// Stroke colour of the second polygon.
pub const SECOND_STROKE: &str = "red";
/// Background fill of the rendered scene.
pub const BACKGROUND: &str = "gray";

/// Converts a polygon to a closed SVG path string in a y-up frame of the
/// given height.
///
/// Returns an empty string for an empty polygon.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>, height: F) -> String {
    let Some((first, rest)) = polygon.vertices.split_first() else {
        return String::new();
    };

    let mut result = String::new();

    // Writing to a String cannot fail.
    let _ = write!(result, "M {} {}", first.x, height - first.y);
    for p in rest {
        let _ = write!(result, " L {} {}", p.x, height - p.y);
    }
    result.push_str(" Z");

    result
}

/// Renders two polygons as a standalone SVG document.
///
/// The first polygon is stroked blue and the second red, on a gray
/// background of `width` x `height`.
pub fn render_scene_svg<F: Float + fmt::Display>(
    first: &Polygon<F>,
    second: &Polygon<F>,
    width: F,
    height: F,
) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{width}" height="{height}" fill="{BACKGROUND}"/>"#
    );

    for (polygon, stroke) in [(first, FIRST_STROKE), (second, SECOND_STROKE)] {
        if polygon.is_empty() {
            continue;
        }
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{stroke}"/>"#,
            polygon_to_svg_path(polygon, height)
        );
    }

    svg.push_str("</svg>\n");
    svg
}
