//! Coordinate-pair extraction from free-form text.
//!
//! A pair is written `x,y`: a number, a comma and a number with nothing in
//! between. Anything that is not part of a pair is skipped, so brackets,
//! labels and separators of any kind are tolerated.
//!
//! # Example
//!
//! ```
//! use sepax::io::parse_vertices;
//! use sepax::Point2;
//!
//! let vertices = parse_vertices::<f64>("(0,0) (100,0) (50,80)").unwrap();
//! assert_eq!(vertices[2], Point2::new(50.0, 80.0));
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::str::FromStr;
use thiserror::Error;

/// Errors from coordinate text parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text contains no `x,y` pair at all.
    #[error("no coordinate pairs found")]
    NoVertices,

    /// A number matched the pair syntax but could not be converted.
    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber {
        /// The offending number text.
        text: String,
        /// Byte offset of the number in the input.
        position: usize,
    },
}

/// Extracts every `x,y` pair from `text`, in order.
///
/// Numbers are an optional `-` followed by digits, optionally followed by
/// `.` and more digits. Vertex count is not checked here; a polygon with
/// fewer than three vertices is rejected later by the collision engine.
///
/// # Errors
///
/// [`ParseError::NoVertices`] if no pair is found.
pub fn parse_vertices<F: Float + FromStr>(text: &str) -> Result<Vec<Point2<F>>, ParseError> {
    let mut scanner = PairScanner::new(text);
    let mut vertices = Vec::new();

    while let Some(pair) = scanner.next_pair() {
        let (x, y) = pair?;
        vertices.push(Point2::new(x, y));
    }

    if vertices.is_empty() {
        return Err(ParseError::NoVertices);
    }

    Ok(vertices)
}

/// Extracts every `x,y` pair from `text` as a polygon.
///
/// See [`parse_vertices`].
pub fn parse_polygon<F: Float + FromStr>(text: &str) -> Result<Polygon<F>, ParseError> {
    parse_vertices(text).map(Polygon::new)
}

// ============================================================================
// Internal implementation
// ============================================================================

/// Leftmost-first scanner for coordinate pairs.
struct PairScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PairScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Finds the next pair at or after the current position.
    fn next_pair<F: Float + FromStr>(&mut self) -> Option<Result<(F, F), ParseError>> {
        let bytes = self.input.as_bytes();

        while self.pos < bytes.len() {
            let start = self.pos;

            if let Some(x_end) = number_end(bytes, start) {
                if bytes.get(x_end) == Some(&b',') {
                    if let Some(y_end) = number_end(bytes, x_end + 1) {
                        self.pos = y_end;
                        return Some(self.convert_pair(start, x_end, y_end));
                    }
                }
            }

            self.pos = start + 1;
        }

        None
    }

    fn convert_pair<F: Float + FromStr>(
        &self,
        start: usize,
        x_end: usize,
        y_end: usize,
    ) -> Result<(F, F), ParseError> {
        let x = self.convert(start, x_end)?;
        let y = self.convert(x_end + 1, y_end)?;
        Ok((x, y))
    }

    fn convert<F: Float + FromStr>(&self, start: usize, end: usize) -> Result<F, ParseError> {
        let text = &self.input[start..end];
        text.parse().map_err(|_| ParseError::InvalidNumber {
            text: text.to_string(),
            position: start,
        })
    }
}

/// Returns the end of the number starting exactly at `start`, if any.
///
/// All accepted bytes are ASCII, so the returned index is always a char
/// boundary.
fn number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    if i == int_start {
        return None;
    }

    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i += 1;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }

    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_parse_plain_pairs() {
        let v = parse_vertices::<f64>("0,0 10,0 10,10 0,10").unwrap();
        assert_eq!(v, pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]));
    }

    #[test]
    fn test_parse_ignores_surrounding_text() {
        let v = parse_vertices::<f64>("A=(1,2); B=(3,4)\nC: [5,6]").unwrap();
        assert_eq!(v, pts(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]));
    }

    #[test]
    fn test_parse_negative_numbers() {
        let v = parse_vertices::<f64>("-1,-2 3,-4 -5,6").unwrap();
        assert_eq!(v, pts(&[(-1.0, -2.0), (3.0, -4.0), (-5.0, 6.0)]));
    }

    #[test]
    fn test_parse_decimals() {
        let v = parse_vertices::<f64>("0.5,1.25 -2.75,3").unwrap();
        assert_eq!(v, pts(&[(0.5, 1.25), (-2.75, 3.0)]));
    }

    #[test]
    fn test_parse_requires_adjacent_comma() {
        // "1, 2" has a space after the comma, so only "3,4" is a pair.
        let v = parse_vertices::<f64>("1, 2 3,4").unwrap();
        assert_eq!(v, pts(&[(3.0, 4.0)]));
    }

    #[test]
    fn test_parse_pair_after_stray_minus() {
        let v = parse_vertices::<f64>("1-2,3").unwrap();
        assert_eq!(v, pts(&[(-2.0, 3.0)]));
    }

    #[test]
    fn test_parse_run_of_commas() {
        // Pairs do not share numbers: "1,2" is taken, then ",3" cannot start one.
        let v = parse_vertices::<f64>("1,2,3,4").unwrap();
        assert_eq!(v, pts(&[(1.0, 2.0), (3.0, 4.0)]));
    }

    #[test]
    fn test_parse_trailing_dot_is_not_fraction() {
        let v = parse_vertices::<f64>("1.,2 3,4.").unwrap();
        assert_eq!(v, pts(&[(3.0, 4.0)]));
    }

    #[test]
    fn test_parse_non_ascii_text() {
        let v = parse_vertices::<f64>("点1：1,2 点2：3,4").unwrap();
        assert_eq!(v, pts(&[(1.0, 2.0), (3.0, 4.0)]));
    }

    #[test]
    fn test_parse_no_vertices() {
        assert_eq!(parse_vertices::<f64>(""), Err(ParseError::NoVertices));
        assert_eq!(
            parse_vertices::<f64>("no numbers, here"),
            Err(ParseError::NoVertices)
        );
        assert_eq!(parse_vertices::<f64>("1 2 3"), Err(ParseError::NoVertices));
    }

    #[test]
    fn test_parse_polygon() {
        let poly = parse_polygon::<f32>("0,0 4,0 2,3").unwrap();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.vertices[2], Point2::new(2.0, 3.0));
    }
}
