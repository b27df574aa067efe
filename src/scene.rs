//! Geometry-record scene descriptions and parsing.
//!
//! A scene description is a plain-text record format consumed by the
//! visualization front-end: a segment count followed by that many
//! `x1 y1 x2 y2` records, a 4-number clip rectangle, and optionally a
//! subject polygon and a clip polygon, each as a vertex count followed by
//! `x y` records. Blank lines are ignored. The kernel itself never sees
//! text; parsing happens here and hands the kernels numeric tuples.
//!
//! Malformed input is reported as a structured [`ParseError`] with the
//! offending line number, never by panicking or silently dropping records.

use thiserror::Error;

use crate::geometry::{ClipRect, Point, Segment};

/// Errors produced while parsing a scene description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended before a required record.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// Description of the missing record.
        expected: &'static str,
    },

    /// A token could not be parsed as a number.
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber {
        /// 1-based line number in the input.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A record had the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        /// 1-based line number in the input.
        line: usize,
        /// Fields required by the record.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
}

/// A parsed scene: segments to clip, the clip rectangle, and the optional
/// polygon pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Segments to rasterize and clip.
    pub segments: Vec<Segment>,
    /// Rectangle for segment clipping.
    pub clip_rect: ClipRect,
    /// Subject polygon for convex clipping; may be empty.
    pub subject_polygon: Vec<Point>,
    /// Convex clip polygon; may be empty.
    pub clip_polygon: Vec<Point>,
}

impl Scene {
    /// Parse a scene description from text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the offending line for truncated
    /// input, malformed numbers, or records with the wrong field count.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut records = Records::new(input);

        let segment_count = records.count("segment count")?;
        let mut segments = Vec::with_capacity(segment_count);
        for _ in 0..segment_count {
            let fields = records.floats("segment record", 4)?;
            segments.push(Segment::from_coords(
                fields[0], fields[1], fields[2], fields[3],
            ));
        }

        let fields = records.floats("clip rectangle", 4)?;
        let clip_rect = ClipRect::new(fields[0], fields[1], fields[2], fields[3]);

        let subject_polygon = records.optional_polygon("subject polygon vertex")?;
        let clip_polygon = records.optional_polygon("clip polygon vertex")?;

        Ok(Self {
            segments,
            clip_rect,
            subject_polygon,
            clip_polygon,
        })
    }

    /// The built-in demonstration scene.
    ///
    /// Nine segments in assorted positions around a `(-5,-5)..(10,10)`
    /// clip rectangle, an 8-vertex subject polygon, and a triangular clip
    /// polygon.
    #[must_use]
    pub fn demo() -> Self {
        let segments = [
            (-10.0, -5.0, 15.0, 10.0),
            (5.0, -8.0, 12.0, 15.0),
            (-8.0, 12.0, 10.0, -10.0),
            (-3.0, -3.0, -3.0, 15.0),
            (2.0, -7.0, 2.0, 12.0),
            (-7.0, 3.0, 12.0, 3.0),
            (-15.0, -15.0, -15.0, 15.0),
            (20.0, -5.0, 20.0, 10.0),
            (0.0, 0.0, 5.0, 5.0),
        ]
        .iter()
        .map(|&(x1, y1, x2, y2)| Segment::from_coords(x1, y1, x2, y2))
        .collect();

        let subject_polygon = [
            (0.0, 0.0),
            (2.0, 5.0),
            (4.0, 0.0),
            (6.0, 5.0),
            (8.0, 0.0),
            (8.0, -3.0),
            (4.0, -5.0),
            (0.0, -3.0),
        ]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();

        let clip_polygon = [(1.0, -2.0), (7.0, -2.0), (4.0, 6.0)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();

        Self {
            segments,
            clip_rect: ClipRect::new(-5.0, -5.0, 10.0, 10.0),
            subject_polygon,
            clip_polygon,
        }
    }
}

/// Non-blank record lines with their 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Records<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn next_record(&mut self) -> Option<(usize, &'a str)> {
        self.lines
            .by_ref()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .find(|(_, line)| !line.is_empty())
    }

    /// Read a single-token non-negative count record.
    fn count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let (line, text) = self
            .next_record()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        Self::parse_count(line, text)
    }

    fn parse_count(line: usize, text: &str) -> Result<usize, ParseError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 1 {
            return Err(ParseError::WrongFieldCount {
                line,
                expected: 1,
                found: tokens.len(),
            });
        }
        tokens[0].parse().map_err(|_| ParseError::InvalidNumber {
            line,
            token: tokens[0].to_string(),
        })
    }

    /// Read a record of exactly `expected` floating-point fields.
    fn floats(&mut self, expected: &'static str, count: usize) -> Result<Vec<f64>, ParseError> {
        let (line, text) = self
            .next_record()
            .ok_or(ParseError::UnexpectedEnd { expected })?;

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != count {
            return Err(ParseError::WrongFieldCount {
                line,
                expected: count,
                found: tokens.len(),
            });
        }

        tokens
            .iter()
            .map(|token| {
                token.parse().map_err(|_| ParseError::InvalidNumber {
                    line,
                    token: (*token).to_string(),
                })
            })
            .collect()
    }

    /// Read an optional vertex-count-plus-records polygon section.
    ///
    /// A missing section (end of input) is an empty polygon; a present but
    /// truncated or malformed section is an error.
    fn optional_polygon(&mut self, expected: &'static str) -> Result<Vec<Point>, ParseError> {
        let Some((line, text)) = self.next_record() else {
            return Ok(Vec::new());
        };

        let vertex_count = Self::parse_count(line, text)?;
        let mut polygon = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            let fields = self.floats(expected, 2)?;
            polygon.push(Point::new(fields[0], fields[1]));
        }
        Ok(polygon)
    }
}
