//! Error types for rasterviz operations.

use std::io;
use thiserror::Error;

use crate::scene::ParseError;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterviz operations.
///
/// Invalid input is rejected before any algorithm runs; an empty clip
/// result is a normal value, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Scene description parse error.
    #[error("scene parse error: {0}")]
    Parse(#[from] ParseError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Negative radius passed to the circle rasterizer.
    #[error("Invalid circle radius: {radius}")]
    InvalidRadius {
        /// The rejected radius.
        radius: i32,
    },

    /// Ellipse radius below 1 on either axis.
    #[error("Invalid ellipse radii: {rx}x{ry}")]
    InvalidRadii {
        /// Semi-axis along x.
        rx: i32,
        /// Semi-axis along y.
        ry: i32,
    },

    /// Polygon with fewer than 3 vertices passed to the clipper.
    #[error("Degenerate polygon: {vertices} vertices (need at least 3)")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_radius_display() {
        let err = Error::InvalidRadius { radius: -4 };
        assert!(err.to_string().contains("-4"));
    }

    #[test]
    fn test_degenerate_polygon_display() {
        let err = Error::DegeneratePolygon { vertices: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains("at least 3"));
    }
}
