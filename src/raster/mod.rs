//! Rasterization kernels for lines, circles, and ellipses.
//!
//! Every kernel is a pure function from grid coordinates to an ordered
//! pixel sequence. Sequences are emitted in generation order and are not
//! deduplicated; the symmetry-driven circle and ellipse kernels revisit
//! cells at octant and region boundaries by construction.
//!
//! # Algorithms
//!
//! - **Stepping**: direct evaluation of `y = mx + b` along the dominant axis
//! - **DDA**: incremental floating-point accumulation
//! - **Bresenham's Line**: integer-only error accumulation
//! - **Wu's Line**: fractional-coverage antialiased variant
//! - **Midpoint Circle**: 8-way symmetric integer decision stepping
//! - **Midpoint Ellipse**: two-region decision stepping with 4-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod circle;
mod ellipse;
mod line;
mod wu;

pub use circle::bresenham_circle;
pub use ellipse::midpoint_ellipse;
pub use line::{bresenham_line, dda_line, stepping_line};
pub use wu::wu_line;

use crate::geometry::GridPoint;

/// Line rasterization algorithm selector.
///
/// An explicit configuration value passed per call; the kernels keep no
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Direct slope-intercept evaluation.
    Stepping,
    /// Digital differential analyzer.
    Dda,
    /// Integer Bresenham.
    Bresenham,
}

impl LineAlgorithm {
    /// Look up an algorithm by name.
    ///
    /// Accepts `"stepping"`, `"dda"`, and `"bresenham"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stepping" => Some(Self::Stepping),
            "dda" => Some(Self::Dda),
            "bresenham" => Some(Self::Bresenham),
            _ => None,
        }
    }
}

/// Rasterize the segment between two grid points with the selected
/// algorithm.
///
/// The result includes both endpoints and is 8-connected: consecutive
/// pixels differ by at most 1 in each axis.
#[must_use]
pub fn rasterize_line(algorithm: LineAlgorithm, p1: GridPoint, p2: GridPoint) -> Vec<GridPoint> {
    match algorithm {
        LineAlgorithm::Stepping => stepping_line(p1, p2),
        LineAlgorithm::Dda => dda_line(p1, p2),
        LineAlgorithm::Bresenham => bresenham_line(p1, p2),
    }
}
