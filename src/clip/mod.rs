//! Clipping kernels for segments and convex polygons.
//!
//! Clipping works entirely in real (`f64`) coordinates and never rounds
//! results to the pixel grid. A fully clipped primitive is a normal empty
//! result, distinct from invalid input.
//!
//! # Algorithms
//!
//! - **Liang-Barsky**: parametric segment clipping against an axis-aligned
//!   rectangle
//! - **Sutherland-Hodgman**: successive half-plane clipping of a polygon
//!   against a convex region
//! - **Shoelace formula**: signed-area measurement for clip reporting
//!
//! # References
//!
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."
//! - Sutherland, I. E., & Hodgman, G. W. (1974). "Reentrant Polygon Clipping."

mod polygon;
mod segment;

pub use polygon::{clip_polygon, clip_polygon_rect, polygon_area};
pub use segment::clip_segment;
