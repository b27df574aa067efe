//! Painting of kernel output onto the framebuffer.
//!
//! The kernels produce pixel sequences in primitive-local grid
//! coordinates, which may be negative; painting translates every cell by
//! an origin offset into surface coordinates. Cells that land outside the
//! surface are skipped, so no caller-side clamping is needed.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{GridPoint, WeightedPixel};
use crate::raster::{
    bresenham_circle, midpoint_ellipse, rasterize_line, wu_line, LineAlgorithm,
};

/// Paint a pixel sequence with a solid color.
///
/// Each grid point is translated by `origin`; in-bounds cells are set,
/// the rest are skipped.
pub fn paint_sequence(fb: &mut Framebuffer, points: &[GridPoint], origin: GridPoint, color: Rgba) {
    for &point in points {
        let cell = point.offset(origin);
        if cell.x >= 0 && cell.y >= 0 {
            fb.set_pixel(cell.x as u32, cell.y as u32, color);
        }
    }
}

/// Paint a weighted coverage sequence.
///
/// Each cell is blended with the color's alpha scaled by its coverage
/// weight, so a fully covered cell paints like [`paint_sequence`] and a
/// zero-weight cell leaves the surface untouched.
pub fn paint_coverage(
    fb: &mut Framebuffer,
    pairs: &[WeightedPixel],
    origin: GridPoint,
    color: Rgba,
) {
    for &pair in pairs {
        let cell = pair.point.offset(origin);
        if cell.x >= 0 && cell.y >= 0 {
            let alpha = (f64::from(color.a) * pair.weight) as u8;
            fb.blend_pixel(cell.x as u32, cell.y as u32, color.with_alpha(alpha));
        }
    }
}

/// Rasterize a segment with the selected algorithm and paint it.
pub fn draw_segment(
    fb: &mut Framebuffer,
    algorithm: LineAlgorithm,
    p1: GridPoint,
    p2: GridPoint,
    origin: GridPoint,
    color: Rgba,
) {
    let points = rasterize_line(algorithm, p1, p2);
    paint_sequence(fb, &points, origin, color);
}

/// Rasterize a segment with Wu's algorithm and paint its coverage pairs.
pub fn draw_segment_aa(
    fb: &mut Framebuffer,
    p1: GridPoint,
    p2: GridPoint,
    origin: GridPoint,
    color: Rgba,
) {
    let pairs = wu_line(p1, p2);
    paint_coverage(fb, &pairs, origin, color);
}

/// Rasterize a circle boundary and paint it.
///
/// # Errors
///
/// Propagates [`crate::Error::InvalidRadius`] for a negative radius.
pub fn draw_circle(
    fb: &mut Framebuffer,
    center: GridPoint,
    radius: i32,
    origin: GridPoint,
    color: Rgba,
) -> Result<()> {
    let points = bresenham_circle(center, radius)?;
    paint_sequence(fb, &points, origin, color);
    Ok(())
}

/// Rasterize an ellipse boundary and paint it.
///
/// # Errors
///
/// Propagates [`crate::Error::InvalidRadii`] for radii below 1.
pub fn draw_ellipse(
    fb: &mut Framebuffer,
    center: GridPoint,
    rx: i32,
    ry: i32,
    origin: GridPoint,
    color: Rgba,
) -> Result<()> {
    let points = midpoint_ellipse(center, rx, ry)?;
    paint_sequence(fb, &points, origin, color);
    Ok(())
}
