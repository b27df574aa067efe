//! Liang-Barsky parametric segment clipping.

use crate::geometry::{ClipRect, Point, Segment};

/// Clip a segment against an axis-aligned rectangle.
///
/// Solves for the parameter interval `[u1, u2] ⊆ [0, 1]` of the segment's
/// parameterization that lies inside the rectangle. Each of the four
/// boundaries contributes a `(p, q)` pair: `p == 0` means the segment runs
/// parallel to that boundary and is rejected outright when it lies on the
/// outside (`q < 0`); otherwise `r = q / p` tightens the entering bound
/// (`p < 0`) or the exiting bound (`p > 0`).
///
/// Returns `None` when the segment is entirely outside. The returned
/// endpoints are exact reals on the original segment, never rounded.
#[must_use]
pub fn clip_segment(segment: Segment, rect: ClipRect) -> Option<Segment> {
    let Point { x: x1, y: y1 } = segment.start;
    let dx = segment.end.x - x1;
    let dy = segment.end.y - y1;

    let p = [-dx, dx, -dy, dy];
    let q = [
        x1 - rect.xmin,
        rect.xmax - x1,
        y1 - rect.ymin,
        rect.ymax - y1,
    ];

    let mut u1: f64 = 0.0;
    let mut u2: f64 = 1.0;

    for i in 0..4 {
        if p[i] == 0.0 {
            // Parallel to this boundary: outside means gone entirely.
            if q[i] < 0.0 {
                return None;
            }
        } else {
            let r = q[i] / p[i];
            if p[i] < 0.0 {
                u1 = u1.max(r);
            } else {
                u2 = u2.min(r);
            }
        }
    }

    if u1 > u2 {
        return None;
    }

    Some(Segment::new(
        Point::new(x1 + u1 * dx, y1 + u1 * dy),
        Point::new(x1 + u2 * dx, y1 + u2 * dy),
    ))
}
