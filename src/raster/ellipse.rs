//! Two-region midpoint ellipse rasterizer.

use crate::error::{Error, Result};
use crate::geometry::GridPoint;

/// Rasterize an ellipse boundary with the two-region midpoint algorithm.
///
/// Region 1 covers the arc where the tangent slope magnitude is below 1
/// (while `2·ry²·x < 2·rx²·y`) and steps x every iteration; region 2
/// recomputes its decision variable from the hand-off point and steps y
/// down to the major axis. Each step emits the 4 symmetric reflections
/// relative to the center; reflections coincide on the axes and are
/// emitted without filtering. The two regions join with no gap and no
/// extra hand-off point.
///
/// # Errors
///
/// Returns [`Error::InvalidRadii`] unless both radii are at least 1.
pub fn midpoint_ellipse(center: GridPoint, rx: i32, ry: i32) -> Result<Vec<GridPoint>> {
    if rx < 1 || ry < 1 {
        return Err(Error::InvalidRadii { rx, ry });
    }

    // Wide intermediates: the decision deltas reach 2·r²·r.
    let rx2 = i64::from(rx) * i64::from(rx);
    let ry2 = i64::from(ry) * i64::from(ry);

    let mut points = Vec::new();
    let mut x: i64 = 0;
    let mut y = i64::from(ry);

    // Region 1: slope magnitude < 1.
    let mut d1 = ry2 as f64 - (rx2 * i64::from(ry)) as f64 + 0.25 * rx2 as f64;
    let mut dx = 2 * ry2 * x;
    let mut dy = 2 * rx2 * y;

    while dx < dy {
        emit_quadrants(&mut points, center, x as i32, y as i32);

        if d1 < 0.0 {
            x += 1;
            dx += 2 * ry2;
            d1 += (dx + ry2) as f64;
        } else {
            x += 1;
            y -= 1;
            dx += 2 * ry2;
            dy -= 2 * rx2;
            d1 += (dx - dy + ry2) as f64;
        }
    }

    // Region 2: restart the midpoint test from the hand-off point.
    let mut d2 = ry2 as f64 * (x as f64 + 0.5).powi(2)
        + (rx2 * (y - 1) * (y - 1)) as f64
        - (rx2 * ry2) as f64;

    while y >= 0 {
        emit_quadrants(&mut points, center, x as i32, y as i32);

        if d2 > 0.0 {
            y -= 1;
            dy -= 2 * rx2;
            d2 += (rx2 - dy) as f64;
        } else {
            y -= 1;
            x += 1;
            dx += 2 * ry2;
            dy -= 2 * rx2;
            d2 += (dx - dy + rx2) as f64;
        }
    }

    Ok(points)
}

/// Emit the 4 reflections of one step.
fn emit_quadrants(points: &mut Vec<GridPoint>, center: GridPoint, x: i32, y: i32) {
    for (ox, oy) in [(x, y), (-x, y), (x, -y), (-x, -y)] {
        points.push(GridPoint::new(center.x + ox, center.y + oy));
    }
}
