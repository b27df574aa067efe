//! Midpoint (Bresenham) circle rasterizer.

use crate::error::{Error, Result};
use crate::geometry::GridPoint;

/// Rasterize a circle boundary with the midpoint algorithm.
///
/// Walks the second octant from `(0, r)` to the `x == y` diagonal and emits
/// all 8 reflections of every step relative to the center, so the boundary
/// is closed by construction. Reflections coincide when `x == y` (and on
/// the axes for `x == 0`); the duplicates are emitted, not filtered.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] for a negative radius. Radius 0 emits
/// 8 copies of the center.
pub fn bresenham_circle(center: GridPoint, radius: i32) -> Result<Vec<GridPoint>> {
    if radius < 0 {
        return Err(Error::InvalidRadius { radius });
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    while x <= y {
        emit_octants(&mut points, center, x, y);

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    Ok(points)
}

/// Emit the 8 reflections of an octant step.
fn emit_octants(points: &mut Vec<GridPoint>, center: GridPoint, x: i32, y: i32) {
    for (ox, oy) in [
        (x, y),
        (y, x),
        (-x, y),
        (-y, x),
        (x, -y),
        (y, -x),
        (-x, -y),
        (-y, -x),
    ] {
        points.push(GridPoint::new(center.x + ox, center.y + oy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_negative_radius_rejected() {
        let err = bresenham_circle(GridPoint::new(0, 0), -1).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { radius: -1 }));
    }

    #[test]
    fn test_zero_radius_emits_center_eight_times() {
        let points = bresenham_circle(GridPoint::new(3, -2), 0).unwrap();
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|&p| p == GridPoint::new(3, -2)));
    }

    #[test]
    fn test_radius_three_sequence() {
        let points = bresenham_circle(GridPoint::new(0, 0), 3).unwrap();
        // Three octant steps: (0,3), (1,3), (2,2); 8 reflections each.
        assert_eq!(points.len(), 24);
        assert_eq!(points[0], GridPoint::new(0, 3));
        assert_eq!(points[1], GridPoint::new(3, 0));

        let set: HashSet<_> = points.iter().copied().collect();
        for p in [
            GridPoint::new(0, 3),
            GridPoint::new(1, 3),
            GridPoint::new(2, 2),
            GridPoint::new(3, 1),
            GridPoint::new(3, 0),
            GridPoint::new(-2, -2),
            GridPoint::new(0, -3),
        ] {
            assert!(set.contains(&p), "missing {p:?}");
        }
    }

    #[test]
    fn test_duplicates_kept_on_diagonal() {
        let points = bresenham_circle(GridPoint::new(0, 0), 3).unwrap();
        let diag = points
            .iter()
            .filter(|&&p| p == GridPoint::new(2, 2))
            .count();
        assert_eq!(diag, 2);
    }

    #[test]
    fn test_reflection_symmetry() {
        let points = bresenham_circle(GridPoint::new(0, 0), 10).unwrap();
        let set: HashSet<_> = points.iter().copied().collect();
        for &p in &set {
            assert!(set.contains(&GridPoint::new(-p.x, p.y)));
            assert!(set.contains(&GridPoint::new(p.x, -p.y)));
            assert!(set.contains(&GridPoint::new(p.y, p.x)));
        }
    }

    #[test]
    fn test_points_near_radius() {
        let center = GridPoint::new(5, -7);
        let r = 12;
        for p in bresenham_circle(center, r).unwrap() {
            let dx = f64::from(p.x - center.x);
            let dy = f64::from(p.y - center.y);
            let ring = (dx * dx + dy * dy).sqrt().round() as i32;
            assert!((ring - r).abs() <= 1, "point {p:?} off ring: {ring}");
        }
    }
}
