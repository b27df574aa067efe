//! Sutherland-Hodgman convex polygon clipping and shoelace area.

use crate::error::{Error, Result};
use crate::geometry::{ClipRect, Point};

/// Near-parallel determinant cutoff for the edge intersection test.
const INTERSECTION_EPSILON: f64 = 1e-10;

/// Clip a subject polygon against a convex clip polygon.
///
/// The working list starts as the subject and is clipped against the
/// half-plane of each directed clip edge in turn. A vertex counts as
/// inside when the cross product `(edge_end − edge_start) ×
/// (vertex − edge_start)` is non-negative, so the clip polygon must be
/// wound counter-clockwise (interior on each edge's left).
///
/// The result may be empty (subject entirely outside) and is convex
/// whenever both inputs are convex. Input order is preserved up to the
/// rotation inherent in edge-by-edge re-emission.
///
/// # Errors
///
/// Returns [`Error::DegeneratePolygon`] when either polygon has fewer than
/// 3 vertices.
pub fn clip_polygon(subject: &[Point], clip: &[Point]) -> Result<Vec<Point>> {
    if subject.len() < 3 {
        return Err(Error::DegeneratePolygon {
            vertices: subject.len(),
        });
    }
    if clip.len() < 3 {
        return Err(Error::DegeneratePolygon {
            vertices: clip.len(),
        });
    }

    let mut working = subject.to_vec();

    for i in 0..clip.len() {
        if working.is_empty() {
            break;
        }

        let clip_start = clip[i];
        let clip_end = clip[(i + 1) % clip.len()];

        let input = std::mem::take(&mut working);
        for j in 0..input.len() {
            let current = input[j];
            let next = input[(j + 1) % input.len()];

            let current_inside = is_inside(current, clip_start, clip_end);
            let next_inside = is_inside(next, clip_start, clip_end);

            match (current_inside, next_inside) {
                (true, true) => working.push(next),
                (true, false) => {
                    if let Some(crossing) = intersection(current, next, clip_start, clip_end) {
                        working.push(crossing);
                    }
                }
                (false, true) => {
                    if let Some(crossing) = intersection(current, next, clip_start, clip_end) {
                        working.push(crossing);
                    }
                    working.push(next);
                }
                (false, false) => {}
            }
        }
    }

    Ok(working)
}

/// Clip a subject polygon against an axis-aligned rectangle.
///
/// The rectangle's counter-clockwise corner loop feeds the general convex
/// clipper, so each edge's half-plane test reduces to a coordinate
/// comparison against the rectangle bounds.
///
/// # Errors
///
/// Returns [`Error::DegeneratePolygon`] when the subject has fewer than 3
/// vertices.
pub fn clip_polygon_rect(subject: &[Point], rect: ClipRect) -> Result<Vec<Point>> {
    clip_polygon(subject, &rect.corners())
}

/// Measure a polygon's area with the shoelace formula.
///
/// Sums the cross products of consecutive vertex pairs with wraparound and
/// halves the absolute value. Degenerate inputs (fewer than 3 vertices)
/// measure 0.
#[must_use]
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let mut doubled = 0.0;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        doubled += a.x * b.y - b.x * a.y;
    }

    doubled.abs() / 2.0
}

/// Half-plane test against a directed edge; boundary counts as inside.
fn is_inside(point: Point, edge_start: Point, edge_end: Point) -> bool {
    (edge_end.x - edge_start.x) * (point.y - edge_start.y)
        - (edge_end.y - edge_start.y) * (point.x - edge_start.x)
        >= 0.0
}

/// Intersect segment `a1 -> a2` with the infinite line through `b1 -> b2`.
///
/// Returns `None` when the 2x2 determinant of the direction vectors is
/// below [`INTERSECTION_EPSILON`] (near-parallel) or the crossing falls
/// outside the segment. The classification in the caller should rule the
/// parallel case out, but the determinant guard is still required: the
/// inside tests and the determinant round differently near zero.
fn intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let denom = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if denom.abs() < INTERSECTION_EPSILON {
        return None;
    }

    let t = ((a1.x - b1.x) * (b1.y - b2.y) - (a1.y - b1.y) * (b1.x - b2.x)) / denom;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    Some(Point::new(
        a1.x + t * (a2.x - a1.x),
        a1.y + t * (a2.y - a1.y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_square_against_rect_corner() {
        let subject = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let clipped =
            clip_polygon_rect(&subject, ClipRect::new(2.0, 2.0, 10.0, 10.0)).unwrap();
        assert_eq!(
            clipped,
            poly(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)])
        );
        assert_relative_eq!(polygon_area(&clipped), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_subject_rejected() {
        let subject = poly(&[(0.0, 0.0), (1.0, 1.0)]);
        let err = clip_polygon_rect(&subject, ClipRect::new(0.0, 0.0, 5.0, 5.0)).unwrap_err();
        assert!(matches!(err, Error::DegeneratePolygon { vertices: 2 }));
    }

    #[test]
    fn test_degenerate_clip_rejected() {
        let subject = poly(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        let clip = poly(&[(0.0, 0.0)]);
        assert!(matches!(
            clip_polygon(&subject, &clip),
            Err(Error::DegeneratePolygon { vertices: 1 })
        ));
    }

    #[test]
    fn test_fully_outside_is_empty() {
        let subject = poly(&[(20.0, 20.0), (24.0, 20.0), (22.0, 25.0)]);
        let clipped =
            clip_polygon_rect(&subject, ClipRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(clipped.is_empty());
    }

    #[test]
    fn test_fully_inside_preserves_vertices() {
        let subject = poly(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]);
        let clipped =
            clip_polygon_rect(&subject, ClipRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        // Four all-inside passes rotate a 4-vertex list back to start.
        assert_eq!(clipped, subject);
    }

    #[test]
    fn test_triangle_clip_region() {
        let subject = poly(&[(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)]);
        let clip = poly(&[(1.0, 1.0), (7.0, 1.0), (4.0, 7.0)]);
        let clipped = clip_polygon(&subject, &clip).unwrap();
        // Clip region sits inside the subject: result is the clip triangle.
        assert_relative_eq!(polygon_area(&clipped), polygon_area(&clip), epsilon = 1e-9);
        assert_eq!(clipped.len(), 3);
    }

    #[test]
    fn test_vertex_bound() {
        let subject = poly(&[
            (0.0, 0.0),
            (2.0, 5.0),
            (4.0, 0.0),
            (6.0, 5.0),
            (8.0, 0.0),
            (8.0, -3.0),
            (4.0, -5.0),
            (0.0, -3.0),
        ]);
        let clip = poly(&[(1.0, -2.0), (7.0, -2.0), (4.0, 6.0)]);
        let clipped = clip_polygon(&subject, &clip).unwrap();
        assert!(clipped.len() <= subject.len() + clip.len());
    }

    #[test]
    fn test_area_square() {
        let square = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_relative_eq!(polygon_area(&square), 16.0);
    }

    #[test]
    fn test_area_winding_independent() {
        let ccw = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let cw: Vec<Point> = ccw.iter().rev().copied().collect();
        assert_relative_eq!(polygon_area(&ccw), polygon_area(&cw));
    }

    #[test]
    fn test_area_concave() {
        // L-shape: 3x3 square minus 2x2 notch.
        let l_shape = poly(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]);
        assert_relative_eq!(polygon_area(&l_shape), 5.0);
    }

    #[test]
    fn test_area_degenerate_is_zero() {
        assert_relative_eq!(polygon_area(&[]), 0.0);
        assert_relative_eq!(polygon_area(&poly(&[(1.0, 2.0), (3.0, 4.0)])), 0.0);
    }

    #[test]
    fn test_idempotent_on_exact_case() {
        let subject = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let rect = ClipRect::new(2.0, 2.0, 10.0, 10.0);
        let once = clip_polygon_rect(&subject, rect).unwrap();
        let twice = clip_polygon_rect(&once, rect).unwrap();
        assert_eq!(once, twice);
    }
}
