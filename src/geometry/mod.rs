//! Geometry primitives for the layout analysis engine.
//!
//! Two operations underpin crossing detection: a ray-casting
//! point-in-polygon test and a parametric segment/polygon-edge
//! intersection. Both operate on page-pixel coordinates and are exact
//! floating-point comparisons with no epsilon, apart from the parallel-edge
//! threshold in [`segment_polygon_intersections`] — inputs come from
//! integer pixel grids, so near-degenerate alignments are not expected.

use crate::page::{Point, Polygon};

/// Edges whose intersection denominator falls below this are treated as
/// parallel and skipped. Colinear overlap is not detected.
const PARALLEL_EPS: f64 = 1e-10;

/// Tests whether `point` lies strictly inside `polygon` by ray casting:
/// a horizontal ray from the point toward +x, counting edge crossings
/// (odd count = inside).
///
/// Edge conventions, which downstream finding counts depend on:
/// - An edge counts only when the ray's y satisfies
///   `y > min(p1y, p2y) && y <= max(p1y, p2y)` (half-open, so shared
///   vertices are not double-counted and horizontal edges never count).
/// - A vertical edge (`p1x == p2x`) flips the parity unconditionally,
///   without computing the x-intercept.
///
/// Degenerate polygons contain nothing. Self-intersecting polygons are not
/// handled; inputs are assumed simple.
pub fn point_in_polygon(point: &Point, polygon: &Polygon) -> bool {
    if polygon.is_degenerate() {
        return false;
    }

    let pts = &polygon.points;
    let n = pts.len();
    let (x, y) = (point.x, point.y);

    let mut inside = false;
    let mut p1 = pts[0];
    for i in 1..=n {
        let p2 = pts[i % n];
        // Half-open y interval; the x bound discards edges entirely to the
        // left of the point. Horizontal edges fail the y test outright.
        if y > p1.y.min(p2.y) && y <= p1.y.max(p2.y) && x <= p1.x.max(p2.x) {
            if p1.x == p2.x {
                inside = !inside;
            } else {
                let xinters = (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if x <= xinters {
                    inside = !inside;
                }
            }
        }
        p1 = p2;
    }

    inside
}

/// An intersection between a query segment and one polygon edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeIntersection {
    /// Where the segment meets the edge.
    pub point: Point,
    /// Index of the edge, where edge `i` runs from vertex `i` to vertex
    /// `(i + 1) % n`.
    pub edge_index: usize,
}

/// Intersects the segment `start`..`end` with every edge of `polygon`
/// (wrapping last to first) and returns all hits in edge order.
///
/// Uses the parametric form: solves for `t` along the segment and `u` along
/// the edge, reporting an intersection when both lie in [0, 1]. Edges
/// parallel to the segment (denominator below the `1e-10` threshold) are
/// skipped, including colinear overlaps. A segment crossing a concave
/// polygon reports every edge it meets, not just the first.
pub fn segment_polygon_intersections(
    start: &Point,
    end: &Point,
    polygon: &Polygon,
) -> Vec<EdgeIntersection> {
    let pts = &polygon.points;
    let n = pts.len();
    let mut intersections = Vec::new();

    let (x1, y1) = (start.x, start.y);
    let (x2, y2) = (end.x, end.y);

    for i in 0..n {
        let (x3, y3) = (pts[i].x, pts[i].y);
        let p4 = pts[(i + 1) % n];
        let (x4, y4) = (p4.x, p4.y);

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom.abs() < PARALLEL_EPS {
            continue;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            intersections.push(EdgeIntersection {
                point: Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)),
                edge_index: i,
            });
        }
    }

    intersections
}
