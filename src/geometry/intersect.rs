use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::color::hex::Color;
use crate::foundation::core::Point;
use crate::geometry::stripes::Diagonal;
use crate::surface::RasterSurface;

/// Slack for edge range tests and duplicate detection, in pixels.
const EDGE_EPS: f64 = 1e-9;

/// Where the line perpendicular to the diagonal at fraction `t` crosses the canvas border.
///
/// `t = 0` passes through the diagonal's origin corner, `t = 1` through the opposite one.
/// Returns 0 points when the line misses the canvas, 1 when it touches a corner, 2 otherwise.
pub fn diagonal_line_points(
    t: f64,
    width: f64,
    height: f64,
    dir: Diagonal,
) -> SmallVec<[Point; 4]> {
    let mut out: SmallVec<[Point; 4]> = SmallVec::new();
    if !(width > 0.0 && height > 0.0 && t.is_finite()) {
        return out;
    }

    // Solved for the top-left origin; bottom-left is the same problem with y flipped.
    // The line is x*w + y*h = t*(w^2 + h^2).
    let k = t * (width * width + height * height);
    let in_range = |v: f64, max: f64| (-EDGE_EPS..=max + EDGE_EPS).contains(&v);

    let top_x = k / width;
    if in_range(top_x, width) {
        push_unique(&mut out, Point::new(top_x.clamp(0.0, width), 0.0));
    }
    let bottom_x = (k - height * height) / width;
    if in_range(bottom_x, width) {
        push_unique(&mut out, Point::new(bottom_x.clamp(0.0, width), height));
    }
    let left_y = k / height;
    if in_range(left_y, height) {
        push_unique(&mut out, Point::new(0.0, left_y.clamp(0.0, height)));
    }
    let right_y = (k - width * width) / height;
    if in_range(right_y, height) {
        push_unique(&mut out, Point::new(width, right_y.clamp(0.0, height)));
    }

    if dir == Diagonal::BlTr {
        for p in &mut out {
            p.y = height - p.y;
        }
    }
    out
}

/// Fraction along the diagonal at which the perpendicular line passes through `p`.
pub fn diagonal_offset_of(p: Point, width: f64, height: f64, dir: Diagonal) -> f64 {
    let y = match dir {
        Diagonal::TlBr => p.y,
        Diagonal::BlTr => height - p.y,
    };
    (p.x * width + y * height) / (width * width + height * height)
}

/// Polygon covering the canvas between diagonal offsets `t1` and `t2`.
///
/// Collects both boundary lines' border crossings plus the canvas corners lying between
/// them, then orders the vertices by angle around their centroid so the outline is simple.
/// Returns an empty vector when the band has no area inside the canvas.
pub fn diagonal_stripe_polygon(
    t1: f64,
    t2: f64,
    width: f64,
    height: f64,
    dir: Diagonal,
) -> Vec<Point> {
    let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

    let mut points: SmallVec<[Point; 8]> = SmallVec::new();
    for p in diagonal_line_points(lo, width, height, dir)
        .into_iter()
        .chain(diagonal_line_points(hi, width, height, dir))
    {
        push_unique(&mut points, p);
    }
    for corner in [
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ] {
        let t = diagonal_offset_of(corner, width, height, dir);
        if t > lo && t < hi {
            push_unique(&mut points, corner);
        }
    }

    if points.len() < 3 {
        return Vec::new();
    }
    sort_by_angle(&mut points);
    points.into_vec()
}

/// Fill the stripe between diagonal offsets `t1` and `t2` with `color`.
pub fn draw_diagonal_stripe(
    surface: &mut dyn RasterSurface,
    width: f64,
    height: f64,
    t1: f64,
    t2: f64,
    color: Color,
    dir: Diagonal,
) {
    let polygon = diagonal_stripe_polygon(t1, t2, width, height, dir);
    surface.fill_polygon(&polygon, color);
}

/// Order points by angle around their centroid, which yields a simple outline for convex sets.
pub fn sort_by_angle(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let (cx, cy) = (sx / n, sy / n);
    points.sort_by(|a, b| {
        let aa = (a.y - cy).atan2(a.x - cx);
        let ab = (b.y - cy).atan2(b.x - cx);
        aa.partial_cmp(&ab).unwrap_or(Ordering::Equal)
    });
}

fn push_unique<A: smallvec::Array<Item = Point>>(points: &mut SmallVec<A>, p: Point) {
    let dup = points
        .iter()
        .any(|q| (q.x - p.x).abs() <= EDGE_EPS && (q.y - p.y).abs() <= EDGE_EPS);
    if !dup {
        points.push(p);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/intersect.rs"]
mod tests;
