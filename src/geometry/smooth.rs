use crate::foundation::core::{BezPath, Point};

/// Smooth a closed polygon into a closed cubic Bézier path that passes through every vertex.
///
/// Uses a uniform Catmull-Rom spline: each segment `p[i] -> p[i+1]` gets control points
/// `p[i] + (p[i+1] - p[i-1]) / 6` and `p[i+1] - (p[i+2] - p[i]) / 6`, so tangents are
/// continuous across vertices. Returns `None` for fewer than three points.
pub fn smooth_closed(points: &[Point]) -> Option<BezPath> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let at = |i: usize| points[i % n];
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for i in 0..n {
        let prev = at(i + n - 1);
        let p0 = at(i);
        let p1 = at(i + 1);
        let next = at(i + 2);
        let c1 = p0 + (p1 - prev) / 6.0;
        let c2 = p1 - (next - p0) / 6.0;
        path.curve_to(c1, c2, p1);
    }
    path.close_path();
    Some(path)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/smooth.rs"]
mod tests;
