use super::*;
use crate::surface::recorder::{DrawCommand, RecordingSurface};

const W: f64 = 3840.0;
const H: f64 = 2160.0;

fn area(poly: &[Point]) -> f64 {
    let n = poly.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (a, b) = (poly[i], poly[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}

fn is_convex_simple(poly: &[Point]) -> bool {
    let n = poly.len();
    let mut sign = 0.0f64;
    for i in 0..n {
        let (a, b, c) = (poly[i], poly[(i + 1) % n], poly[(i + 2) % n]);
        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if cross.abs() < 1e-6 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

#[test]
fn line_through_origin_corner_is_a_single_point() {
    let pts = diagonal_line_points(0.0, W, H, Diagonal::TlBr);
    assert_eq!(pts.as_slice(), &[Point::new(0.0, 0.0)]);

    let pts = diagonal_line_points(0.0, W, H, Diagonal::BlTr);
    assert_eq!(pts.as_slice(), &[Point::new(0.0, H)]);

    let pts = diagonal_line_points(1.0, W, H, Diagonal::TlBr);
    assert_eq!(pts.len(), 1);
    assert!((pts[0].x - W).abs() < 1e-6 && (pts[0].y - H).abs() < 1e-6);
}

#[test]
fn midline_crosses_two_edges_symmetric_about_center() {
    for dir in [Diagonal::TlBr, Diagonal::BlTr] {
        let pts = diagonal_line_points(0.5, W, H, dir);
        assert_eq!(pts.len(), 2);
        let mid = Point::new((pts[0].x + pts[1].x) / 2.0, (pts[0].y + pts[1].y) / 2.0);
        assert!((mid.x - W / 2.0).abs() < 1e-6);
        assert!((mid.y - H / 2.0).abs() < 1e-6);
        for p in &pts {
            assert!((diagonal_offset_of(*p, W, H, dir) - 0.5).abs() < 1e-12);
        }
    }
}

#[test]
fn lines_outside_the_canvas_have_no_points() {
    assert!(diagonal_line_points(-0.1, W, H, Diagonal::TlBr).is_empty());
    assert!(diagonal_line_points(1.2, W, H, Diagonal::BlTr).is_empty());
    assert!(diagonal_line_points(f64::NAN, W, H, Diagonal::TlBr).is_empty());
}

#[test]
fn stripe_areas_partition_the_canvas() {
    let cuts = [0.0, 0.13, 0.16, 0.41, 0.44, 0.97, 1.0];
    for dir in [Diagonal::TlBr, Diagonal::BlTr] {
        let total: f64 = cuts
            .windows(2)
            .map(|w| area(&diagonal_stripe_polygon(w[0], w[1], W, H, dir)))
            .sum();
        assert!((total - W * H).abs() < 1e-3 * W * H, "total {total}");
    }
}

#[test]
fn stripe_polygons_are_convex_and_simple() {
    for (t1, t2) in [(0.0, 0.2), (0.1, 0.4), (0.3, 0.7), (0.45, 0.55), (0.8, 1.0), (0.0, 1.0)] {
        let poly = diagonal_stripe_polygon(t1, t2, W, H, Diagonal::TlBr);
        assert!(poly.len() >= 3, "({t1},{t2}) gave {poly:?}");
        assert!(is_convex_simple(&poly), "({t1},{t2}) not convex: {poly:?}");
    }
}

#[test]
fn full_range_is_the_canvas_rectangle() {
    let poly = diagonal_stripe_polygon(0.0, 1.0, W, H, Diagonal::BlTr);
    assert_eq!(poly.len(), 4);
    assert!((area(&poly) - W * H).abs() < 1e-6);
}

#[test]
fn swapped_offsets_give_the_same_polygon() {
    let a = diagonal_stripe_polygon(0.2, 0.6, W, H, Diagonal::TlBr);
    let b = diagonal_stripe_polygon(0.6, 0.2, W, H, Diagonal::TlBr);
    assert_eq!(a, b);
}

#[test]
fn empty_band_draws_nothing() {
    let mut rec = RecordingSurface::new();
    draw_diagonal_stripe(&mut rec, W, H, 0.5, 0.5, Color::from_u24(0xff0000), Diagonal::TlBr);
    assert!(rec.is_empty());

    draw_diagonal_stripe(&mut rec, W, H, 0.2, 0.5, Color::from_u24(0xff0000), Diagonal::TlBr);
    assert!(matches!(rec.commands(), [DrawCommand::Polygon { .. }]));
}
