use super::*;
use kurbo::{PathEl, Shape};

#[test]
fn needs_three_points() {
    assert!(smooth_closed(&[]).is_none());
    assert!(smooth_closed(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_none());
}

#[test]
fn curve_passes_through_every_vertex_and_closes() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let path = smooth_closed(&pts).unwrap();
    let els = path.elements();

    assert_eq!(els.first(), Some(&PathEl::MoveTo(pts[0])));
    assert_eq!(els.last(), Some(&PathEl::ClosePath));

    let ends: Vec<Point> = els
        .iter()
        .filter_map(|el| match el {
            PathEl::CurveTo(_, _, p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(ends, vec![pts[1], pts[2], pts[3], pts[0]]);
}

#[test]
fn tangents_are_continuous_at_vertices() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(7.0, 2.0),
        Point::new(9.0, 8.0),
        Point::new(1.0, 6.0),
    ];
    let path = smooth_closed(&pts).unwrap();
    let cubics: Vec<(Point, Point, Point)> = path
        .elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::CurveTo(a, b, c) => Some((*a, *b, *c)),
            _ => None,
        })
        .collect();

    for i in 0..cubics.len() {
        let (_, in_ctrl, joint) = cubics[i];
        let (out_ctrl, _, _) = cubics[(i + 1) % cubics.len()];
        let incoming = joint - in_ctrl;
        let outgoing = out_ctrl - joint;
        assert!((incoming.x - outgoing.x).abs() < 1e-9);
        assert!((incoming.y - outgoing.y).abs() < 1e-9);
    }
}

#[test]
fn smoothed_square_bulges_outward() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ];
    let area = smooth_closed(&pts).unwrap().area().abs();
    // Catmull-Rom bulges outward between corners.
    assert!(area > 10_000.0 && area < 15_000.0, "area {area}");
}
